use bitflags::bitflags;

bitflags! {
    /// Boolean movement state of a character.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MovementFlags: u16 {
        const JUMPING       = 1 << 0;
        /// Held in place by an external interaction (e.g. talking to it).
        const PAUSED        = 1 << 1;
        const FACING_LOCKED = 1 << 2;
        /// Ignores collision ("walk everywhere").
        const THROUGH       = 1 << 3;
        const ANIM_PAUSED   = 1 << 4;
        const FLYING        = 1 << 5;
        const ACTIVE        = 1 << 6;
        /// Already updated during the current tick.
        const PROCESSED     = 1 << 7;
        /// THROUGH was set by a move route rather than by the map owner.
        const ROUTE_THROUGH = 1 << 8;
    }
}
