use crate::env::OracleError;
use crate::state::{CharacterState, EventId, VehicleKind};

/// Reference to a character as written in event scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterRef {
    Player,
    Vehicle(VehicleKind),
    /// The event whose script is running.
    ThisEvent,
    Event(EventId),
}

impl CharacterRef {
    pub const PLAYER_CODE: i32 = 10001;
    pub const BOAT_CODE: i32 = 10002;
    pub const SHIP_CODE: i32 = 10003;
    pub const AIRSHIP_CODE: i32 = 10004;
    pub const THIS_EVENT_CODE: i32 = 10005;

    /// Decodes the legacy script encoding; any other value is an event id.
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::PLAYER_CODE => Self::Player,
            Self::BOAT_CODE => Self::Vehicle(VehicleKind::Boat),
            Self::SHIP_CODE => Self::Vehicle(VehicleKind::Ship),
            Self::AIRSHIP_CODE => Self::Vehicle(VehicleKind::Airship),
            Self::THIS_EVENT_CODE => Self::ThisEvent,
            other => Self::Event(EventId(other.max(0) as u32)),
        }
    }
}

/// Resolves script references to live characters.
///
/// `context_event` is the event running the script, used for
/// [`CharacterRef::ThisEvent`].
pub trait CharacterLookup {
    fn resolve(
        &self,
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> Result<&CharacterState, OracleError>;

    fn resolve_mut(
        &mut self,
        reference: CharacterRef,
        context_event: Option<EventId>,
    ) -> Result<&mut CharacterState, OracleError>;
}
