use crate::state::CharacterId;

/// Map-owned list of characters that currently run a forced move route.
///
/// Scripts wait on this list to know when forced movement is done.
pub trait PendingMoveRegistry {
    fn add(&mut self, character: CharacterId);

    /// Removing an absent character is a no-op.
    fn remove(&mut self, character: CharacterId);
}
