use crate::state::Position;

/// Locates the reference character that "toward"/"away" commands aim at.
pub trait TargetLocator {
    fn target_position(&self) -> Position;
}

impl TargetLocator for Position {
    fn target_position(&self) -> Position {
        *self
    }
}
