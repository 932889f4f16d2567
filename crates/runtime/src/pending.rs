//! Characters waiting on a forced route.
use motion_core::{CharacterId, PendingMoveRegistry};

/// Ordered set of characters whose forced route has not finished yet.
///
/// Scripts poll [`PendingMoves::is_empty`] to implement "wait for all
/// movement".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingMoves {
    characters: Vec<CharacterId>,
}

impl PendingMoves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, character: CharacterId) -> bool {
        self.characters.contains(&character)
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.iter().copied()
    }
}

impl PendingMoveRegistry for PendingMoves {
    fn add(&mut self, character: CharacterId) {
        if !self.contains(character) {
            self.characters.push(character);
        }
    }

    fn remove(&mut self, character: CharacterId) {
        self.characters.retain(|pending| *pending != character);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut pending = PendingMoves::new();
        pending.add(CharacterId(3));
        pending.add(CharacterId(3));
        pending.add(CharacterId(1));

        assert_eq!(pending.iter().collect::<Vec<_>>(), [CharacterId(3), CharacterId(1)]);

        pending.remove(CharacterId(3));
        assert!(!pending.contains(CharacterId(3)));
        assert_eq!(pending.len(), 1);
    }
}
