//! Switch bank and sound log written by move routes.
use std::collections::BTreeMap;

use motion_core::{EffectSink, SoundEffect};

/// Side effects collected from character updates.
///
/// Switches persist for the lifetime of the map. Sounds and the refresh
/// request accumulate until the owner drains them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapEffects {
    switches: BTreeMap<i32, bool>,
    sounds: Vec<SoundEffect>,
    needs_refresh: bool,
}

impl MapEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unset switches read as off.
    pub fn switch(&self, switch_id: i32) -> bool {
        self.switches.get(&switch_id).copied().unwrap_or(false)
    }

    pub fn switches(&self) -> impl Iterator<Item = (i32, bool)> + '_ {
        self.switches.iter().map(|(id, value)| (*id, *value))
    }

    pub fn sounds(&self) -> &[SoundEffect] {
        &self.sounds
    }

    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// Returns whether a refresh was requested and clears the request.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }
}

impl EffectSink for MapEffects {
    fn play_sound(&mut self, sound: &SoundEffect) {
        tracing::debug!(name = %sound.name, volume = sound.volume, "sound queued");
        self.sounds.push(sound.clone());
    }

    fn set_switch(&mut self, switch_id: i32, value: bool) {
        self.switches.insert(switch_id, value);
    }

    fn request_refresh(&mut self) {
        self.needs_refresh = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_request_is_drained_once() {
        let mut effects = MapEffects::new();
        effects.set_switch(4, true);
        effects.request_refresh();

        assert!(effects.switch(4));
        assert!(!effects.switch(5));
        assert!(effects.take_refresh());
        assert!(!effects.needs_refresh());
        assert!(!effects.take_refresh());
    }
}
