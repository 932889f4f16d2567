use crate::route::SoundEffect;

/// Side effects a route may request from the surrounding game.
pub trait EffectSink {
    fn play_sound(&mut self, sound: &SoundEffect);

    fn set_switch(&mut self, switch_id: i32, value: bool);

    /// Page conditions may depend on switches; the map re-evaluates them.
    fn request_refresh(&mut self);
}
