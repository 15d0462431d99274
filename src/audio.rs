//! Sound cue routing
//!
//! Maps simulation events to sound effects and forwards them to whatever
//! `AudioSink` the platform provides, scaled by the volume settings.

use crate::platform::AudioSink;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump or double jump
    Jump,
    /// Coin picked up
    Coin,
    /// Player hit the obstacle
    Collision,
    /// Run ended
    GameOver,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Forward one tick's simulation events as sound cues
    pub fn route(&self, events: &[GameEvent], sink: &mut dyn AudioSink) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for event in events {
            let effect = match event {
                GameEvent::Jumped => SoundEffect::Jump,
                GameEvent::CoinCollected => SoundEffect::Coin,
                GameEvent::ObstacleHit => SoundEffect::Collision,
                GameEvent::SessionEnded => SoundEffect::GameOver,
            };
            sink.play(effect, vol);
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::NullAudio;

    #[test]
    fn test_events_map_to_cues() {
        let manager = AudioManager::default();
        let mut sink = NullAudio::default();
        manager.route(
            &[GameEvent::Jumped, GameEvent::CoinCollected],
            &mut sink,
        );
        assert_eq!(sink.played, vec![SoundEffect::Jump, SoundEffect::Coin]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut manager = AudioManager::default();
        manager.set_muted(true);
        let mut sink = NullAudio::default();
        manager.route(&[GameEvent::ObstacleHit], &mut sink);
        assert!(sink.played.is_empty());
    }
}
