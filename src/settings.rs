//! Game settings and preferences

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            mute_on_blur: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string, falling back to defaults on
    /// missing or malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Malformed settings, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.master_volume = 0.5;
        settings.show_fps = true;

        let restored = Settings::from_json(&settings.to_json());
        assert_eq!(restored.master_volume, 0.5);
        assert!(restored.show_fps);
    }

    #[test]
    fn test_malformed_falls_back_to_defaults() {
        let settings = Settings::from_json("not json");
        assert_eq!(settings.master_volume, Settings::default().master_volume);
    }
}
