//! Player preferences
//!
//! Persisted in LocalStorage on the web. Native builds read an optional JSON
//! file named by the `PONG8_SETTINGS` environment variable.

use serde::{Deserialize, Serialize};

/// Key names (as reported by `KeyboardEvent.key`) for each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub confirm: Vec<String>,
    /// Toggle sound (host only, not simulation input)
    pub mute: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys =
            |names: &[&str]| -> Vec<String> { names.iter().map(|k| k.to_string()).collect() };
        Self {
            up: keys(&["w", "W", "ArrowUp"]),
            down: keys(&["s", "S", "ArrowDown"]),
            confirm: keys(&["Enter"]),
            mute: keys(&["m", "M"]),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
    pub bindings: KeyBindings,
    /// Fixed RNG seed for reproducible matches (clock-based when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: false,
            bindings: KeyBindings::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "pong8_settings";

    /// Environment variable naming a settings file (native only)
    pub const ENV_VAR: &'static str = "PONG8_SETTINGS";

    /// Parse settings from JSON. Missing fields take their defaults and
    /// volumes are clamped into range.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Flip mute and return the new state
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings back to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), wasm_bindgen::JsValue> {
        let storage = web_sys::window()
            .ok_or("no window")?
            .local_storage()?
            .ok_or("LocalStorage unavailable")?;
        let json = self
            .to_json()
            .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
        storage.set_item(Self::STORAGE_KEY, &json)?;
        log::debug!("Settings saved: {}", json);
        Ok(())
    }

    /// Load settings from the file named by `PONG8_SETTINGS`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings in {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert!(bindings.up.contains(&"w".to_string()));
        assert!(bindings.down.contains(&"s".to_string()));
        assert_eq!(bindings.confirm, vec!["Enter".to_string()]);
        assert_eq!(bindings.mute, vec!["m".to_string(), "M".to_string()]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"muted": true, "seed": 7}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.bindings, KeyBindings::default());
    }

    #[test]
    fn test_custom_bindings() {
        let json = r#"{"bindings": {"up": ["i"], "down": ["k"]}}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.bindings.up, vec!["i".to_string()]);
        assert_eq!(settings.bindings.down, vec!["k".to_string()]);
        assert_eq!(settings.bindings.confirm, vec!["Enter".to_string()]);
    }

    #[test]
    fn test_volume_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 3.0, "sfx_volume": -1.0}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_toggle_muted_survives_json() {
        let mut settings = Settings::default();
        assert!(settings.toggle_muted());
        let reloaded = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert!(reloaded.muted);
        assert!(!settings.toggle_muted());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{"muted": "yes"}"#).is_err());
    }
}
