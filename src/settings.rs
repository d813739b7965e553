//! Backdrop settings and preferences
//!
//! Persisted in LocalStorage on the web build.

use serde::{Deserialize, Serialize};

use crate::consts::{SPAWN_CHANCE, SPAWN_COOLDOWN_MS};
use crate::sim::FieldConfig;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    /// Stars seeded per viewport for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 60,
            QualityPreset::Medium => 90,
            QualityPreset::High => 120,
        }
    }
}

/// Backdrop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Density preset
    pub quality: QualityPreset,
    /// Explicit star count, overrides the preset
    pub star_count: Option<usize>,
    /// Shooting stars crossing the sky
    pub shooting_stars: bool,
    /// Twinkling star brightness
    pub twinkle: bool,
    /// Reduced motion (no shooting stars, steady stars)
    pub reduced_motion: bool,
    /// Per-frame spawn chance once the cooldown has elapsed
    pub spawn_chance: f64,
    /// Minimum ms between shooting stars
    pub spawn_cooldown_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::High,
            star_count: None,
            shooting_stars: true,
            twinkle: true,
            reduced_motion: false,
            spawn_chance: SPAWN_CHANCE,
            spawn_cooldown_ms: SPAWN_COOLDOWN_MS,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Effective star count
    pub fn star_count(&self) -> usize {
        self.star_count.unwrap_or_else(|| self.quality.star_count())
    }

    /// Effective shooting stars (respects reduced_motion)
    pub fn effective_shooting_stars(&self) -> bool {
        self.shooting_stars && !self.reduced_motion
    }

    /// Effective twinkle (respects reduced_motion)
    pub fn effective_twinkle(&self) -> bool {
        self.twinkle && !self.reduced_motion
    }

    /// Animator configuration for these settings
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            star_count: self.star_count(),
            spawn_cooldown_ms: self.spawn_cooldown_ms.max(0.0),
            spawn_chance: self.spawn_chance.clamp(0.0, 1.0),
            shooting_stars: self.effective_shooting_stars(),
            twinkle: self.effective_twinkle(),
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "starfield_settings";

    /// Load settings from LocalStorage (WASM only)
    ///
    /// A missing or unreadable entry is replaced with the defaults.
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
        let settings = Self::default();
        settings.save();
        settings
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                },
                Err(e) => log::warn!("Failed to encode settings: {}", e),
            }
        }
    }

    /// Native: defaults, overridable with STARFIELD_SETTINGS (JSON)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("STARFIELD_SETTINGS") {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring STARFIELD_SETTINGS: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
