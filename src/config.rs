//! Viewport configuration
//!
//! Stored as YAML in `~/.config/zoomport/config.yaml`. Every field is
//! optional in the file; missing fields take their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::FitMode;
use crate::model::zoom::{ZoomConfig, MIN_SCALE};

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Allow double-tap and pinch zoom
    #[serde(default = "default_zoom_enabled")]
    pub zoom_enabled: bool,

    /// Ceiling for the zoom scale (never below 1.0)
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,

    /// Jump to `max_scale` whenever the container frame changes
    #[serde(default)]
    pub zoom_in_initially: bool,

    /// How the image fills the container at minimum zoom
    #[serde(default)]
    pub fit_mode: FitMode,
}

fn default_zoom_enabled() -> bool {
    true
}

fn default_max_scale() -> f64 {
    2.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_enabled: default_zoom_enabled(),
            max_scale: default_max_scale(),
            zoom_in_initially: false,
            fit_mode: FitMode::default(),
        }
    }
}

impl ViewportConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse YAML, clamping out-of-range values
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Save config, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp `max_scale` into range
    pub fn normalized(mut self) -> Self {
        if !self.max_scale.is_finite() || self.max_scale < MIN_SCALE {
            tracing::warn!(
                "max_scale {} out of range, using {}",
                self.max_scale,
                MIN_SCALE
            );
            self.max_scale = MIN_SCALE;
        }
        self
    }

    pub fn zoom_config(&self) -> ZoomConfig {
        ZoomConfig {
            max_scale: self.max_scale,
            zoom_in_initially: self.zoom_in_initially,
            zoom_enabled: self.zoom_enabled,
        }
    }
}
