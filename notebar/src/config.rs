use notebar_ui_scroll::{Density, Dp};
use serde::Deserialize;
use thiserror::Error;

use crate::shared::ui::theme::ColorPalette;

const EMBEDDED_SCREEN_CONFIG: &str =
    include_str!("../../assets/config/screen.json");

/// Errors emitted while decoding or validating the screen config.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// JSON deserialization failed.
    #[error("screen config JSON failed")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Fixed configuration of the notes screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ScreenConfig {
    pub(crate) title: String,
    pub(crate) note_count: usize,
    /// Height of the visible bottom bar.
    pub(crate) bar_height_dp: f32,
    /// How far the chrome travels before it is fully hidden.
    pub(crate) hide_distance_dp: f32,
    pub(crate) density: f32,
    pub(crate) palette: ColorPalette,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: String::from("Google Notes BottomBar"),
            note_count: 20,
            bar_height_dp: 55.0,
            hide_distance_dp: 85.0,
            density: 1.0,
            palette: ColorPalette::default(),
        }
    }
}

impl ScreenConfig {
    /// Load the config embedded in the binary, falling back to defaults.
    pub(crate) fn load() -> Self {
        match Self::parse(EMBEDDED_SCREEN_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("screen config rejected, using defaults: {err}");
                Self::default()
            },
        }
    }

    /// Decode and validate a JSON config.
    pub(crate) fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn bar_height(&self) -> Dp {
        Dp(self.bar_height_dp)
    }

    pub(crate) fn hide_distance(&self) -> Dp {
        Dp(self.hide_distance_dp)
    }

    pub(crate) fn density(&self) -> Density {
        Density::new(self.density).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if Density::new(self.density).is_none() {
            return Err(validation(format!(
                "density must be a positive number, got {}",
                self.density
            )));
        }

        if !self.bar_height_dp.is_finite() || self.bar_height_dp <= 0.0 {
            return Err(validation(format!(
                "bar_height_dp must be a positive number, got {}",
                self.bar_height_dp
            )));
        }

        if !self.hide_distance_dp.is_finite() || self.hide_distance_dp < 0.0 {
            return Err(validation(format!(
                "hide_distance_dp must not be negative, got {}",
                self.hide_distance_dp
            )));
        }

        let invalid = self.palette.invalid_entries();
        if !invalid.is_empty() {
            return Err(validation(format!(
                "palette entries are not hex colors: {}",
                invalid.join(", ")
            )));
        }

        Ok(())
    }
}

fn validation(message: String) -> ConfigError {
    ConfigError::Validation { message }
}
