// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Startup settings: compiled-in defaults plus an environment override for the icon.

use std::path::PathBuf;

use crate::models::calibration::{AssumedConditions, CalibrationConstants};

/// Environment variable that overrides the window icon path.
pub const ICON_ENV: &str = "FILM_THICKNESS_ICON";
/// Icon looked up relative to the working directory when no override is set.
pub const DEFAULT_ICON_PATH: &str = "assets/icon.png";
/// Pressure pre-filled in the form, in mTorr.
pub const DEFAULT_PRESSURE: &str = "70";

/// Everything the window needs at launch.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub icon_path: PathBuf,
    pub default_pressure: String,
    pub constants: CalibrationConstants,
    pub conditions: AssumedConditions,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_title: "Doped:HfO₂ Thin Film Thickness Calculator".to_string(),
            inner_size: [460.0, 520.0],
            min_inner_size: [380.0, 440.0],
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
            default_pressure: DEFAULT_PRESSURE.to_string(),
            constants: CalibrationConstants::HFO2,
            conditions: AssumedConditions::HFO2,
        }
    }
}

impl AppSettings {
    /// Defaults with `FILM_THICKNESS_ICON` applied when set and non-empty.
    pub fn from_env() -> Self {
        Self::with_icon_override(std::env::var_os(ICON_ENV).map(PathBuf::from))
    }

    fn with_icon_override(icon: Option<PathBuf>) -> Self {
        let mut settings = Self::default();
        if let Some(path) = icon.filter(|p| !p.as_os_str().is_empty()) {
            settings.icon_path = path;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefill_pressure_and_hfo2_fit() {
        let s = AppSettings::default();
        assert_eq!(s.default_pressure, "70");
        assert_eq!(s.constants, CalibrationConstants::HFO2);
        assert_eq!(s.icon_path, PathBuf::from("assets/icon.png"));
    }

    #[test]
    fn icon_override_replaces_default_path() {
        let s = AppSettings::with_icon_override(Some(PathBuf::from("/opt/logo.png")));
        assert_eq!(s.icon_path, PathBuf::from("/opt/logo.png"));
    }

    #[test]
    fn empty_icon_override_is_ignored() {
        let s = AppSettings::with_icon_override(Some(PathBuf::new()));
        assert_eq!(s.icon_path, PathBuf::from(DEFAULT_ICON_PATH));
    }
}
