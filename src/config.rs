use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindow { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Light => iced::Theme::Light,
            ThemeChoice::Dark => iced::Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// GUI settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub window: WindowSettings,
    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Hover Popup".to_string(),
            window: WindowSettings::default(),
            theme: ThemeChoice::default(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Settings::default());
        };

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;

        tracing::info!("loaded config from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let WindowSettings { width, height } = self.window;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if positive(width) && positive(height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidWindow { width, height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hover_popup_{}_{name}", std::process::id()));
        fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn missing_path_means_defaults() {
        let settings = Settings::load(None).expect("defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.theme.theme(), iced::Theme::Light);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial.json", r#"{ "theme": "dark", "window": { "width": 800 } }"#);
        let settings = Settings::load(Some(&path)).expect("valid config");
        fs::remove_file(&path).ok();

        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.window.width, 800.0);
        assert_eq!(settings.window.height, 480.0);
        assert_eq!(settings.title, "Hover Popup");
    }

    #[test]
    fn unknown_theme_is_a_parse_error() {
        let path = temp_file("theme.json", r#"{ "theme": "solarized" }"#);
        let result = Settings::load(Some(&path));
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn rejects_empty_window() {
        let path = temp_file("window.json", r#"{ "window": { "width": 0, "height": 300 } }"#);
        let result = Settings::load(Some(&path));
        fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidWindow { width, .. }) if width == 0.0
        ));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let path = std::env::temp_dir().join("hover_popup_does_not_exist.json");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(ConfigError::Io { .. })
        ));
    }
}
