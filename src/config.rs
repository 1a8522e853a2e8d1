//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/scenecon/scenecon.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `SCENECON_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Console settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Prompt printed before each line in interactive mode
    pub prompt: String,
    /// Fixed angular delta of `camera rotate`, in degrees
    pub camera_step_degrees: f32,
    /// Initial world gravity of a fresh scene
    pub gravity: [f32; 3],
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            camera_step_degrees: 10.0,
            gravity: [0.0, -9.8, 0.0],
            color: true,
        }
    }
}

/// Get the XDG config directory for scenecon.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "scenecon").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("scenecon.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), explicit)
    }

    /// Load with an explicit global file location (used by [`Settings::load`] and tests).
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("prompt", defaults.prompt.clone())
            .map_err(config_err)?
            .set_default("camera_step_degrees", f64::from(defaults.camera_step_degrees))
            .map_err(config_err)?
            .set_default(
                "gravity",
                defaults.gravity.iter().map(|&g| f64::from(g)).collect::<Vec<_>>(),
            )
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            debug!(path = %global_path.display(), "loading global config");
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCENECON")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("gravity")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if !(self.camera_step_degrees.is_finite() && self.camera_step_degrees > 0.0) {
            return Err(ApplicationError::Config {
                message: format!(
                    "camera_step_degrees must be a positive number, got {}",
                    self.camera_step_degrees
                ),
            });
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(ApplicationError::Config {
                message: format!("gravity must be finite, got {:?}", self.gravity),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# scenecon configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/scenecon/scenecon.toml
#   File:   scenecon --config <file>
#   Env:    SCENECON_* environment variables

# Prompt shown in interactive mode
# prompt = "> "

# Angle applied by `camera rotate <axis>`, in degrees
# camera_step_degrees = 10.0

# World gravity of a fresh scene
# gravity = [0.0, -9.8, 0.0]

# Colored output
# color = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_defaults_when_serialized_then_round_trips_through_toml() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("prompt = \"> \""));
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_plain_path_when_expanding_then_unchanged() {
        let path = Path::new("/etc/scenecon/scenecon.toml");
        assert_eq!(expand_path(path), path.to_path_buf());
    }
}
