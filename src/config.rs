use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::settings::BaseSettings;

pub const CONFIG_ENV: &str = "ALIEN_INVASION_CONFIG";
pub const FPS_ENV: &str = "ALIEN_INVASION_FPS";
pub const LOG_ENV: &str = "ALIEN_INVASION_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Everything the binary needs before the terminal is taken over.
#[derive(Clone, Debug)]
pub struct Config {
    pub settings: BaseSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = match env::var_os(CONFIG_ENV) {
            Some(path) => load_settings(Path::new(&path))?,
            None => BaseSettings::default(),
        };

        if let Ok(raw) = env::var(FPS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(fps) if fps > 0 => settings.frames_per_second = fps,
                _ => tracing::warn!(
                    "{} ({:?}) is not a positive integer, keeping {} fps",
                    FPS_ENV,
                    raw,
                    settings.frames_per_second
                ),
            }
        }
        settings.validate()?;

        Ok(Self { settings })
    }
}

/// Read on its own so logging can be up before the rest of the config loads.
pub fn log_file_from_env() -> Option<PathBuf> {
    env::var_os(LOG_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Read a JSON settings file. Absent fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<BaseSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: BaseSettings =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::settings::Rgb;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let file = write_config(r#"{ "screen_width": 800, "bg_color": [0, 0, 0], "bullets_allowed": 5 }"#);
        let s = load_settings(file.path()).unwrap();
        assert_eq!(s.screen_width, 800);
        assert_eq!(s.bg_color, Rgb(0, 0, 0));
        assert_eq!(s.bullets_allowed, 5);
        assert_eq!(s.screen_height, 800);
        assert_eq!(s.alien_points, 50);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_settings(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let file = write_config(r#"{ "warp_drive": true }"#);
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_values_are_rejected_after_parsing() {
        let file = write_config(r#"{ "score_scale": 0.5 }"#);
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("score_scale"));
    }
}
