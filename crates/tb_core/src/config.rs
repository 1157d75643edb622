//! # Board Configuration
//!
//! Host-tunable presentation values: default player label, ball home, arrow
//! style and the user-facing notices. Board semantics do not depend on them.
//!
//! ```rust
//! use tb_core::config::BoardConfig;
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.default_label, "이름");
//! ```
//!
//! A host can point `TB_BOARD_CONFIG_PATH` at a JSON or YAML file and call
//! [`BoardConfig::from_env`]; missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

use crate::coordinates::Position;
use crate::entity::DEFAULT_LABEL;

pub const BOARD_CONFIG_PATH_ENV: &str = "TB_BOARD_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Arrow appearance handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    pub color: String,
    pub stroke_width: f32,
    /// Arrowhead marker size (default 10 x 7)
    pub marker_width: f32,
    pub marker_height: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self { color: "yellow".to_string(), stroke_width: 3.0, marker_width: 10.0, marker_height: 7.0 }
    }
}

/// Messages shown to the user after save/load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notices {
    pub saved: String,
    pub loaded: String,
    pub nothing_saved: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            saved: "현재 전술판 상태가 저장되었습니다!".to_string(),
            loaded: "저장된 전술판 상태를 불러왔습니다!".to_string(),
            nothing_saved: "저장된 데이터가 없습니다.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub default_label: String,
    pub ball_home: Position,
    pub arrow: ArrowStyle,
    pub notices: Notices,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_label: DEFAULT_LABEL.to_string(),
            ball_home: Position::CENTER,
            arrow: ArrowStyle::default(),
            notices: Notices::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Load from `TB_BOARD_CONFIG_PATH`, or defaults when it is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(BOARD_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::info!("Loading board config from {}='{}'", BOARD_CONFIG_PATH_ENV, path);
        Self::from_path(Path::new(path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_label.trim().is_empty() {
            return Err(ConfigError::Invalid("default_label must not be blank".to_string()));
        }
        if !self.ball_home.is_on_pitch() {
            return Err(ConfigError::Invalid(format!(
                "ball_home must be on the pitch, got {}",
                self.ball_home
            )));
        }
        if !(self.arrow.stroke_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arrow.stroke_width must be positive, got {}",
                self.arrow.stroke_width
            )));
        }
        if !(self.arrow.marker_width > 0.0 && self.arrow.marker_height > 0.0) {
            return Err(ConfigError::Invalid("arrow marker size must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = BoardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.ball_home, Position::CENTER);
        assert_eq!(config.arrow.color, "yellow");
        assert_eq!(config.arrow.stroke_width, 3.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "default_label": "Player", "arrow": { "color": "red" } }"#)
            .unwrap();
        assert_eq!(config.default_label, "Player");
        assert_eq!(config.arrow.color, "red");
        assert_eq!(config.arrow.stroke_width, 3.0);
        assert_eq!(config.notices, Notices::default());
    }

    #[test]
    fn test_yaml_config() {
        let yaml = "ball_home:\n  top: 40.0\n  left: 60.0\nnotices:\n  saved: Saved!\n";
        let config = BoardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.ball_home, Position::new(40.0, 60.0));
        assert_eq!(config.notices.saved, "Saved!");
        assert_eq!(config.notices.loaded, Notices::default().loaded);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = BoardConfig::from_json(r#"{ "default_label": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = BoardConfig::from_json(r#"{ "arrow": { "stroke_width": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err =
            BoardConfig::from_json(r#"{ "ball_home": { "top": 50.0, "left": 120.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = BoardConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("board.yaml");
        fs::write(&yaml_path, "default_label: Spieler\n").unwrap();
        assert_eq!(BoardConfig::from_path(&yaml_path).unwrap().default_label, "Spieler");

        let json_path = dir.path().join("board.json");
        let mut file = fs::File::create(&json_path).unwrap();
        writeln!(file, r#"{{ "default_label": "Joueur" }}"#).unwrap();
        assert_eq!(BoardConfig::from_path(&json_path).unwrap().default_label, "Joueur");

        let missing = dir.path().join("missing.json");
        assert!(matches!(BoardConfig::from_path(&missing), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env_board.json");
        fs::write(&path, r#"{ "default_label": "From Env" }"#).unwrap();

        env::set_var(BOARD_CONFIG_PATH_ENV, &path);
        let loaded = BoardConfig::from_env();
        env::set_var(BOARD_CONFIG_PATH_ENV, "   ");
        let blank = BoardConfig::from_env();
        env::remove_var(BOARD_CONFIG_PATH_ENV);

        assert_eq!(loaded.unwrap().default_label, "From Env");
        assert_eq!(blank.unwrap(), BoardConfig::default());
        assert_eq!(BoardConfig::from_env().unwrap(), BoardConfig::default());
    }
}
