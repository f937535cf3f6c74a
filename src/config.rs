use std::path::{Path, PathBuf};

use clap::ValueEnum;
use islet_world::OverviewMode;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "islet.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct IsletConfig {
    #[serde(default)] pub seed: Option<u64>,
    #[serde(default)] pub overview: Overview,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeName {
    #[default]
    Surface,
    Height,
}

impl From<ModeName> for OverviewMode {
    fn from(m: ModeName) -> Self {
        match m {
            ModeName::Surface => OverviewMode::Surface,
            ModeName::Height => OverviewMode::HeightMap,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Overview {
    #[serde(default)] pub enable: bool,
    #[serde(default = "default_overview_path")] pub path: PathBuf,
    #[serde(default)] pub mode: ModeName,
    #[serde(default = "default_scale")] pub scale: usize,
}
fn default_overview_path() -> PathBuf { PathBuf::from("overview.png") }
fn default_scale() -> usize { 8 }
impl Default for Overview {
    fn default() -> Self {
        Self { enable: false, path: default_overview_path(), mode: ModeName::Surface, scale: default_scale() }
    }
}

impl IsletConfig {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

pub fn load_config_from_path(path: &Path) -> Result<IsletConfig, ConfigError> {
    let s = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    IsletConfig::from_toml_str(&s, path)
}

/// Loads `explicit` if given, failing when it cannot be read. Otherwise tries
/// the default path and falls back to defaults when that file is absent.
pub fn load_config(explicit: Option<&Path>) -> Result<IsletConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if !path.exists() {
        log::debug!("no {} found; using defaults", DEFAULT_CONFIG_PATH);
        return Ok(IsletConfig::default());
    }
    load_config_from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = IsletConfig::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(cfg, IsletConfig::default());
        assert_eq!(cfg.overview.scale, 8);
        assert_eq!(cfg.overview.path, PathBuf::from("overview.png"));
        assert!(!cfg.overview.enable);
    }

    #[test]
    fn full_file() {
        let src = r#"
            seed = 1234
            [overview]
            enable = true
            path = "out/map.png"
            mode = "height"
            scale = 4
        "#;
        let cfg = IsletConfig::from_toml_str(src, Path::new("x.toml")).unwrap();
        assert_eq!(cfg.seed, Some(1234));
        assert!(cfg.overview.enable);
        assert_eq!(cfg.overview.path, PathBuf::from("out/map.png"));
        assert_eq!(cfg.overview.mode, ModeName::Height);
        assert_eq!(cfg.overview.scale, 4);
        assert_eq!(OverviewMode::from(cfg.overview.mode), OverviewMode::HeightMap);
    }

    #[test]
    fn unknown_mode_is_parse_error() {
        let err = IsletConfig::from_toml_str("[overview]\nmode = \"isometric\"", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn explicit_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7").unwrap();
        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.overview, Overview::default());
    }
}
