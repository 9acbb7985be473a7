use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Config, File};
use log::debug;
use serde::Deserialize;

use crate::cli::Args;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

const CONFIG_DIR_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Option<String>,
}

// XDG_CONFIG_HOME, falling back to $HOME/.config
fn get_xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config));
    }
    env::var("HOME").ok().map(|home| PathBuf::from(home).join(".config"))
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    Config::builder()
        .add_source(File::from(path).required(false))
        .build()?
        .try_deserialize()
        .with_context(|| format!("Failed to deserialize config file {}", path.display()))
}

/// Command line (or `BLOG_API_URL`) first, then the config file, then the
/// built-in default.
pub fn resolve_base_url(args: &Args) -> anyhow::Result<String> {
    let settings = match get_xdg_config_path() {
        Some(dir) => load_settings(&dir.join(CONFIG_DIR_NAME).join("config.toml"))?,
        None => Settings::default(),
    };
    let base_url = pick_base_url(args.base_url.as_deref(), &settings);
    debug!("resolved base url: {base_url}");
    Ok(base_url)
}

fn pick_base_url(cli: Option<&str>, settings: &Settings) -> String {
    cli.filter(|url| !url.is_empty())
        .or(settings.base_url.as_deref().filter(|url| !url.is_empty()))
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_value_wins() {
        let settings = Settings {
            base_url: Some("http://from-file".to_string()),
        };
        assert_eq!(pick_base_url(Some("http://from-cli"), &settings), "http://from-cli");
    }

    #[test]
    fn file_value_beats_default() {
        let settings = Settings {
            base_url: Some("http://from-file".to_string()),
        };
        assert_eq!(pick_base_url(None, &settings), "http://from-file");
        assert_eq!(pick_base_url(Some(""), &settings), "http://from-file");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(pick_base_url(None, &Settings::default()), DEFAULT_BASE_URL);
    }

    #[test]
    fn reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://api.test\"\n").unwrap();

        let settings = load_settings(&path).unwrap();

        assert_eq!(settings.base_url.as_deref(), Some("http://api.test"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [1, 2]\n").unwrap();

        assert!(load_settings(&path).is_err());
    }
}
