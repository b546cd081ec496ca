use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::debug_log;

const APP_DIR: &str = "aoc-input";

/// Defaults for the CLI flags, read from an optional TOML file
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) session_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) input_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) year: Option<u16>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Some(config) = Self::load_from(&path)
            {
                return config;
            }
        }

        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                debug_log!("loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG style: ~/.config/aoc-input/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS, AppData on Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aoc-input.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }
}
