//! medquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assets::AssetResolver;

/// Top-level medquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question bank JSON document.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Directory that `image` and `explanation_image` names are resolved against.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("master_quiz_data.json")
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("extracted_images")
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            image_dir: default_image_dir(),
        }
    }
}

impl QuizConfig {
    pub fn assets(&self) -> AssetResolver {
        AssetResolver::new(&self.image_dir)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted verbatim and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `medquiz.toml` in the current directory
/// 2. `~/.config/medquiz/config.toml`
///
/// Environment variable overrides: `MEDQUIZ_DATA_FILE`, `MEDQUIZ_IMAGE_DIR`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("medquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(data_file) = std::env::var("MEDQUIZ_DATA_FILE") {
        config.data_file = PathBuf::from(data_file);
    }
    if let Ok(image_dir) = std::env::var("MEDQUIZ_IMAGE_DIR") {
        config.image_dir = PathBuf::from(image_dir);
    }

    config.data_file = resolve_path(&config.data_file);
    config.image_dir = resolve_path(&config.image_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("medquiz"))
}
