pub mod chapters;
pub mod init;
pub mod play;
pub mod show;
pub mod subjects;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use medquiz_core::config::{load_config_from, QuizConfig};
use medquiz_core::{load_bank, QuestionBank};

/// Global flags that take precedence over the config file and environment.
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub images: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Overrides {
    /// Resolve the effective configuration.
    pub fn config(&self) -> Result<QuizConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(data) = &self.data {
            config.data_file = data.clone();
        }
        if let Some(images) = &self.images {
            config.image_dir = images.clone();
        }
        Ok(config)
    }
}

/// Load the configured question bank. Failure here ends the program.
pub fn load(overrides: &Overrides) -> Result<(QuizConfig, Arc<QuestionBank>)> {
    let config = overrides.config()?;
    let bank = load_bank(&config.data_file)?;
    Ok((config, Arc::new(bank)))
}
