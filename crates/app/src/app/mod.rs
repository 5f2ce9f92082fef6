use std::fs;
use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::error::Result;
use crate::services::AppServices;
use crate::survey::SURVEY_FILE_NAME;

/// Paths and limits needed to run the dashboard.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub upload_dir: PathBuf,
    pub cache_capacity: usize,
}

impl AppConfig {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self {
            upload_dir,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    pub fn survey_path(&self) -> PathBuf {
        self.upload_dir.join(SURVEY_FILE_NAME)
    }
}

/// Application state shared by the server's handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(upload_dir: PathBuf) -> Self {
        Self::with_config(AppConfig::new(upload_dir))
    }

    pub fn with_config(config: AppConfig) -> Self {
        let services = AppServices::new(&config);
        Self { config, services }
    }

    /// Creates the upload directory, like the original does at startup.
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.config.upload_dir)?;
        Ok(())
    }
}
