use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::DerivationCache;
use crate::error::Result;
use crate::services::SharedConfig;
use crate::uploads::{latest_csv, list_csvs, save_upload};

/// Datasets currently on disk plus the one the UI should open by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadListing {
    pub files: Vec<String>,
    pub latest: Option<String>,
}

#[derive(Clone)]
pub struct UploadService {
    config: SharedConfig,
    cache: Arc<DerivationCache>,
}

impl UploadService {
    pub(super) fn new(config: SharedConfig, cache: Arc<DerivationCache>) -> Self {
        Self { config, cache }
    }

    /// Stores a new dataset and drops every cached derivation: the same
    /// filename may now carry different content.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        let path = save_upload(&self.config.upload_dir, filename, bytes)?;
        self.cache.invalidate_all();
        Ok(path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default())
    }

    pub fn list(&self) -> Result<UploadListing> {
        Ok(UploadListing {
            files: list_csvs(&self.config.upload_dir)?,
            latest: latest_csv(&self.config.upload_dir)?,
        })
    }
}
