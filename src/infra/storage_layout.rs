use std::{fs, path::PathBuf};

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "bridge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub cache_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    /// Resolves directories under the platform cache dir, honouring a
    /// configured log directory.
    pub fn resolve(logging: &LogConfig) -> Result<Self, AppError> {
        let cache_dir = dirs::cache_dir()
            .map(|base| base.join(APP_DIR_NAME))
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve cache base directory".into(),
            })?;

        let log_dir = logging
            .directory
            .clone()
            .unwrap_or_else(|| cache_dir.join("logs"));

        Ok(Self { cache_dir, log_dir })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.cache_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}
