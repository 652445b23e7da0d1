use crate::error::{Result, SyncError};
use std::path::PathBuf;

const ENV_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
const ENV_API_KEY: &str = "CLOUDINARY_API_KEY";
const ENV_API_SECRET: &str = "CLOUDINARY_API_SECRET";

const DEFAULT_CATALOG: &str = "data/photos.json";
const DEFAULT_BACKUP_DIR: &str = "data/backups";

/// Cloudinary Admin API credentials, built once at startup and handed to the
/// source. Nothing else in the crate reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    /// Read credentials from the process environment. Loading a `.env` file
    /// first is the caller's concern.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials from an arbitrary lookup. A missing or empty value
    /// is a configuration error; the caller must not have contacted the
    /// remote store yet.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| SyncError::Config(format!("{} is not set", key)))
        };

        Ok(Self {
            cloud_name: get(ENV_CLOUD_NAME)?,
            api_key: get(ENV_API_KEY)?,
            api_secret: get(ENV_API_SECRET)?,
        })
    }
}

/// Where the catalog lives and where pre-sync backups go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    pub catalog: PathBuf,
    pub backup_dir: PathBuf,
}

impl Default for SyncPaths {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
        }
    }
}

impl SyncPaths {
    /// Apply CLI overrides on top of the defaults.
    pub fn new(catalog: Option<PathBuf>, backup_dir: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            catalog: catalog.unwrap_or(defaults.catalog),
            backup_dir: backup_dir.unwrap_or(defaults.backup_dir),
        }
    }
}
