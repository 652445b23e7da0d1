use super::{CatalogLoad, CatalogStore};
use crate::config::SyncPaths;
use crate::error::{Result, SyncError};
use crate::model::Catalog;
use chrono::Local;
use std::fs;
use std::path::PathBuf;

pub struct FileCatalog {
    catalog_path: PathBuf,
    backup_dir: PathBuf,
}

impl FileCatalog {
    pub fn new(catalog_path: PathBuf, backup_dir: PathBuf) -> Self {
        Self {
            catalog_path,
            backup_dir,
        }
    }

    pub fn from_paths(paths: SyncPaths) -> Self {
        Self::new(paths.catalog, paths.backup_dir)
    }

    /// Pick a backup path for the given timestamp. Timestamps are
    /// second-granular, so two backups within the same second get a
    /// disambiguating suffix instead of clobbering each other.
    fn backup_target(&self, stamp: &str) -> Result<PathBuf> {
        let filename = self
            .catalog_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                SyncError::Store(format!(
                    "Catalog path has no file name: {}",
                    self.catalog_path.display()
                ))
            })?;

        let mut target = self.backup_dir.join(format!("{}.{}.bak", filename, stamp));
        let mut attempt = 1;
        while target.exists() {
            target = self
                .backup_dir
                .join(format!("{}.{}-{}.bak", filename, stamp, attempt));
            attempt += 1;
        }
        Ok(target)
    }
}

impl CatalogStore for FileCatalog {
    fn load(&self) -> Result<CatalogLoad> {
        if !self.catalog_path.exists() {
            return Ok(CatalogLoad::default());
        }

        let content = fs::read_to_string(&self.catalog_path).map_err(SyncError::Io)?;
        match serde_json::from_str(&content) {
            Ok(catalog) => Ok(CatalogLoad {
                catalog,
                recovered: false,
            }),
            Err(_) => Ok(CatalogLoad {
                catalog: Catalog::default(),
                recovered: true,
            }),
        }
    }

    fn backup(&mut self) -> Result<Option<PathBuf>> {
        if !self.catalog_path.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir).map_err(SyncError::Io)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let target = self.backup_target(&stamp)?;
        fs::copy(&self.catalog_path, &target).map_err(SyncError::Io)?;
        Ok(Some(target))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.catalog_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(SyncError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(catalog).map_err(SyncError::Serialization)?;
        fs::write(&self.catalog_path, content).map_err(SyncError::Io)?;
        Ok(())
    }
}
