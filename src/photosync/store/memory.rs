use super::{CatalogLoad, CatalogStore};
use crate::error::Result;
use crate::model::Catalog;
use std::path::PathBuf;

/// In-memory catalog store for testing. No persistence, but the same
/// load/backup/save contract as [`super::fs::FileCatalog`].
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    catalog: Catalog,
    exists: bool,
    malformed: bool,
    backups: usize,
    saves: usize,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            exists: true,
            ..Self::default()
        }
    }

    /// A store whose file exists but is not parseable.
    pub fn malformed() -> Self {
        Self {
            exists: true,
            malformed: true,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn backup_count(&self) -> usize {
        self.backups
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl CatalogStore for InMemoryCatalog {
    fn load(&self) -> Result<CatalogLoad> {
        if !self.exists {
            return Ok(CatalogLoad::default());
        }
        if self.malformed {
            return Ok(CatalogLoad {
                catalog: Catalog::default(),
                recovered: true,
            });
        }
        Ok(CatalogLoad {
            catalog: self.catalog.clone(),
            recovered: false,
        })
    }

    fn backup(&mut self) -> Result<Option<PathBuf>> {
        if !self.exists {
            return Ok(None);
        }
        self.backups += 1;
        Ok(Some(PathBuf::from(format!(
            "photos.json.{}.bak",
            self.backups
        ))))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        self.exists = true;
        self.malformed = false;
        self.saves += 1;
        Ok(())
    }
}
