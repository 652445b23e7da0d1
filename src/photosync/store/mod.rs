//! # Catalog Storage
//!
//! The catalog file is the only shared mutable resource in a sync run.
//! Discipline is: read once, mutate in memory, backup, write once. The
//! [`CatalogStore`] trait keeps the pipeline decoupled from the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: Production file-based storage
//!   - Catalog persisted as pretty-printed JSON (`{"photos": [...]}`)
//!   - Pre-sync backups as `<name>.<YYYYMMDD_HHMMSS>.bak` in a dedicated
//!     directory, created on demand
//! - [`memory::InMemoryCatalog`]: In-memory storage for testing
//!
//! ## Recovery Policy
//!
//! A missing catalog file loads as an empty catalog. A file that exists but
//! fails to parse also loads as empty, with the `recovered` flag set so the
//! caller can warn — a fresh catalog beats a failed sync. Contrast with the
//! fetch side, where any error aborts before the file is touched.

use crate::error::Result;
use crate::model::Catalog;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Result of loading the persisted catalog.
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// True when the file existed but could not be parsed and was replaced
    /// with an empty catalog.
    pub recovered: bool,
}

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Read the persisted catalog. A missing file reads as empty.
    fn load(&self) -> Result<CatalogLoad>;

    /// Copy the current catalog file aside before it is overwritten.
    /// Returns the backup location, or None when there was nothing to back
    /// up. Never overwrites an existing backup.
    fn backup(&mut self) -> Result<Option<PathBuf>>;

    /// Rewrite the catalog wholesale.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
