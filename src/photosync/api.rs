//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for any
//! client, CLI or otherwise. It holds the two backends and dispatches; all
//! business logic lives in `commands/` and the pure modules it calls.
//!
//! `SyncApi` is generic over both backends:
//! - Production: `SyncApi<CloudinarySource, FileCatalog>`
//! - Testing: `SyncApi<InMemorySource, InMemoryCatalog>`
//!
//! which is what lets the whole pipeline run in tests with no network and
//! no filesystem.

use crate::commands;
use crate::error::Result;
use crate::source::AssetSource;
use crate::store::CatalogStore;

pub struct SyncApi<S: AssetSource, C: CatalogStore> {
    source: S,
    store: C,
}

impl<S: AssetSource, C: CatalogStore> SyncApi<S, C> {
    pub fn new(source: S, store: C) -> Self {
        Self { source, store }
    }

    /// Run one full sync. With `dry_run`, report what would change without
    /// touching the catalog file.
    pub fn sync(&mut self, dry_run: bool) -> Result<commands::CmdResult> {
        commands::sync::run(&self.source, &mut self.store, dry_run)
    }

    pub fn into_store(self) -> C {
        self.store
    }
}
