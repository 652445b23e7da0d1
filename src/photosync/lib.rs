//! # Photosync Architecture
//!
//! Photosync keeps a portfolio site's `photos.json` in step with a Cloudinary
//! media library. It is a **UI-agnostic sync library** first — the CLI binary
//! is a thin client over it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, loads .env, formats console output     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the sync command                        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/sync.rs + entry.rs, reconcile.rs)  │
//! │  - Pure business logic: fetch filtering, entry building,    │
//! │    catalog reconciliation                                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backends (source/, store/)                                 │
//! │  - AssetSource: the remote library (Cloudinary, in-memory)  │
//! │  - CatalogStore: the catalog file (filesystem, in-memory)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr and never calls
//! `std::process::exit`. Both backends are traits with in-memory
//! implementations, so the whole pipeline runs in tests without a network
//! connection or a scratch directory.
//!
//! ## The Sync Contract
//!
//! One run is a strict sequence: fetch the whole remote listing, load the
//! previous catalog, reconcile in memory, back the file up, rewrite it
//! wholesale. A fetch failure aborts before anything on disk is touched; a
//! malformed catalog file is recovered as empty rather than failing the run.
//! Entries are matched across runs by `publicId` only — the numeric `id` is
//! reassigned densely on every save and is not a stable key.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: The sync pipeline and its result/message types
//! - [`entry`]: Builds a catalog entry from a raw upstream asset
//! - [`reconcile`]: The keyed merge of old catalog and fresh listing
//! - [`source`]: Remote asset store abstraction and implementations
//! - [`store`]: Catalog file abstraction and implementations
//! - [`model`]: Core data types (`Photo`, `Exif`, `Catalog`)
//! - [`config`]: Credentials and path configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod reconcile;
pub mod source;
pub mod store;
