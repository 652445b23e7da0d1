//! The keyed merge of a previous catalog with a fresh remote listing.
//!
//! Entries match across runs by `publicId` only. Kept entries stay in their
//! original relative order with every curated field untouched, so orderings
//! and hand-edits a curator relies on survive the sync. Genuinely new
//! entries are appended after them, oldest first. The dense numeric `id` is
//! reassigned positionally at the end, never matched on.

use crate::entry::build_photo;
use crate::model::{Catalog, Photo};
use crate::source::FetchedAsset;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub kept: usize,
    pub added: usize,
    pub removed: usize,
    pub total: usize,
}

#[derive(Debug)]
pub struct ReconcileOutcome {
    pub catalog: Catalog,
    pub stats: SyncStats,
    /// Public ids of newly appended entries, in final catalog order.
    pub added_ids: Vec<String>,
    /// Public ids of entries dropped because they vanished upstream.
    pub removed_ids: Vec<String>,
}

/// Merge `existing` with `fetched` into a new catalog.
///
/// Pure: neither input is mutated, and the returned catalog shares nothing
/// with `existing`.
pub fn reconcile(existing: &Catalog, fetched: &[FetchedAsset]) -> ReconcileOutcome {
    let upstream_ids: HashSet<&str> = fetched
        .iter()
        .map(|f| f.asset.public_id.as_str())
        .collect();
    let known_ids: HashSet<&str> = existing
        .photos
        .iter()
        .map(|p| p.public_id.as_str())
        .collect();

    let mut photos: Vec<Photo> = Vec::with_capacity(existing.len());
    let mut removed_ids = Vec::new();
    for photo in &existing.photos {
        if upstream_ids.contains(photo.public_id.as_str()) {
            photos.push(photo.clone());
        } else {
            removed_ids.push(photo.public_id.clone());
        }
    }
    let kept = photos.len();

    // The sort key rides alongside the new entry, not inside it, so it can
    // never leak into the persisted file. Missing timestamps sort first.
    let mut additions: Vec<(String, Photo)> = fetched
        .iter()
        .filter(|f| !known_ids.contains(f.asset.public_id.as_str()))
        .map(|f| {
            let key = f.asset.created_at.clone().unwrap_or_default();
            (key, build_photo(&f.asset, &f.folder))
        })
        .collect();
    additions.sort_by(|a, b| a.0.cmp(&b.0));

    let added_ids: Vec<String> = additions
        .iter()
        .map(|(_, photo)| photo.public_id.clone())
        .collect();
    photos.extend(additions.into_iter().map(|(_, photo)| photo));

    for (position, photo) in photos.iter_mut().enumerate() {
        photo.id = (position + 1).to_string();
    }

    let stats = SyncStats {
        kept,
        added: added_ids.len(),
        removed: removed_ids.len(),
        total: photos.len(),
    };

    ReconcileOutcome {
        catalog: Catalog { photos },
        stats,
        added_ids,
        removed_ids,
    }
}
