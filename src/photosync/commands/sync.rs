use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reconcile::reconcile;
use crate::source::{AssetSource, FetchedAsset};
use crate::store::CatalogStore;

/// Run one sync: fetch the whole remote listing, merge it with the stored
/// catalog, back the file up and rewrite it.
///
/// Ordering matters: the fetch happens before the store is read or written,
/// so a remote failure aborts with the previous catalog intact. With
/// `dry_run` the merge still runs but nothing on disk changes.
pub fn run<S: AssetSource, C: CatalogStore>(
    source: &S,
    store: &mut C,
    dry_run: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let fetched = fetch_all(source, &mut result)?;

    let loaded = store.load()?;
    if loaded.recovered {
        result.add_message(CmdMessage::warning(
            "Existing catalog is not valid JSON; starting from an empty catalog.",
        ));
    }

    let outcome = reconcile(&loaded.catalog, &fetched);
    for public_id in &outcome.removed_ids {
        result.add_message(CmdMessage::info(format!(
            "Removing deleted photo: {}",
            public_id
        )));
    }
    for public_id in &outcome.added_ids {
        result.add_message(CmdMessage::info(format!("Adding new photo: {}", public_id)));
    }

    if dry_run {
        result.add_message(CmdMessage::info("Dry run: catalog file left untouched."));
    } else {
        if let Some(path) = store.backup()? {
            result.add_message(CmdMessage::info(format!(
                "Backup created at: {}",
                path.display()
            )));
            result.backup_path = Some(path);
        }
        store.save(&outcome.catalog)?;
    }

    let stats = outcome.stats;
    result.add_message(CmdMessage::success(format!(
        "Sync complete: {} kept, {} added, {} removed, {} total.",
        stats.kept, stats.added, stats.removed, stats.total
    )));
    result.stats = Some(stats);
    Ok(result)
}

/// Walk every folder plus the implicit root and keep only assets whose
/// derived folder equals the folder being scanned. Listing by prefix also
/// returns assets nested in subfolders; those survive only when their own
/// folder comes up, so nothing is counted twice.
fn fetch_all<S: AssetSource>(source: &S, result: &mut CmdResult) -> Result<Vec<FetchedAsset>> {
    let mut folders = source.folders()?;
    folders.push(String::new());

    let mut fetched = Vec::new();
    for folder in folders {
        let display = if folder.is_empty() {
            "Root".to_string()
        } else {
            folder.clone()
        };

        let assets = source.assets_in(&folder)?;
        let before = fetched.len();
        for asset in assets {
            if asset.folder() == folder {
                fetched.push(FetchedAsset {
                    asset,
                    folder: folder.clone(),
                });
            }
        }

        result.add_message(CmdMessage::info(format!(
            "Fetched {} photos from: {}",
            fetched.len() - before,
            display
        )));
    }
    Ok(fetched)
}
