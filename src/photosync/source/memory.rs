use super::{Asset, AssetSource};
use crate::error::{Result, SyncError};

/// Fixture-backed asset source for tests.
///
/// `assets_in` matches by prefix the way the real listing endpoint does, so
/// an asset nested in a subfolder is returned for its parent folder too.
/// The fetch-side folder filter is what keeps it from being double counted.
#[derive(Debug, Default)]
pub struct InMemorySource {
    folders: Vec<String>,
    assets: Vec<Asset>,
    fail_with: Option<String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails, for abort-path tests.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_folder(mut self, path: &str) -> Self {
        self.folders.push(path.to_string());
        self
    }

    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Drop the asset with the given public_id, simulating an upstream
    /// deletion between runs.
    pub fn remove_asset(&mut self, public_id: &str) {
        self.assets.retain(|a| a.public_id != public_id);
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => Err(SyncError::Fetch(message.clone())),
            None => Ok(()),
        }
    }
}

impl AssetSource for InMemorySource {
    fn folders(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.folders.clone())
    }

    fn assets_in(&self, folder: &str) -> Result<Vec<Asset>> {
        self.check()?;
        Ok(self
            .assets
            .iter()
            .filter(|a| a.public_id.starts_with(folder))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(public_id: &str) -> Asset {
        Asset {
            public_id: public_id.to_string(),
            ..Asset::default()
        }
    }

    #[test]
    fn prefix_listing_includes_nested_assets() {
        let source = InMemorySource::new()
            .with_folder("travel")
            .with_asset(asset("travel/kyoto-01"))
            .with_asset(asset("travel/japan/tokyo-01"));

        let listed = source.assets_in("travel").unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn root_listing_returns_everything() {
        let source = InMemorySource::new()
            .with_asset(asset("loose"))
            .with_asset(asset("travel/kyoto-01"));

        assert_eq!(source.assets_in("").unwrap().len(), 2);
    }

    #[test]
    fn failing_source_errors_on_every_call() {
        let source = InMemorySource::failing("store unreachable");
        assert!(source.folders().is_err());
        assert!(source.assets_in("").is_err());
    }
}
