use super::{Asset, AssetSource};
use crate::config::Credentials;
use crate::error::{Result, SyncError};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One bounded page per listing call; the library is expected to stay well
/// under this.
const MAX_RESULTS: u32 = 500;

/// Client for the Cloudinary Admin API.
///
/// All calls are blocking; the sync is a single-threaded batch run and the
/// two listing endpoints are the only network traffic it generates.
pub struct CloudinarySource {
    client: Client,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct FolderList {
    #[serde(default)]
    folders: Vec<Folder>,
}

#[derive(Debug, Deserialize)]
struct Folder {
    path: String,
}

#[derive(Debug, Deserialize)]
struct ResourceList {
    #[serde(default)]
    resources: Vec<Asset>,
}

impl CloudinarySource {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
        }
    }

    fn admin_url(&self, path: &str) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/{}",
            self.credentials.cloud_name, path
        )
    }

    fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Fetch(format!("{} returned {}", url, status)));
        }

        Ok(response.json()?)
    }
}

impl AssetSource for CloudinarySource {
    fn folders(&self) -> Result<Vec<String>> {
        let url = self.admin_url("folders");
        let list: FolderList =
            self.get(&url, &[("max_results", MAX_RESULTS.to_string())])?;
        Ok(list.folders.into_iter().map(|f| f.path).collect())
    }

    fn assets_in(&self, folder: &str) -> Result<Vec<Asset>> {
        let url = self.admin_url("resources/image/upload");
        let list: ResourceList = self.get(
            &url,
            &[
                ("prefix", folder.to_string()),
                ("image_metadata", "true".to_string()),
                ("max_results", MAX_RESULTS.to_string()),
            ],
        )?;
        Ok(list.resources)
    }
}
