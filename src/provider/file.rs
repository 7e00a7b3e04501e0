//! JSON file provider
//!
//! The file holds a JSON array of folders across all organizations:
//!
//! ```json
//! [
//!   {"id": "…", "name": "Massive", "org_id": "…"}
//! ]
//! ```

use super::{filter_by_org, FolderProvider};
use crate::error::{Error, ProviderError};
use crate::types::{Folder, OrgId};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Provider that reads the folder collection from a JSON file
///
/// The file is read on every call, so edits show up on the next request.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider reading from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole collection
    pub async fn load(&self) -> crate::error::Result<Vec<Folder>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound {
                    path: self.path.display().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }
}

#[async_trait]
impl FolderProvider for JsonFileProvider {
    async fn fetch_all_by_organization(
        &self,
        org_id: OrgId,
    ) -> std::result::Result<Vec<Folder>, ProviderError> {
        let folders = self.load().await?;
        tracing::debug!(path = %self.path.display(), total = folders.len(), "loaded folder file");
        Ok(filter_by_org(folders, org_id))
    }
}
