//! In-memory provider

use super::{filter_by_org, FolderProvider};
use crate::error::ProviderError;
use crate::types::{Folder, OrgId};
use async_trait::async_trait;

/// Provider backed by a fixed, in-memory folder collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    folders: Vec<Folder>,
}

impl InMemoryProvider {
    /// Create a provider over `folders`, kept in the given order
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// All folders across every organization
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Number of folders across every organization
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Check if the provider holds no folders at all
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

impl FromIterator<Folder> for InMemoryProvider {
    fn from_iter<I: IntoIterator<Item = Folder>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl FolderProvider for InMemoryProvider {
    async fn fetch_all_by_organization(
        &self,
        org_id: OrgId,
    ) -> std::result::Result<Vec<Folder>, ProviderError> {
        Ok(filter_by_org(self.folders.iter().cloned(), org_id))
    }
}
