//! Folder providers
//!
//! A provider is the data source behind every listing: given an organization
//! it returns that organization's complete folder collection.
//!
//! # Overview
//!
//! - `FolderProvider` - the trait the engine is generic over
//! - `InMemoryProvider` - serves a fixed collection held in memory
//! - `JsonFileProvider` - re-reads a JSON collection from disk on every call

mod file;
mod memory;

pub use file::JsonFileProvider;
pub use memory::InMemoryProvider;

use crate::error::ProviderError;
use crate::types::{Folder, OrgId};
use async_trait::async_trait;
use std::sync::Arc;

/// Source of organization-scoped folder collections
///
/// Implementations must return every folder of the organization, with ids
/// unique within that collection and in an order that stays the same for as
/// long as the collection is unchanged. Folder ids double as pagination
/// cursors, so a provider that reorders or duplicates ids breaks the cursor
/// chain.
#[async_trait]
pub trait FolderProvider: Send + Sync {
    /// Fetch every folder owned by `org_id`
    async fn fetch_all_by_organization(
        &self,
        org_id: OrgId,
    ) -> std::result::Result<Vec<Folder>, ProviderError>;
}

#[async_trait]
impl<P: FolderProvider + ?Sized> FolderProvider for Arc<P> {
    async fn fetch_all_by_organization(
        &self,
        org_id: OrgId,
    ) -> std::result::Result<Vec<Folder>, ProviderError> {
        (**self).fetch_all_by_organization(org_id).await
    }
}

/// Keep the folders owned by `org_id`, preserving order
pub(crate) fn filter_by_org(
    folders: impl IntoIterator<Item = Folder>,
    org_id: OrgId,
) -> Vec<Folder> {
    folders
        .into_iter()
        .filter(|folder| folder.org_id == org_id)
        .collect()
}

#[cfg(test)]
mod tests;
