//! Engine types
//!
//! Request and response shapes for fetch-all and paginated fetch.

use crate::pagination::Page;
use crate::types::{Folder, FolderId, OrgId};
use serde::{Deserialize, Serialize};

/// Request for every folder of an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderRequest {
    /// Organization to list
    pub org_id: OrgId,
}

impl FetchFolderRequest {
    /// Create a fetch-all request
    pub fn new(org_id: OrgId) -> Self {
        Self { org_id }
    }
}

/// Every folder of an organization, in provider order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderResponse {
    /// The folders
    pub folders: Vec<Folder>,
}

/// Request for one page of an organization's folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderPageRequest {
    /// Organization to list
    pub org_id: OrgId,
    /// Maximum number of folders in the page
    pub size: usize,
    /// Id of the first folder to return; `None` starts at the beginning
    #[serde(default)]
    pub starting_at: Option<FolderId>,
}

impl FetchFolderPageRequest {
    /// Create a request for the first page
    pub fn new(org_id: OrgId, size: usize) -> Self {
        Self {
            org_id,
            size,
            starting_at: None,
        }
    }

    /// Start the page at `cursor`
    #[must_use]
    pub fn starting_at(mut self, cursor: Option<FolderId>) -> Self {
        self.starting_at = cursor;
        self
    }
}

/// One page of folders plus the cursor of the following page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFolderPageResponse {
    /// Folders in this page, possibly none
    pub folders: Vec<Folder>,
    /// Where the next page starts; `None` when there is no more data
    pub next: Option<FolderId>,
}

impl FetchFolderPageResponse {
    /// Check if this is the last page of the chain
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

impl From<Page<Folder>> for FetchFolderPageResponse {
    fn from(page: Page<Folder>) -> Self {
        Self {
            folders: page.items,
            next: page.next,
        }
    }
}
