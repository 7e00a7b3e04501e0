//! Execution engine module
//!
//! Fetch-all and paginated fetch over a [`FolderProvider`].
//!
//! # Overview
//!
//! The engine module provides:
//! - `fetch_all` / `fetch_page` - one provider read, then a pure computation
//! - `FolderPager` - holds a provider and walks whole cursor chains
//! - Request/response types for both operations
//!
//! Every call reads a fresh snapshot from the provider. Nothing is cached
//! between calls; the caller threads `next` into the following request.

mod types;

pub use types::{
    FetchFolderPageRequest, FetchFolderPageResponse, FetchFolderRequest, FetchFolderResponse,
};

use crate::error::{Error, Result};
use crate::pagination::paginate;
use crate::provider::FolderProvider;
use crate::types::{FolderId, OrgId};
use futures::stream::{self, Stream, TryStreamExt};

/// Reject an absent request before touching the provider
fn require<R>(request: Option<&R>) -> Result<&R> {
    request.ok_or_else(|| Error::invalid_request("request cannot be empty"))
}

/// Fetch every folder of the requested organization
///
/// Folders come back in provider order. Provider failures are returned
/// unchanged.
pub async fn fetch_all<P>(
    request: Option<&FetchFolderRequest>,
    provider: &P,
) -> Result<FetchFolderResponse>
where
    P: FolderProvider + ?Sized,
{
    let request = require(request)?;

    let folders = provider
        .fetch_all_by_organization(request.org_id)
        .await
        .map_err(Error::provider)?;
    tracing::debug!(org_id = %request.org_id, count = folders.len(), "fetched all folders");

    Ok(FetchFolderResponse { folders })
}

/// Fetch one page of the requested organization's folders
///
/// The whole collection is read from the provider, then the page starting at
/// `starting_at` is cut out of it. A cursor that names no folder in the
/// collection fails with [`Error::InvalidCursor`].
pub async fn fetch_page<P>(
    request: Option<&FetchFolderPageRequest>,
    provider: &P,
) -> Result<FetchFolderPageResponse>
where
    P: FolderProvider + ?Sized,
{
    let request = require(request)?;

    // TODO: push cursor and size down into the provider so large
    // organizations are not materialized just to serve one page.
    let folders = provider
        .fetch_all_by_organization(request.org_id)
        .await
        .map_err(Error::provider)?;

    let page = paginate(folders, request.starting_at.as_ref(), request.size)?;
    tracing::debug!(
        org_id = %request.org_id,
        size = request.size,
        returned = page.items.len(),
        has_next = page.next.is_some(),
        "fetched folder page"
    );

    Ok(page.into())
}

/// Folder listing bound to a single provider
#[derive(Debug, Clone)]
pub struct FolderPager<P> {
    provider: P,
}

impl<P: FolderProvider> FolderPager<P> {
    /// Create a pager over `provider`
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get the provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch every folder of `org_id`
    pub async fn fetch_all(&self, org_id: OrgId) -> Result<FetchFolderResponse> {
        fetch_all(Some(&FetchFolderRequest::new(org_id)), &self.provider).await
    }

    /// Fetch a single page
    pub async fn fetch_page(
        &self,
        request: &FetchFolderPageRequest,
    ) -> Result<FetchFolderPageResponse> {
        fetch_page(Some(request), &self.provider).await
    }

    /// Follow the cursor chain from `starting_at`, yielding one page at a time
    ///
    /// Each page is a separate provider read. The stream ends after the page
    /// without a `next` cursor, or after the first error.
    pub fn stream_pages(
        &self,
        org_id: OrgId,
        size: usize,
        starting_at: Option<FolderId>,
    ) -> impl Stream<Item = Result<FetchFolderPageResponse>> + '_ {
        stream::try_unfold(Some(starting_at), move |cursor| {
            self.advance(org_id, size, cursor)
        })
    }

    /// Fetch the page at `cursor` and work out the state for the one after it
    ///
    /// `None` means the previous page was the last one.
    async fn advance(
        &self,
        org_id: OrgId,
        size: usize,
        cursor: Option<Option<FolderId>>,
    ) -> Result<Option<(FetchFolderPageResponse, Option<Option<FolderId>>)>> {
        let Some(starting_at) = cursor else {
            return Ok(None);
        };
        // A zero-sized page never advances the cursor.
        if size == 0 {
            return Err(Error::invalid_request(
                "page size must be greater than zero to walk pages",
            ));
        }

        let request = FetchFolderPageRequest::new(org_id, size).starting_at(starting_at);
        let page = self.fetch_page(&request).await?;
        let following = page.next.map(Some);
        Ok(Some((page, following)))
    }

    /// Collect every page from `starting_at` to the end of the collection
    pub async fn walk(
        &self,
        org_id: OrgId,
        size: usize,
        starting_at: Option<FolderId>,
    ) -> Result<Vec<FetchFolderPageResponse>> {
        let pages: Vec<_> = self
            .stream_pages(org_id, size, starting_at)
            .try_collect()
            .await?;
        tracing::debug!(%org_id, pages = pages.len(), "walked folder pages");
        Ok(pages)
    }
}
