//! # folder-pager
//!
//! Organization-scoped folder listing with cursor pagination.
//!
//! ## Features
//!
//! - **Fetch-all**: every folder of an organization, in provider order
//! - **Cursor pagination**: folder ids as opaque cursors, forward-only chains
//! - **Pluggable providers**: in-memory, JSON file, or any `FolderProvider`
//! - **CLI and HTTP**: `all`, `page`, `walk` and `serve` commands
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folder_pager::{FetchFolderPageRequest, FolderPager, InMemoryProvider, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let pager = FolderPager::new(InMemoryProvider::new(folders));
//!
//!     let mut request = FetchFolderPageRequest::new(org_id, 20);
//!     loop {
//!         let page = pager.fetch_page(&request).await?;
//!         // Process page.folders
//!         if page.next.is_none() {
//!             break;
//!         }
//!         request = request.starting_at(page.next);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              CLI (all/page/walk) · HTTP              │
//! └──────────────────────────────────────────────────────┘
//!                           │
//! ┌──────────────────────────────────────────────────────┐
//! │     Engine: fetch_all · fetch_page · FolderPager     │
//! └──────────────────────────────────────────────────────┘
//!               │                          │
//! ┌──────────────────────────┐ ┌─────────────────────────┐
//! │ Pagination               │ │ Provider                │
//! │ resolve_start · window   │ │ in-memory · JSON file   │
//! └──────────────────────────┘ └─────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Identifiers and the folder record
pub mod types;

/// Cursor resolution and page windows
pub mod pagination;

/// Folder data sources
pub mod provider;

/// Fetch-all and paginated fetch
pub mod engine;

/// YAML configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use engine::{
    fetch_all, fetch_page, FetchFolderPageRequest, FetchFolderPageResponse, FetchFolderRequest,
    FetchFolderResponse, FolderPager,
};
pub use error::{Error, ProviderError, Result};
pub use provider::{FolderProvider, InMemoryProvider, JsonFileProvider};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
