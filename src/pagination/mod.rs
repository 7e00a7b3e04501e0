//! Pagination module
//!
//! Cursor pagination over an in-memory snapshot.
//!
//! # Overview
//!
//! A page request carries an optional starting cursor and a size. The cursor
//! is the key of the first item to return; it is resolved by scanning the
//! snapshot, then a window of at most `size` items is cut out and the key of
//! the first item after the window becomes the next cursor.
//!
//! Cursors only work when keys are unique within a snapshot and the snapshot
//! order is stable between calls. Nothing here checks either property.

mod cursor;
mod types;

pub use cursor::{paginate, resolve_start};
pub use types::{CursorKey, Page, PageWindow};
