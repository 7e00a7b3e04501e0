//! Pagination types and traits
//!
//! Defines the page window arithmetic and the page result shared by every
//! paginated listing.

use crate::types::{Folder, FolderId};
use std::fmt::{Debug, Display};

/// Items that can be addressed by a pagination cursor
pub trait CursorKey {
    /// Key type handed out as the cursor
    type Key: PartialEq + Clone + Debug + Display;

    /// The cursor that points at this item
    fn cursor_key(&self) -> Self::Key;
}

impl CursorKey for Folder {
    type Key = FolderId;

    fn cursor_key(&self) -> FolderId {
        self.id
    }
}

/// Index window selected for one page
///
/// `start..end` are the indices returned; `next` is the index the following
/// page starts at, or `None` once the window reaches the end of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First index in the page
    pub start: usize,
    /// Exclusive end of the page
    pub end: usize,
    /// Index of the first item after the page
    pub next: Option<usize>,
}

impl PageWindow {
    /// Compute the window for a resolved start, requested size and snapshot length
    ///
    /// A start at or past `len` yields an empty window with no continuation.
    /// A size of zero yields an empty window whose continuation is `start`
    /// itself, as long as `start` is in range.
    pub fn compute(start: usize, size: usize, len: usize) -> Self {
        let start = start.min(len);
        let end = start.saturating_add(size).min(len);
        let next = (end < len).then_some(end);
        Self { start, end, next }
    }

    /// Number of items in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window selects nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if a following page exists
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// One page cut from a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T: CursorKey> {
    /// Items in snapshot order
    pub items: Vec<T>,
    /// Cursor for the following page
    pub next: Option<T::Key>,
}

impl<T: CursorKey> Page<T> {
    /// Check if this is the last page of the chain
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
