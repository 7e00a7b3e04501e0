//! Cursor resolution
//!
//! Maps a starting cursor onto a snapshot index and cuts the page out.

use super::types::{CursorKey, Page, PageWindow};
use crate::error::{Error, Result};

/// Resolve a starting cursor to an index in `items`
///
/// No cursor means the start of the snapshot. A cursor that matches no item
/// is an error; it is never clamped to either end.
pub fn resolve_start<T: CursorKey>(items: &[T], starting_at: Option<&T::Key>) -> Result<usize> {
    let Some(cursor) = starting_at else {
        return Ok(0);
    };

    // Linear scan: the whole snapshot is already in memory.
    items
        .iter()
        .position(|item| &item.cursor_key() == cursor)
        .ok_or_else(|| {
            tracing::warn!(%cursor, len = items.len(), "starting cursor not found in snapshot");
            Error::invalid_cursor(cursor)
        })
}

/// Cut the page that starts at `starting_at` and holds at most `size` items
pub fn paginate<T: CursorKey>(
    mut items: Vec<T>,
    starting_at: Option<&T::Key>,
    size: usize,
) -> Result<Page<T>> {
    let start = resolve_start(&items, starting_at)?;
    let window = PageWindow::compute(start, size, items.len());
    tracing::debug!(
        start = window.start,
        end = window.end,
        total = items.len(),
        "resolved page window"
    );

    let next = window.next.map(|index| items[index].cursor_key());
    items.truncate(window.end);
    let page: Vec<T> = items.drain(window.start..).collect();

    Ok(Page { items: page, next })
}
