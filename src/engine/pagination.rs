//! Position-based pagination over an ordered ID list.
//!
//! Pages are slices by position in the filtered and sorted list. Job IDs are never
//! used for page arithmetic: they are not contiguous and not aligned to pages.

use crate::domain::JobId;

/// Jobs shown per page.
pub const PAGE_SIZE: usize = 25;

/// Number of pages for `count` items; at least one, so an empty listing reads
/// "Page 1 of 1".
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 || count == 0 {
        return 1;
    }
    (count + page_size - 1) / page_size
}

/// Returns the slice of `ordered_ids` on page `page_index` (zero-based).
///
/// An index past the last page is clamped to the last page.
///
/// # Examples
///
/// ```
/// use jobboard::engine::page;
///
/// let ids: Vec<i64> = (100..130).collect();
/// assert_eq!(page(&ids, 0, 25).len(), 25);
/// assert_eq!(page(&ids, 1, 25), &ids[25..]);
/// assert_eq!(page(&ids, 9, 25), &ids[25..]);
/// ```
#[must_use]
pub fn page(ordered_ids: &[JobId], page_index: usize, page_size: usize) -> &[JobId] {
    if page_size == 0 || ordered_ids.is_empty() {
        return &[];
    }

    let last = total_pages(ordered_ids.len(), page_size) - 1;
    let start = page_index.min(last) * page_size;
    let end = (start + page_size).min(ordered_ids.len());
    &ordered_ids[start..end]
}

/// Current-page cursor.
///
/// Moving past either end is a no-op; the movement methods report whether the
/// page changed so the caller knows whether to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    /// Creates a cursor on the first page. A zero page size is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            index: 0,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub const fn has_next(&self, count: usize) -> bool {
        (self.index + 1) * self.page_size < count
    }

    /// Advances one page if there is one.
    pub fn next(&mut self, count: usize) -> bool {
        if self.has_next(count) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page unless already on the first.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Pulls the cursor back onto the last page after the list shrank.
    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(total_pages(count, self.page_size) - 1);
    }

    /// The IDs on the current page.
    #[must_use]
    pub fn slice<'a>(&self, ordered_ids: &'a [JobId]) -> &'a [JobId] {
        page(ordered_ids, self.index, self.page_size)
    }

    /// Human-readable position, e.g. `"Page 2 of 3"`.
    #[must_use]
    pub fn label(&self, count: usize) -> String {
        format!(
            "Page {} of {}",
            self.index + 1,
            total_pages(count, self.page_size)
        )
    }
}
