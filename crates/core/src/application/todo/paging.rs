// Cursor pagination policy
//
// The id is the only cursor key. Ids grow with insertion order, so
// "id < prev_id" resumes a descending feed with no overlap and no gaps,
// even while new items land at the head.

use crate::domain::TodoId;

/// Resolved page request handed to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Exclusive upper bound on ids; `None` starts from the newest item
    pub before: Option<TodoId>,
    pub limit: u32,
}

impl Page {
    /// Turn the wire-level `(prev_id, size)` pair into a concrete page.
    ///
    /// `prev_id <= 0` means "from the most recent"; `size == 0` selects
    /// `default_size`; anything above `max_size` is clamped.
    pub fn resolve(prev_id: TodoId, size: u32, default_size: u32, max_size: u32) -> Self {
        let before = (prev_id > 0).then_some(prev_id);
        let limit = match size {
            0 => default_size,
            n => n,
        }
        .min(max_size);

        Self { before, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::todo::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    #[test]
    fn test_zero_cursor_starts_at_head() {
        let page = Page::resolve(0, 5, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.before, None);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn test_negative_cursor_treated_as_unset() {
        let page = Page::resolve(-3, 5, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.before, None);
    }

    #[test]
    fn test_zero_size_uses_default() {
        let page = Page::resolve(12, 0, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.before, Some(12));
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_oversized_request_is_clamped() {
        let page = Page::resolve(0, 10_000, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }
}
