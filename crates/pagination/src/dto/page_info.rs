use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-only snapshot of a pagination state, suitable for rendering a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    pub current: u32,
    pub size: u32,
    pub total: u64,
    pub total_pages: u32,
    /// Zero-based index of the first item on the page.
    pub start_index: u64,
    /// Zero-based, exclusive end of the page.
    pub end_index: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageInfo {
    /// One-based, inclusive bounds for a "showing X-Y of N" label.
    ///
    /// Returns `(0, 0)` when the page holds no items.
    pub fn display_range(&self) -> (u64, u64) {
        if self.end_index <= self.start_index {
            (0, 0)
        } else {
            (self.start_index + 1, self.end_index)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
