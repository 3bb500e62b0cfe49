/// Default number of page buttons shown by a page selector.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Number of pages needed to hold `total` items, `0` when there are none.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Computes the window of page numbers to display around `current`.
///
/// The window holds up to `window_size` pages. It is centered on `current`
/// (an even window leans one page to the right) and is shifted, not
/// shortened, when it runs into page 1 or `total_pages`, so the first and
/// last pages anchor it at the edges.
///
/// ```
/// use pagination::range::page_window;
///
/// assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
/// assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
/// assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
/// ```
pub fn page_window(current: u32, total_pages: u32, window_size: usize) -> Vec<u32> {
    if total_pages == 0 || window_size == 0 {
        return Vec::new();
    }

    let last = i64::from(total_pages);
    let width = i64::try_from(window_size).unwrap_or(i64::MAX).min(last);
    let current = i64::from(current).clamp(1, last);
    let half = (width - 1) / 2;

    let mut start = current - half;
    let mut end = start + width - 1;

    if start < 1 {
        end += 1 - start;
        start = 1;
    }
    if end > last {
        start -= end - last;
        end = last;
    }
    let start = start.max(1);

    (start..=end)
        .filter_map(|page| u32::try_from(page).ok())
        .collect()
}
