use std::fmt;

use validator::Validate;

use crate::dto::{PageInfo, QueryParams};
use crate::error::Result;
use crate::listener::Listeners;
use crate::options::{PaginationOptions, ResetOptions};
use crate::range::{self, DEFAULT_WINDOW_SIZE};

type ScrollCallback = Box<dyn FnMut(&str) + Send>;

/// Page, page size and total item count, with everything derived from them.
///
/// Mutations never fail: out-of-range pages, sizes outside the allowed set and
/// repeated requests are ignored. Every navigation method returns whether the
/// state actually changed.
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total: u64,
    initial_page_size: u32,
    page_size_options: Vec<u32>,
    auto_scroll: bool,
    scroll_target: String,
    page_listeners: Listeners<u32>,
    page_size_listeners: Listeners<u32>,
    scroll_listeners: Vec<ScrollCallback>,
}

impl PaginationState {
    pub fn new(options: PaginationOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: PaginationOptions) -> Self {
        Self {
            current_page: options.initial_page,
            page_size: options.initial_page_size,
            total: options.total,
            initial_page_size: options.initial_page_size,
            page_size_options: options.page_size_options,
            auto_scroll: options.auto_scroll,
            scroll_target: options.scroll_target,
            page_listeners: Listeners::default(),
            page_size_listeners: Listeners::default(),
            scroll_listeners: Vec::new(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page_size_options(&self) -> &[u32] {
        &self.page_size_options
    }

    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    pub fn scroll_target(&self) -> &str {
        &self.scroll_target
    }

    pub fn total_pages(&self) -> u32 {
        range::total_pages(self.total, self.page_size)
    }

    pub fn start_index(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn end_index(&self) -> u64 {
        (self.start_index() + u64::from(self.page_size)).min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current: self.current_page,
            size: self.page_size,
            total: self.total,
            total_pages: self.total_pages(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages || page == self.current_page {
            tracing::debug!(
                page,
                current_page = self.current_page,
                total_pages,
                "Ignoring page navigation"
            );
            return false;
        }

        self.set_current_page(page);
        self.request_scroll();
        true
    }

    pub fn prev_page(&mut self) -> bool {
        self.has_prev() && self.go_to_page(self.current_page - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.has_next() && self.go_to_page(self.current_page + 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    /// Goes to the last page. With no items there is no last page and the
    /// state stays where it is.
    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Switches to `size`, keeping the first item of the current view visible.
    pub fn change_page_size(&mut self, size: u32) -> bool {
        if size == self.page_size || !self.page_size_options.contains(&size) {
            tracing::debug!(
                size,
                page_size = self.page_size,
                "Ignoring page size change"
            );
            return false;
        }

        let old_start = self.start_index();
        self.page_size = size;
        self.page_size_listeners.notify(size);

        let page = u32::try_from(old_start / u64::from(size))
            .unwrap_or(u32::MAX)
            .saturating_add(1)
            .min(self.last_valid_page());
        if page != self.current_page {
            self.set_current_page(page);
        }

        self.request_scroll();
        true
    }

    /// Records a new item count and pulls the current page back inside it.
    ///
    /// With no items left the state returns to page 1.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;

        let total_pages = self.total_pages();
        if total_pages == 0 {
            if self.current_page != 1 {
                self.set_current_page(1);
            }
        } else if self.current_page > total_pages {
            self.go_to_page(total_pages);
        }
    }

    /// Restores the initial state, applying any overrides in `options`.
    pub fn reset(&mut self, options: ResetOptions) {
        let page = options.page.filter(|page| *page > 0).unwrap_or(1);
        let page_size = options
            .page_size
            .filter(|size| self.page_size_options.contains(size))
            .unwrap_or(self.initial_page_size);

        self.total = options.total.unwrap_or(0);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page_size_listeners.notify(page_size);
        }
        let page = page.min(self.last_valid_page());
        if page != self.current_page {
            self.set_current_page(page);
        }
    }

    pub fn page_range(&self) -> Vec<u32> {
        self.compute_page_range(DEFAULT_WINDOW_SIZE)
    }

    pub fn compute_page_range(&self, window_size: usize) -> Vec<u32> {
        range::page_window(self.current_page, self.total_pages(), window_size)
    }

    /// Returns the items of the current page from a complete in-memory collection.
    ///
    /// `items` is expected to hold exactly `total` items.
    pub fn slice_for_current_page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if items.len() as u64 != self.total {
            tracing::warn!(
                len = items.len(),
                total = self.total,
                "Collection length does not match pagination total"
            );
        }

        let len = items.len();
        let start = usize::try_from(self.start_index())
            .unwrap_or(usize::MAX)
            .min(len);
        let end = usize::try_from(self.end_index())
            .unwrap_or(usize::MAX)
            .clamp(start, len);
        &items[start..end]
    }

    pub fn to_query_params(&self) -> QueryParams {
        QueryParams {
            page: self.current_page,
            page_size: self.page_size,
            offset: self.start_index(),
            limit: self.page_size,
        }
    }

    /// Calls `callback` with the current page now and after every page change.
    pub fn on_page_change<F>(&mut self, callback: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.page_listeners.register(self.current_page, callback);
    }

    /// Calls `callback` with the page size now and after every size change.
    pub fn on_page_size_change<F>(&mut self, callback: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.page_size_listeners.register(self.page_size, callback);
    }

    /// Calls `callback` with the scroll target after navigation when auto-scroll is on.
    pub fn on_scroll_request<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.scroll_listeners.push(Box::new(callback));
    }

    /// Highest page the current page may point at: page 1 when there are no items.
    fn last_valid_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    fn set_current_page(&mut self, page: u32) {
        self.current_page = page;
        self.page_listeners.notify(page);
    }

    fn request_scroll(&mut self) {
        if !self.auto_scroll {
            return;
        }
        for callback in &mut self.scroll_listeners {
            callback(&self.scroll_target);
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::from_valid_options(PaginationOptions::default())
    }
}

impl fmt::Debug for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationState")
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .field("total", &self.total)
            .field("page_size_options", &self.page_size_options)
            .field("auto_scroll", &self.auto_scroll)
            .field("scroll_target", &self.scroll_target)
            .field("page_listeners", &self.page_listeners)
            .field("page_size_listeners", &self.page_size_listeners)
            .field("scroll_listeners", &self.scroll_listeners.len())
            .finish()
    }
}
