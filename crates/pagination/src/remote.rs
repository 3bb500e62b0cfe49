use std::fmt;

use crate::dto::{PageRequest, PaginatedResponse, QueryParams};
use crate::error::Result;
use crate::state::PaginationState;

/// Something that can serve one page of items at a time.
#[async_trait::async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch(&self, query: &QueryParams) -> Result<PaginatedResponse<T>>;
}

/// A [`PageSource`] over a collection already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource<T> {
    items: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

#[async_trait::async_trait]
impl<T: Clone + Send + Sync> PageSource<T> for MemorySource<T> {
    async fn fetch(&self, query: &QueryParams) -> Result<PaginatedResponse<T>> {
        Ok(PageRequest::from(*query).paginate(&self.items))
    }
}

/// Keeps a [`PaginationState`] in sync with a remote [`PageSource`].
pub struct RemoteList<T, S> {
    state: PaginationState,
    source: S,
    items: Vec<T>,
    loading: bool,
}

impl<T, S> RemoteList<T, S>
where
    T: Send,
    S: PageSource<T>,
{
    pub fn new(state: PaginationState, source: S) -> Self {
        Self {
            state,
            source,
            items: Vec::new(),
            loading: false,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Mutable access for registering listeners or adjusting the state
    /// without fetching.
    pub fn state_mut(&mut self) -> &mut PaginationState {
        &mut self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetches the current page and records the reported total.
    ///
    /// When the new total no longer covers the current page, the state is
    /// moved to the last page and that page is fetched instead. On failure the
    /// previously loaded items are kept.
    pub async fn refresh(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.load().await;
        self.loading = false;
        result
    }

    pub async fn go_to_page(&mut self, page: u32) -> Result<bool> {
        let changed = self.state.go_to_page(page);
        self.refresh_if(changed).await
    }

    pub async fn next_page(&mut self) -> Result<bool> {
        let changed = self.state.next_page();
        self.refresh_if(changed).await
    }

    pub async fn prev_page(&mut self) -> Result<bool> {
        let changed = self.state.prev_page();
        self.refresh_if(changed).await
    }

    pub async fn change_page_size(&mut self, size: u32) -> Result<bool> {
        let changed = self.state.change_page_size(size);
        self.refresh_if(changed).await
    }

    async fn refresh_if(&mut self, changed: bool) -> Result<bool> {
        if changed {
            self.refresh().await?;
        }
        Ok(changed)
    }

    async fn load(&mut self) -> Result<()> {
        let query = self.state.to_query_params();
        tracing::info!(
            page = query.page,
            page_size = query.page_size,
            "Fetching page"
        );

        let mut response = self.fetch(&query).await?;
        self.state.set_total(response.pagination.total_items);

        if self.state.current_page() != query.page {
            let clamped = self.state.to_query_params();
            tracing::info!(
                requested = query.page,
                page = clamped.page,
                total = response.pagination.total_items,
                "Requested page is past the end, fetching the last page"
            );
            response = self.fetch(&clamped).await?;
            self.state.set_total(response.pagination.total_items);
        }

        self.items = response.data;
        Ok(())
    }

    async fn fetch(&self, query: &QueryParams) -> Result<PaginatedResponse<T>> {
        self.source.fetch(query).await.inspect_err(|error| {
            tracing::warn!(page = query.page, "Failed to fetch page: {}", error);
        })
    }
}

impl<T, S> fmt::Debug for RemoteList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteList")
            .field("state", &self.state)
            .field("items", &self.items.len())
            .field("loading", &self.loading)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaginationError;
    use crate::options::PaginationOptions;
    use std::sync::Mutex;

    fn list(items: Vec<u32>) -> RemoteList<u32, MemorySource<u32>> {
        RemoteList::new(PaginationState::default(), MemorySource::new(items))
    }

    struct FailingSource {
        calls: Mutex<u32>,
    }

    #[async_trait::async_trait]
    impl PageSource<u32> for FailingSource {
        async fn fetch(&self, _query: &QueryParams) -> Result<PaginatedResponse<u32>> {
            *self.calls.lock().unwrap() += 1;
            Err(PaginationError::Source("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_refresh_loads_first_page() {
        let mut list = list((0..95).collect());
        list.refresh().await.unwrap();

        assert_eq!(list.items(), &(0..10u32).collect::<Vec<_>>()[..]);
        assert_eq!(list.state().total(), 95);
        assert_eq!(list.state().total_pages(), 10);
        assert!(!list.is_loading());
    }

    #[tokio::test]
    async fn test_navigation_refetches() {
        let mut list = list((0..95).collect());
        list.refresh().await.unwrap();

        assert!(list.go_to_page(10).await.unwrap());
        assert_eq!(list.items(), &[90, 91, 92, 93, 94]);

        assert!(!list.next_page().await.unwrap());
        assert!(list.prev_page().await.unwrap());
        assert_eq!(list.items().first(), Some(&80));

        assert!(list.change_page_size(50).await.unwrap());
        assert_eq!(list.state().current_page(), 2);
        assert_eq!(list.items().len(), 45);
    }

    #[tokio::test]
    async fn test_shrinking_source_clamps_and_refetches() {
        let mut list = list((0..95).collect());
        list.refresh().await.unwrap();
        list.go_to_page(10).await.unwrap();

        list.source_mut().items_mut().truncate(25);
        list.refresh().await.unwrap();

        assert_eq!(list.state().current_page(), 3);
        assert_eq!(list.items(), &[20, 21, 22, 23, 24]);
    }

    #[tokio::test]
    async fn test_page_requested_before_total_is_known() {
        let state = PaginationState::new(PaginationOptions::default().with_page(3)).unwrap();
        let mut list = RemoteList::new(state, MemorySource::new((0..95).collect::<Vec<u32>>()));
        list.refresh().await.unwrap();

        assert_eq!(list.state().current_page(), 3);
        assert_eq!(list.items().first(), Some(&20));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_items() {
        let mut list = RemoteList::new(
            PaginationState::default(),
            FailingSource {
                calls: Mutex::new(0),
            },
        );

        let error = list.refresh().await.unwrap_err();
        assert!(matches!(error, PaginationError::Source(_)));
        assert!(list.items().is_empty());
        assert!(!list.is_loading());
        assert_eq!(*list.source().calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ignored_navigation_does_not_fetch() {
        let mut list = RemoteList::new(
            PaginationState::default(),
            FailingSource {
                calls: Mutex::new(0),
            },
        );

        assert!(!list.go_to_page(5).await.unwrap());
        assert!(!list.change_page_size(15).await.unwrap());
        assert_eq!(*list.source().calls.lock().unwrap(), 0);
    }
}
