use std::sync::Arc;

use tracing::{debug, info, warn};

use super::status::{FetchStatus, Generation, Ticket};
use crate::catalog::client::CatalogSource;
use crate::catalog::error::ListFetchError;
use crate::catalog::model::{self, CatalogPage};

pub type ListFetchStatus = FetchStatus<CatalogPage, ListFetchError>;

/// Retrieves one page of catalog summaries at a time.
///
/// Only the most recently started request may commit. Older completions
/// are dropped on the floor by `commit`.
pub struct ListFetcher {
    source: Arc<dyn CatalogSource>,
    page_size: u32,
    generation: Generation,
    status: ListFetchStatus,
    /// Catalog size from the last successful page, kept across reloads
    total_count: u64,
}

/// A page request that has been issued but not yet sent
#[derive(Clone)]
pub struct ListRequest {
    ticket: Ticket,
    page: u32,
    limit: u32,
    offset: u64,
    source: Arc<dyn CatalogSource>,
}

/// Outcome of a `ListRequest`, to be handed back to `ListFetcher::commit`
#[derive(Debug, Clone)]
pub struct ListCompletion {
    ticket: Ticket,
    pub page: u32,
    pub result: Result<CatalogPage, ListFetchError>,
}

impl ListRequest {
    /// Perform the network call. Never touches fetcher state.
    pub async fn run(self) -> ListCompletion {
        let result = self
            .source
            .fetch_page(self.limit, self.offset)
            .await
            .map_err(ListFetchError::from);

        ListCompletion {
            ticket: self.ticket,
            page: self.page,
            result,
        }
    }
}

impl std::fmt::Debug for ListRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListRequest")
            .field("ticket", &self.ticket)
            .field("page", &self.page)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}

impl ListFetcher {
    pub fn new(source: Arc<dyn CatalogSource>, page_size: u32) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            generation: Generation::default(),
            status: FetchStatus::Idle,
            total_count: 0,
        }
    }

    /// Start loading `page` (1-based). Status becomes `Loading` right away
    /// and every earlier request becomes stale.
    pub fn load(&mut self, page: u32) -> ListRequest {
        let page = page.max(1);
        let ticket = self.generation.issue();
        let offset = u64::from(page - 1) * u64::from(self.page_size);
        self.status = FetchStatus::Loading;

        debug!(page, offset, limit = self.page_size, "list fetch started");

        ListRequest {
            ticket,
            page,
            limit: self.page_size,
            offset,
            source: Arc::clone(&self.source),
        }
    }

    /// Apply a completed request. Returns `false` (and changes nothing)
    /// when a newer request has been started since this one.
    pub fn commit(&mut self, completion: ListCompletion) -> bool {
        if !self.generation.is_current(completion.ticket) {
            debug!(page = completion.page, "discarding stale list response");
            return false;
        }

        match completion.result {
            Ok(page) => {
                info!(
                    page = completion.page,
                    items = page.items.len(),
                    total = page.total_count,
                    "list page loaded"
                );
                self.total_count = page.total_count;
                self.status = FetchStatus::Success(page);
            }
            Err(err) => {
                warn!(page = completion.page, error = %err, "list fetch failed");
                self.status = FetchStatus::Failed(err);
            }
        }

        true
    }

    pub fn status(&self) -> &ListFetchStatus {
        &self.status
    }

    /// Page count from the last successful response
    pub fn total_pages(&self) -> u64 {
        model::total_pages(self.total_count, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::SourceError;
    use crate::catalog::scripted::ScriptedCatalog;

    fn fetcher(catalog: ScriptedCatalog) -> ListFetcher {
        ListFetcher::new(Arc::new(catalog), 20)
    }

    #[tokio::test]
    async fn test_load_commits_page() {
        let mut list = fetcher(ScriptedCatalog::with_count(1010));

        let request = list.load(1);
        assert!(list.status().is_loading());

        let completion = request.run().await;
        assert!(list.commit(completion));

        let page = list.status().payload().unwrap();
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0].name, "entity-1");
        assert_eq!(list.total_pages(), 51);
    }

    #[tokio::test]
    async fn test_offset_follows_page_number() {
        let mut list = fetcher(ScriptedCatalog::with_count(1010));
        let completion = list.load(3).run().await;
        list.commit(completion);

        let page = list.status().payload().unwrap();
        assert_eq!(page.items[0].name, "entity-41");
        assert_eq!(page.items[19].name, "entity-60");
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let mut list = fetcher(ScriptedCatalog::with_count(0));
        let completion = list.load(1).run().await;
        list.commit(completion);

        assert!(list.status().payload().unwrap().items.is_empty());
        assert_eq!(list.status().error_message(), None);
        assert_eq!(list.total_pages(), 0);
    }

    #[tokio::test]
    async fn test_slow_earlier_page_never_overwrites_later_page() {
        let mut list = fetcher(ScriptedCatalog::with_count(1010));

        let first = list.load(1);
        let second = list.load(2);

        // Page 2 answers first, page 1 straggles in afterwards
        let second_done = second.run().await;
        let first_done = first.run().await;

        assert!(list.commit(second_done));
        assert!(!list.commit(first_done));

        let page = list.status().payload().unwrap();
        assert_eq!(page.items[0].name, "entity-21");
    }

    #[tokio::test]
    async fn test_stale_response_does_not_end_loading() {
        let mut list = fetcher(ScriptedCatalog::with_count(1010));

        let first = list.load(1);
        let _second = list.load(2);

        assert!(!list.commit(first.run().await));
        assert!(list.status().is_loading());
    }

    #[tokio::test]
    async fn test_double_load_applies_once() {
        let mut list = fetcher(ScriptedCatalog::with_count(1010));

        let a = list.load(4);
        let b = list.load(4);
        let a_done = a.run().await;
        let b_done = b.run().await;

        let committed = [list.commit(a_done), list.commit(b_done)];
        assert_eq!(committed, [false, true]);
        assert_eq!(list.status().payload().unwrap().items.len(), 20);
    }

    #[tokio::test]
    async fn test_http_failure() {
        let mut catalog = ScriptedCatalog::with_count(1010);
        catalog.page_error = Some(SourceError::Status(503));
        let mut list = fetcher(catalog);

        let completion = list.load(1).run().await;
        list.commit(completion);

        assert_eq!(
            list.status(),
            &FetchStatus::Failed(ListFetchError::Status { http_status: 503 })
        );
        assert!(list.status().error_message().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_total_pages_survive_reload() {
        let mut list = fetcher(ScriptedCatalog::with_count(45));
        let completion = list.load(1).run().await;
        list.commit(completion);

        let _pending = list.load(2);
        assert!(list.status().is_loading());
        assert_eq!(list.total_pages(), 3);
    }
}
