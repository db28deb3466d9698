use std::sync::Arc;

use tracing::{debug, info, warn};

use super::status::{FetchStatus, Generation, Ticket};
use crate::catalog::client::CatalogSource;
use crate::catalog::error::DetailFetchError;
use crate::catalog::model::EntityDetail;

pub type DetailFetchStatus = FetchStatus<EntityDetail, DetailFetchError>;

/// Retrieves the full record of one entity at a time.
///
/// Unlike the list, a new load clears the previous record immediately so
/// a dialog never shows one entity's data under another entity's name.
pub struct DetailFetcher {
    source: Arc<dyn CatalogSource>,
    generation: Generation,
    status: DetailFetchStatus,
}

#[derive(Clone)]
pub struct DetailRequest {
    ticket: Ticket,
    name: String,
    source: Arc<dyn CatalogSource>,
}

#[derive(Debug, Clone)]
pub struct DetailCompletion {
    ticket: Ticket,
    pub name: String,
    pub result: Result<EntityDetail, DetailFetchError>,
}

impl DetailRequest {
    /// Perform the network call. Never touches fetcher state.
    pub async fn run(self) -> DetailCompletion {
        let result = if self.name.trim().is_empty() {
            Err(DetailFetchError::EmptyName)
        } else {
            self.source
                .fetch_entity(&self.name)
                .await
                .map_err(DetailFetchError::from)
        };

        DetailCompletion {
            ticket: self.ticket,
            name: self.name,
            result,
        }
    }
}

impl std::fmt::Debug for DetailRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailRequest")
            .field("ticket", &self.ticket)
            .field("name", &self.name)
            .finish()
    }
}

impl DetailFetcher {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            generation: Generation::default(),
            status: FetchStatus::Idle,
        }
    }

    /// Start loading `name`, superseding whatever was in flight
    pub fn load(&mut self, name: &str) -> DetailRequest {
        let ticket = self.generation.issue();
        self.status = FetchStatus::Loading;

        debug!(name, "detail fetch started");

        DetailRequest {
            ticket,
            name: name.to_string(),
            source: Arc::clone(&self.source),
        }
    }

    /// Apply a completed request if it is still the latest one
    pub fn commit(&mut self, completion: DetailCompletion) -> bool {
        if !self.generation.is_current(completion.ticket) {
            debug!(name = %completion.name, "discarding stale detail response");
            return false;
        }

        match completion.result {
            Ok(detail) => {
                info!(name = %completion.name, "detail loaded");
                self.status = FetchStatus::Success(detail);
            }
            Err(err) => {
                warn!(name = %completion.name, error = %err, "detail fetch failed");
                self.status = FetchStatus::Failed(err);
            }
        }

        true
    }

    /// Back to `Idle`; anything still in flight will be discarded
    pub fn reset(&mut self) {
        self.generation.invalidate();
        self.status = FetchStatus::Idle;
    }

    pub fn status(&self) -> &DetailFetchStatus {
        &self.status
    }
}
