/// In-memory `CatalogSource` for tests
///
/// Pages are synthesised from a fixed catalog size; records and static
/// resources are looked up in maps, and anything unknown answers 404.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use super::client::CatalogSource;
use super::error::SourceError;
use super::model::{CatalogPage, CatalogSummary, EntityDetail};

#[derive(Default)]
pub struct ScriptedCatalog {
    pub total_count: u64,
    pub page_error: Option<SourceError>,
    /// One-shot page failures, consumed before `page_error` is consulted
    pub page_failures: Mutex<VecDeque<SourceError>>,
    /// Returned by every `fetch_entity` call when set
    pub entity_error: Option<SourceError>,
    pub records: HashMap<String, EntityDetail>,
    pub resources: HashMap<String, Result<Vec<u8>, SourceError>>,
    /// Every URL passed to `fetch_bytes`, in call order
    pub fetched: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn with_count(total_count: u64) -> Self {
        Self {
            total_count,
            ..Self::default()
        }
    }

    pub fn with_record(mut self, detail: EntityDetail) -> Self {
        self.records.insert(detail.name.clone(), detail);
        self
    }

    /// Fail the next page fetch with `err`, then serve pages normally
    pub fn with_page_failure(self, err: SourceError) -> Self {
        if let Ok(mut failures) = self.page_failures.lock() {
            failures.push_back(err);
        }
        self
    }

    pub fn with_resource(mut self, url: &str, result: Result<Vec<u8>, SourceError>) -> Self {
        self.resources.insert(url.to_string(), result);
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

/// Detail record with a numeric id and no record sprites
pub fn detail(name: &str, id: u32) -> EntityDetail {
    EntityDetail {
        id: Some(id.to_string()),
        name: name.to_string(),
        height: id,
        weight: id * 10,
        types: Vec::new(),
        stats: Vec::new(),
        sprite_candidates: Vec::new(),
    }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
    async fn fetch_page(&self, limit: u32, offset: u64) -> Result<CatalogPage, SourceError> {
        let queued = self.page_failures.lock().ok().and_then(|mut f| f.pop_front());
        if let Some(err) = queued {
            return Err(err);
        }
        if let Some(err) = &self.page_error {
            return Err(err.clone());
        }

        let end = (offset + u64::from(limit)).min(self.total_count);
        let items = (offset..end)
            .map(|index| CatalogSummary {
                name: format!("entity-{}", index + 1),
                url: format!("https://catalog.test/pokemon/{}/", index + 1),
            })
            .collect();

        Ok(CatalogPage {
            total_count: self.total_count,
            items,
        })
    }

    async fn fetch_entity(&self, name: &str) -> Result<EntityDetail, SourceError> {
        if let Some(err) = &self.entity_error {
            return Err(err.clone());
        }
        self.records
            .get(name)
            .cloned()
            .ok_or(SourceError::Status(404))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push(url.to_string());
        }
        self.resources
            .get(url)
            .cloned()
            .unwrap_or(Err(SourceError::Status(404)))
    }
}
