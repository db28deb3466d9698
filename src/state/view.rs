use std::sync::Arc;

use tracing::debug;

use super::detail::{DetailCompletion, DetailFetcher, DetailRequest};
use super::list::{ListCompletion, ListFetcher, ListRequest};
use super::status::FetchStatus;
use crate::catalog::client::CatalogSource;
use crate::catalog::model::{CatalogSummary, EntityDetail};
use crate::config::CatalogConfig;
use crate::sprites::resolver::SpriteResolver;

/// Dialog axis of the view
#[derive(Debug, Clone, PartialEq, Eq)]
enum Dialog {
    Closed,
    Open { selected_name: String },
}

/// What the presentation layer renders for the list axis
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub page: u32,
    pub total_pages: u64,
    /// Empty while loading or failed
    pub items: &'a [CatalogSummary],
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// What the presentation layer renders for the dialog axis
#[derive(Debug, Clone, PartialEq)]
pub struct DialogView<'a> {
    pub is_open: bool,
    pub selected_name: Option<&'a str>,
    /// Only present once the open entity's record has loaded
    pub detail: Option<&'a EntityDetail>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// Owns both fetchers and the sprite resolver, and turns page and dialog
/// events into fetch requests.
///
/// Requests are returned to the caller to run on its executor; their
/// completions come back through `apply_list` / `apply_detail`.
pub struct ViewStateController {
    page: u32,
    list: ListFetcher,
    detail: DetailFetcher,
    dialog: Dialog,
    resolver: SpriteResolver,
}

impl ViewStateController {
    /// Start on page 1. The returned request is the initial list load.
    pub fn new(source: Arc<dyn CatalogSource>, config: &CatalogConfig) -> (Self, ListRequest) {
        let mut controller = Self {
            page: 1,
            list: ListFetcher::new(Arc::clone(&source), config.page_size),
            detail: DetailFetcher::new(source),
            dialog: Dialog::Closed,
            resolver: SpriteResolver::new(config.sprites.clone()),
        };

        let initial = controller.list.load(1);
        (controller, initial)
    }

    /// Go to `page`. No request is issued when it is already the current
    /// page, unless that page failed, in which case it is fetched again.
    pub fn go_to_page(&mut self, page: u32) -> Option<ListRequest> {
        if page == 0 {
            return None;
        }
        if page == self.page {
            if !matches!(self.list.status(), FetchStatus::Failed(_)) {
                return None;
            }
            debug!(page, "retrying failed page");
            return Some(self.list.load(page));
        }

        debug!(from = self.page, to = page, "page change");
        self.page = page;
        Some(self.list.load(page))
    }

    /// Open the dialog for `name`, superseding any dialog already loading
    pub fn open_detail(&mut self, name: &str) -> DetailRequest {
        self.dialog = Dialog::Open {
            selected_name: name.to_string(),
        };
        self.detail.load(name)
    }

    /// Close the dialog, dropping whatever it was showing or waiting for
    pub fn close_detail(&mut self) {
        self.dialog = Dialog::Closed;
        self.detail.reset();
    }

    pub fn apply_list(&mut self, completion: ListCompletion) -> bool {
        self.list.commit(completion)
    }

    pub fn apply_detail(&mut self, completion: DetailCompletion) -> bool {
        if self.dialog == Dialog::Closed {
            return false;
        }
        self.detail.commit(completion)
    }

    pub fn resolver(&self) -> &SpriteResolver {
        &self.resolver
    }

    pub fn list_view(&self) -> ListView<'_> {
        let status = self.list.status();

        ListView {
            page: self.page,
            total_pages: self.list.total_pages(),
            items: status.payload().map(|p| p.items.as_slice()).unwrap_or(&[]),
            is_loading: status.is_loading(),
            error_message: status.error_message(),
        }
    }

    pub fn dialog_view(&self) -> DialogView<'_> {
        match &self.dialog {
            Dialog::Closed => DialogView {
                is_open: false,
                selected_name: None,
                detail: None,
                is_loading: false,
                error_message: None,
            },
            Dialog::Open { selected_name } => {
                let status = self.detail.status();
                DialogView {
                    is_open: true,
                    selected_name: Some(selected_name.as_str()),
                    detail: status.payload(),
                    is_loading: status.is_loading(),
                    error_message: status.error_message(),
                }
            }
        }
    }
}
