use iced::widget::{column, container, opaque, scrollable, stack, text};
use iced::{Alignment, Color, Element, Length, Task, Theme};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod sprites;
mod state;
mod ui;

use catalog::client::{CatalogSource, HttpCatalog};
use config::CatalogConfig;
use sprites::loader::{self, SpriteBytes, SpriteLoadError};
use sprites::slot::TierRequest;
use state::detail::DetailCompletion;
use state::list::ListCompletion;
use state::view::ViewStateController;
use ui::board::{SlotId, SpriteBoard};

/// Main application state
struct CatalogViewer {
    /// Page and dialog state machine
    controller: ViewStateController,
    /// Shared network source, also used for sprite downloads
    source: Arc<dyn CatalogSource>,
    /// Every image currently mounted on screen
    board: SpriteBoard,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked another page
    PageRequested(u32),
    /// A page request finished (possibly stale)
    ListLoaded(ListCompletion),
    /// User clicked a card
    OpenDetail(String),
    /// User dismissed the dialog
    CloseDetail,
    /// A detail request finished (possibly stale)
    DetailLoaded(DetailCompletion),
    /// One sprite tier finished loading for a mounted image
    SpriteLoaded(SlotId, usize, Result<SpriteBytes, SpriteLoadError>),
}

impl CatalogViewer {
    /// Create a new instance of the application and start loading page 1
    fn new() -> (Self, Task<Message>) {
        let config = CatalogConfig::default();
        // The built-in configuration is static; an invalid one is a programming error
        config
            .validate()
            .expect("Built-in catalog configuration is invalid");

        let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalog::new(config.api_base.clone()));
        let (controller, initial) = ViewStateController::new(Arc::clone(&source), &config);

        info!(api_base = %config.api_base, page_size = config.page_size, "catalog viewer initialized");

        (
            CatalogViewer {
                controller,
                source,
                board: SpriteBoard::default(),
            },
            Task::perform(initial.run(), Message::ListLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageRequested(page) => match self.controller.go_to_page(page) {
                Some(request) => {
                    // The grid is replaced by a loading indicator, so its images unmount
                    self.board.clear_grid();
                    Task::perform(request.run(), Message::ListLoaded)
                }
                None => Task::none(),
            },
            Message::ListLoaded(completion) => {
                if !self.controller.apply_list(completion) {
                    return Task::none();
                }

                let chains: Vec<Vec<String>> = self
                    .controller
                    .list_view()
                    .items
                    .iter()
                    .map(|item| self.controller.resolver().resolve(item.id()))
                    .collect();

                let requests = self.board.mount_grid(chains);
                Task::batch(
                    requests
                        .into_iter()
                        .map(|(slot, request)| self.load_sprite(slot, request)),
                )
            }
            Message::OpenDetail(name) => {
                self.board.clear_detail();
                let request = self.controller.open_detail(&name);
                Task::perform(request.run(), Message::DetailLoaded)
            }
            Message::CloseDetail => {
                self.controller.close_detail();
                self.board.clear_detail();
                Task::none()
            }
            Message::DetailLoaded(completion) => {
                if !self.controller.apply_detail(completion) {
                    return Task::none();
                }

                let chain = self
                    .controller
                    .dialog_view()
                    .detail
                    .map(|detail| self.controller.resolver().resolve_detail(detail));

                match chain.and_then(|chain| self.board.mount_detail(chain)) {
                    Some((slot, request)) => self.load_sprite(slot, request),
                    None => Task::none(),
                }
            }
            Message::SpriteLoaded(slot, tier, Ok(sprite)) => {
                self.board.loaded(slot, tier, sprite);
                Task::none()
            }
            Message::SpriteLoaded(slot, tier, Err(err)) => {
                tracing::debug!(?slot, tier, error = %err, "sprite tier failed");
                match self.board.failed(slot, tier) {
                    Some(request) => self.load_sprite(slot, request),
                    None => Task::none(),
                }
            }
        }
    }

    /// Launch the async download of one sprite tier
    fn load_sprite(&self, slot: SlotId, request: TierRequest) -> Task<Message> {
        let tier = request.tier;
        Task::perform(
            loader::load_sprite(Arc::clone(&self.source), request.url),
            move |result| Message::SpriteLoaded(slot, tier, result),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let list = self.controller.list_view();

        let body: Element<Message> = if list.is_loading {
            container(text("Loading...").size(16))
                .center_x(Length::Fill)
                .padding(48)
                .into()
        } else if let Some(message) = list.error_message.clone() {
            column![
                text("Error:").size(16).color(ui::ERROR_COLOR),
                text(message).color(ui::ERROR_COLOR),
            ]
            .spacing(4)
            .into()
        } else {
            ui::grid::view(list.items, &self.board)
        };

        let content = column![
            text("Catalog").size(36),
            body,
            ui::pager::view(list.page, list.total_pages, list.error_message.is_some()),
        ]
        .spacing(24)
        .padding(32)
        .align_x(Alignment::Center);

        let base = scrollable(container(content).width(Length::Fill).center_x(Length::Fill));

        let dialog = self.controller.dialog_view();
        if !dialog.is_open {
            return base.into();
        }

        let overlay = container(ui::dialog::view(dialog, &self.board))
            .center(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.7,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            });

        stack![base, opaque(overlay)].into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog_viewer=info")),
        )
        .init();

    iced::application("Catalog Viewer", CatalogViewer::update, CatalogViewer::view)
        .theme(CatalogViewer::theme)
        .centered()
        .run_with(CatalogViewer::new)
}
