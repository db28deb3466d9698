/// Presentation layer
///
/// Renders whatever the view state exposes. Nothing here decides what to
/// fetch; it only turns clicks into `Message`s.

pub mod board;
pub mod dialog;
pub mod grid;
pub mod pager;

use iced::widget::{image, Space};
use iced::{Color, Element, Length};

use crate::Message;
use board::{SlotId, SlotView, SpriteBoard};

pub const ERROR_COLOR: Color = Color {
    r: 0.9,
    g: 0.35,
    b: 0.35,
    a: 1.0,
};

/// One mounted image, or an empty box of the same size
pub fn sprite<'a>(board: &'a SpriteBoard, slot: Option<SlotId>, size: f32) -> Element<'a, Message> {
    let view = slot.map_or(SlotView::Hidden, |id| board.view(id));

    match view {
        SlotView::Ready(handle) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        SlotView::Pending | SlotView::Hidden => {
            Space::new(Length::Fixed(size), Length::Fixed(size)).into()
        }
    }
}
