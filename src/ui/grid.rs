use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::board::SpriteBoard;
use crate::catalog::model::CatalogSummary;
use crate::Message;

const THUMBNAIL_SIZE: f32 = 96.0;
const CARD_WIDTH: f32 = 180.0;

/// Card grid for one page of entries
pub fn view<'a>(items: &'a [CatalogSummary], board: &'a SpriteBoard) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| card(item, board, index))
        .collect();

    Wrap::with_elements(cards)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

fn card<'a>(item: &'a CatalogSummary, board: &'a SpriteBoard, index: usize) -> Element<'a, Message> {
    let content = column![
        container(super::sprite(board, board.grid_slot(index), THUMBNAIL_SIZE))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(140.0)),
        text(item.name.as_str()).size(18),
        text(format!("ID: {}", item.id())).size(12),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    button(content)
        .on_press(Message::OpenDetail(item.name.clone()))
        .width(Length::Fixed(CARD_WIDTH))
        .padding(10)
        .into()
}
