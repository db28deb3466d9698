use iced::widget::{button, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::board::SpriteBoard;
use super::ERROR_COLOR;
use crate::catalog::model::EntityDetail;
use crate::state::view::DialogView;
use crate::Message;

const ARTWORK_SIZE: f32 = 220.0;

/// Detail panel for the open entity. The close button is always present.
pub fn view<'a>(dialog: DialogView<'a>, board: &'a SpriteBoard) -> Element<'a, Message> {
    let title = dialog.selected_name.unwrap_or("Detail");

    let header = row![
        text(title).size(28).width(Length::Fill),
        button("Close").on_press(Message::CloseDetail).padding(8),
    ]
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = if dialog.is_loading {
        container(text("Loading...").size(16))
            .center_x(Length::Fill)
            .padding(40)
            .into()
    } else if let Some(message) = dialog.error_message {
        column![
            text("Error:").size(16).color(ERROR_COLOR),
            text(message).color(ERROR_COLOR),
        ]
        .spacing(4)
        .into()
    } else if let Some(detail) = dialog.detail {
        record(detail, board)
    } else {
        Column::new().into()
    };

    container(column![header, horizontal_rule(1), body].spacing(16))
        .width(Length::Fixed(480.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn record<'a>(detail: &'a EntityDetail, board: &'a SpriteBoard) -> Element<'a, Message> {
    let artwork = container(super::sprite(board, board.detail_slot(), ARTWORK_SIZE)).center_x(Length::Fill);

    let types = Row::with_children(detail.types.iter().map(|kind| {
        container(text(kind.name.as_str()).size(14))
            .padding([4, 10])
            .style(container::rounded_box)
            .into()
    }))
    .spacing(8);

    let measurements = row![
        text(format!("Height: {}", detail.height)),
        text(format!("Weight: {}", detail.weight)),
    ]
    .spacing(16);

    let stats = Column::with_children(detail.stats.iter().map(|stat| {
        row![
            text(stat.name.as_str()).size(14).width(Length::Fill),
            text(stat.base_value.to_string()).size(14),
        ]
        .into()
    }))
    .spacing(4);

    column![
        artwork,
        horizontal_rule(1),
        types,
        measurements,
        text("Stats").size(18),
        stats,
    ]
    .spacing(12)
    .into()
}
