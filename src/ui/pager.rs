use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::Message;

/// "Page N" with " / M" once the page count is known
pub fn label(page: u32, total_pages: u64) -> String {
    if total_pages > 0 {
        format!("Page {} / {}", page, total_pages)
    } else {
        format!("Page {}", page)
    }
}

/// Page to request again when the current one failed
pub fn retry_target(page: u32, failed: bool) -> Option<u32> {
    failed.then_some(page)
}

/// Previous/next controls. Always rendered so a failed page can be left,
/// with a retry button while the current page is in error.
pub fn view<'a>(page: u32, total_pages: u64, failed: bool) -> Element<'a, Message> {
    let previous = (page > 1).then(|| Message::PageRequested(page - 1));
    let next = (u64::from(page) < total_pages).then(|| Message::PageRequested(page + 1));

    let mut controls = row![
        button("‹ Previous").on_press_maybe(previous).padding(8),
        text(label(page, total_pages)).size(14),
        button("Next ›").on_press_maybe(next).padding(8),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    if let Some(target) = retry_target(page, failed) {
        controls = controls.push(
            button("Retry")
                .on_press(Message::PageRequested(target))
                .padding(8),
        );
    }

    controls.into()
}
