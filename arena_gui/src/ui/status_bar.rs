//! Status Bar (Bottom)
//!
//! Displays:
//! - Problem title
//! - Status messages (file errors, submit/run notices)
//! - Current split ratio

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(title: &'a str, status: &'a str, left_percent: f64) -> Element<'a, Message> {
    row![
        text(title).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
        Space::new().width(12),
        text(format!("{:.0}% | {:.0}%", left_percent, 100.0 - left_percent))
            .size(10)
            .color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 4]))
    .into()
}
