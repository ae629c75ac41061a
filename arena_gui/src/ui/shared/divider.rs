//! Resizable Panel Divider
//!
//! A draggable vertical divider between the description and editor panels.

use iced::widget::{container, mouse_area, rule};
use iced::{mouse, Element, Length};

use crate::Message;

/// Create the draggable divider
///
/// A 1px line with 2px of padding on each side. Pressing it starts the drag
/// session; moves and the release are picked up at window scope by the drag
/// subscription, not here.
pub fn view_divider(is_dragging: bool) -> Element<'static, Message> {
    let line = rule::vertical(1);

    let divider_content = container(line)
        .padding(iced::Padding {
            top: 0.0,
            right: 2.0,
            bottom: 0.0,
            left: 2.0,
        })
        .height(Length::Fill)
        .style(move |theme: &iced::Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: if is_dragging {
                    Some(palette.primary.weak.color.into())
                } else {
                    Some(palette.background.weak.color.into())
                },
                ..Default::default()
            }
        });

    // mouse_area consumes the press, so the panels never see the start of
    // the gesture as a text selection
    mouse_area(divider_content)
        .on_press(Message::DividerPressed)
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
