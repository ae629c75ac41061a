//! Description Panel (Left)
//!
//! Dispatches on the active tab:
//! - Statement -> sanitized problem statement through the markdown viewer
//! - Editorial -> placeholder
//! - Submissions -> placeholder

use iced::widget::{column, container, markdown, scrollable, text, Column, Space};
use iced::{Element, Length, Theme};

use arena_core::Tab;

use crate::{App, Message};
use super::tab_bar;

/// Render the description panel
///
/// `left_percent` is the panel's share of the workspace width, 10..90.
pub fn view_description_panel(app: &App, left_percent: f64) -> Element<'_, Message> {
    let active = app.workspace.active_tab();

    let pane: Element<'_, Message> = match active {
        Tab::Statement => view_statement(app),
        Tab::Editorial => view_placeholder("The editorial for this problem is not available yet."),
        Tab::Submissions => view_placeholder("You have no submissions for this problem."),
    };

    let content = column![
        tab_bar::view_tab_bar(active),
        Space::new().height(8),
        scrollable(container(pane).padding(20).width(Length::Fill)).height(Length::Fill),
    ];

    container(content)
        .width(Length::FillPortion(portion(left_percent)))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Statement pane; the items were parsed from the sanitized statement
fn view_statement(app: &App) -> Element<'_, Message> {
    if app.workspace.statement().is_empty() {
        return view_placeholder("This problem has no statement.");
    }

    let theme = if app.workspace.editor_config().theme.is_dark() {
        Theme::Dark
    } else {
        Theme::Light
    };

    markdown::view(&app.statement_items, theme).map(|url| Message::LinkClicked(url.to_string()))
}

fn view_placeholder(message: &'static str) -> Element<'static, Message> {
    Column::new()
        .push(text(message).size(13).color([0.5, 0.5, 0.5]))
        .into()
}

/// Convert a percentage to a fill portion (scaled by 100 for precision)
pub fn portion(percent: f64) -> u16 {
    (percent * 100.0).round().clamp(1.0, f64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_scales_percent() {
        assert_eq!(portion(50.0), 5000);
        assert_eq!(portion(30.25), 3025);
        assert_eq!(portion(0.0), 1);
    }
}
