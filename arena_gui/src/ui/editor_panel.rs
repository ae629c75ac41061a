//! Editor Panel (Right)
//!
//! Toolbar (Submit, Run Code, language picker, theme picker) above the
//! code editor. The editor is configured from the workspace snapshot on
//! every render; changing the language or theme only changes the snapshot.

use iced::highlighter;
use iced::widget::{button, column, container, pick_list, row, text, text_editor, Space};
use iced::{Alignment, Element, Length, Padding};

use arena_core::editor::EditorTheme;
use arena_core::LayoutSnapshot;

use crate::{App, Message};
use super::description_panel::portion;

/// Render the editor panel
pub fn view_editor_panel<'a>(app: &'a App, view: &LayoutSnapshot) -> Element<'a, Message> {
    let content = column![
        view_toolbar(app, view.editor.theme),
        view_editor(app, view),
    ]
    .spacing(4);

    container(content)
        .width(Length::FillPortion(portion(view.widths.right_percent)))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Submit/Run buttons and the language and theme pickers
fn view_toolbar(app: &App, theme: EditorTheme) -> Element<'_, Message> {
    let languages = app.workspace.languages().options();

    row![
        button(text("Submit").size(11))
            .on_press(Message::Submit)
            .padding(Padding::from([4, 8]))
            .style(button::success),
        button(text("Run Code").size(11))
            .on_press(Message::Run)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        pick_list(languages, app.workspace.language_option().cloned(), Message::LanguageSelected)
            .width(Length::Fixed(130.0))
            .text_size(11),
        pick_list(&EditorTheme::ALL[..], Some(theme), Message::ThemeSelected)
            .width(Length::Fixed(120.0))
            .text_size(11),
        Space::new().width(Length::Fill),
        button(text("Open Problem").size(11))
            .on_press(Message::OpenProblem)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(6)
    .padding(Padding::from([4, 8]))
    .align_y(Alignment::Center)
    .into()
}

/// Code editor configured from the snapshot
fn view_editor<'a>(app: &'a App, view: &LayoutSnapshot) -> Element<'a, Message> {
    let syntax = app
        .workspace
        .language_option()
        .map(|option| option.syntax().to_string())
        .unwrap_or_else(|| view.editor.language.to_string());

    let editor = text_editor(&app.code)
        .on_action(Message::CodeEdited)
        .highlight(&syntax, highlighter_theme(view.editor.theme))
        .size(f32::from(view.features.font_size))
        .height(Length::Fill);

    let mut panel = column![editor].spacing(2);

    if view.features.show_line_numbers {
        panel = panel.push(
            text(format!("{} lines", app.code.line_count()))
                .size(10)
                .color([0.5, 0.5, 0.5]),
        );
    }

    panel.into()
}

/// Closest bundled highlighter palette for each editor theme
fn highlighter_theme(theme: EditorTheme) -> highlighter::Theme {
    match theme {
        EditorTheme::Monokai => highlighter::Theme::Base16Mocha,
        EditorTheme::Github => highlighter::Theme::InspiredGitHub,
        EditorTheme::GithubDark => highlighter::Theme::Base16Ocean,
    }
}
