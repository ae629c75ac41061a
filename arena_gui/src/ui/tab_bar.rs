//! Tab bar for the description panel

use iced::widget::{button, row, text, Row};
use iced::{Element, Padding};

use arena_core::Tab;

use crate::Message;

/// Render one button per tab, highlighting the active one
pub fn view_tab_bar(active: Tab) -> Element<'static, Message> {
    let tabs = Tab::ALL.into_iter().fold(Row::new().spacing(2), |bar, tab| {
        let style = if tab == active {
            button::primary
        } else {
            button::secondary
        };
        bar.push(
            button(text(tab.display_name()).size(11))
                .on_press(Message::TabSelected(tab))
                .padding(Padding::from([4, 10]))
                .style(style),
        )
    });

    row![tabs].padding(Padding::from([4, 0])).into()
}
