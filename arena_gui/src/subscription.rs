//! Application subscriptions.
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Window open/resize | Always | Track the container width used for drag ratios |
//! | Drag pointer | Divider drag active | Cursor moves, release, window leave, Escape |
//!
//! Drag events are listened to at window scope rather than on the divider,
//! so a gesture keeps tracking while the cursor is over either panel and
//! still ends when the button is released somewhere else.

use iced::event::{self, Event};
use iced::keyboard::{self, key};
use iced::{mouse, window, Subscription};

use crate::{App, Message};

/// Create all application subscriptions.
pub fn create_subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([resize_subscription(), drag_subscription(app)])
}

/// Window width on open and on every resize
fn resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| window_width(&event).map(Message::WindowResized))
}

fn window_width(event: &Event) -> Option<f32> {
    match event {
        Event::Window(window::Event::Opened { size, .. }) => Some(size.width),
        Event::Window(window::Event::Resized(size)) => Some(size.width),
        _ => None,
    }
}

/// Pointer events for an active divider drag.
///
/// Event capture status is ignored: a text editor or scrollable under the
/// cursor must not swallow the gesture.
fn drag_subscription(app: &App) -> Subscription<Message> {
    if !app.workspace.split().is_dragging() {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved(position.x)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Message::PointerReleased),
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::DragCancelled),
        _ => None,
    })
}
