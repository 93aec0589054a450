// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Three subscriptions are batched: the chat stream (only while an
//! exchange is live), a periodic tick for toast expiry and the busy
//! spinner, and a keyboard listener for the ask shortcut.

use super::Message;
use crate::api::ApiClient;
use crate::chat::{self, ChatSession};
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the chat stream subscription for the live exchange.
///
/// The subscription exists only while the session is in an active phase.
/// When the phase leaves the active states (or the session id changes),
/// iced drops the subscription, which closes the connection.
pub fn create_chat_subscription(client: &ApiClient, chat: &ChatSession) -> Subscription<Message> {
    if chat.is_active() {
        chat::stream_events(client.clone(), chat.session_id(), chat.question.clone())
            .map(Message::ChatStream)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss
/// and the submit spinner animation.
pub fn create_tick_subscription(
    is_submitting: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_submitting || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription for the ask shortcut.
///
/// Ctrl+Enter (Cmd+Enter on macOS) submits the coach question. The
/// shortcut fires even while a text field has focus.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if modifiers.command() =>
        {
            match key {
                keyboard::Key::Named(keyboard::key::Named::Enter) => Some(Message::AskQuestion),
                _ => None,
            }
        }
        _ => None,
    })
}
