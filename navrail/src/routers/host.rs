use iced::Task;

use super::rail;
use crate::app::{App, AppEvent};
use crate::host::{InboundMessage, OutboundMessage};
use crate::widgets::rail::RailIntent;

/// Announce that the rail is ready to receive renders.
pub(crate) fn announce_ready(app: &mut App) -> Task<AppEvent> {
    send(app, &OutboundMessage::ready());
    Task::none()
}

/// Route a message read from the host.
pub(crate) fn route(app: &mut App, message: InboundMessage) -> Task<AppEvent> {
    match message {
        InboundMessage::Render(args) => {
            rail::route(app, RailIntent::Render(args))
        },
        InboundMessage::Unknown => {
            log::debug!("ignoring unknown host message");
            Task::none()
        },
    }
}

/// Send one message to the host. Failures are logged, not fatal.
pub(crate) fn send(app: &mut App, message: &OutboundMessage) {
    if let Err(err) = app.host.send(message) {
        log::warn!("failed to notify host: {err}");
    }
}
