use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => routers::host::announce_ready(app),
        AppEvent::Rail(intent) => routers::rail::route(app, intent),
        AppEvent::Host(message) => routers::host::route(app, message),
        // Redraw only; styles are sampled at view time.
        AppEvent::Frame(_) => Task::none(),
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_size(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
