use std::time::Instant;

use iced::{Task, window};

use super::host;
use crate::app::{App, AppEvent};
use crate::host::OutboundMessage;
use crate::widgets::rail::{RailCtx, RailEffect, RailIntent};

/// Route a rail intent through widget reduction and apply its effect.
pub(crate) fn route(app: &mut App, intent: RailIntent) -> Task<AppEvent> {
    let ctx = RailCtx {
        now: Instant::now(),
    };
    match app.widgets.rail.reduce(intent, &ctx) {
        Some(effect) => route_effect(app, effect),
        None => Task::none(),
    }
}

/// Host signals leave in the same update that produced them.
fn route_effect(app: &mut App, effect: RailEffect) -> Task<AppEvent> {
    match effect {
        RailEffect::NotifyHost(signal) => {
            host::send(app, &OutboundMessage::from(signal));
            Task::none()
        },
        RailEffect::ResizeWindow { width } => {
            app.window_size.width = width;
            let size = app.window_size;
            window::latest().and_then(move |id| window::resize(id, size))
        },
    }
}
