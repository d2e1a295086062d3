use std::time::Instant;

use iced::{Subscription, window};

use super::{App, AppEvent};
use crate::host;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let host_subs = Subscription::run(host::stdin::listen).map(AppEvent::Host);

    let mut subs = vec![win_subs, host_subs];

    // Drive redraws while a tile transition is running.
    if app.widgets.rail.is_animating(Instant::now()) {
        subs.push(window::frames().map(AppEvent::Frame));
    }

    Subscription::batch(subs)
}
