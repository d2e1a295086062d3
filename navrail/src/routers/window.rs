use iced::{Size, Task};

use super::rail;
use crate::app::{App, AppEvent};
use crate::widgets::rail::RailIntent;

/// Handle window open and resize events.
pub(crate) fn handle_size(app: &mut App, size: Size) -> Task<AppEvent> {
    app.window_size = size;
    rail::route(
        app,
        RailIntent::Mounted {
            viewport_height: size.height,
        },
    )
}
