use std::time::Instant;

use iced::Element;

use super::{RailIntent, RailWidget};

/// Render the rail as it looks right now.
pub(crate) fn view(widget: &RailWidget) -> Element<'_, RailIntent> {
    navrail_ui_rail::view(widget.rail(), Instant::now())
        .map(RailIntent::Pointer)
}
