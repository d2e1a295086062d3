use navrail_ui_rail::{HostSignal, NavRailEvent};

use crate::host::RenderArgs;

/// Intent events handled by the rail widget.
#[derive(Debug, Clone)]
pub(crate) enum RailIntent {
    /// Pointer activity on one of the buttons.
    Pointer(NavRailEvent),
    /// New inputs published by the host.
    Render(RenderArgs),
    /// The window reported its size; the first one counts as the mount.
    Mounted { viewport_height: f32 },
}

/// Effects produced by the rail reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RailEffect {
    NotifyHost(HostSignal),
    /// The resolved rail width changed; the window should follow.
    ResizeWindow { width: f32 },
}
