#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::time::Instant;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::host::{
    HostBridge, InboundMessage, RenderArgs, StdoutBridge,
};
use crate::theme::iced_theme;
use crate::widgets::rail::{RailIntent, RailWidget};

pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 24.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Rail widget
    Rail(RailIntent),
    // Host protocol
    Host(InboundMessage),
    // Direct operations
    Frame(Instant),
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) rail: RailWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) window_size: Size,
    pub(crate) host: Box<dyn HostBridge>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(
        args: RenderArgs,
        glyph_font_available: bool,
    ) -> (Self, Task<AppEvent>) {
        let mut app = Self::with_bridge(args, Box::new(StdoutBridge));
        app.widgets
            .rail
            .set_glyph_font_available(glyph_font_available);
        (app, Task::done(AppEvent::IcedReady))
    }

    /// Build the application around an explicit host bridge.
    pub(crate) fn with_bridge(
        args: RenderArgs,
        host: Box<dyn HostBridge>,
    ) -> Self {
        let rail = RailWidget::new(args);
        let window_size = Size {
            width: rail.effective().nav_width,
            height: DEFAULT_WINDOW_HEIGHT,
        };

        Self {
            window_size,
            host,
            widgets: Widgets { rail },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("NavRail")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        iced_theme(self.widgets.rail.effective())
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        view::view(self)
    }
}
