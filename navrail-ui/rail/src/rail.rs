use std::time::Instant;

use crate::button::{HOVER_SCALE, NavButtonState, TileStyle};
use crate::config::{EffectiveConfig, HostTheme, NavConfig, resolve};
use crate::glyph::{self, Glyph};

/// Vertical inset above the first and below the last button (5rem).
pub const RAIL_VERTICAL_PADDING: f32 = 80.0;

/// Side of the square slot holding one tile, sized for the hover scale so a
/// scaled tile never pushes its neighbours.
pub fn slot_size(config: &EffectiveConfig) -> f32 {
    config.icon_size * HOVER_SCALE
}

/// Column spacing between slots: the configured gap minus the slot overhang.
pub fn slot_spacing(config: &EffectiveConfig) -> f32 {
    (config.nav_gap - (slot_size(config) - config.icon_size)).max(0.0)
}

/// Content drawn inside a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileLabel {
    /// Icon glyph, drawn with [`glyph::GLYPH_FONT`].
    Glyph(Glyph),
    /// Upper-cased first letter of the page name, drawn with the default
    /// font when the glyph font is not available.
    Initial(String),
}

/// Pointer interaction on the button at `index` in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRailEvent {
    Pressed(usize),
    Entered(usize),
    Exited(usize),
}

/// Outbound notification for the embedding host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostSignal {
    /// Rendered pixel height, sent once after the first mount.
    FrameHeight(f32),
    /// Name of the page the user selected.
    Value(String),
}

/// Navigation rail state: resolved configuration, selection and per-button
/// interaction state.
#[derive(Debug)]
pub struct NavRail {
    config: NavConfig,
    theme: Option<HostTheme>,
    effective: EffectiveConfig,
    selected: Option<String>,
    buttons: Vec<NavButtonState>,
    height_reported: bool,
    glyph_font_available: bool,
}

impl NavRail {
    pub fn new(config: NavConfig, theme: Option<HostTheme>) -> Self {
        let effective = resolve(&config, theme.as_ref());
        let buttons = vec![NavButtonState::default(); effective.pages.len()];
        let mut rail = Self {
            config,
            theme,
            effective,
            selected: None,
            buttons,
            height_reported: false,
            glyph_font_available: true,
        };
        rail.sync_buttons(Instant::now());
        rail
    }

    pub fn effective(&self) -> &EffectiveConfig {
        &self.effective
    }

    pub fn theme(&self) -> Option<&HostTheme> {
        self.theme.as_ref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn buttons(&self) -> &[NavButtonState] {
        &self.buttons
    }

    /// Record whether the glyph font is registered with the renderer.
    ///
    /// Without it tiles show the page initial instead of a missing-glyph box.
    pub fn set_glyph_font_available(&mut self, available: bool) {
        self.glyph_font_available = available;
    }

    /// Replace caller configuration and host theme, recomputing the
    /// effective configuration when either changed.
    ///
    /// Selection survives. Hover state survives for slots whose page name is
    /// unchanged and resets for slots that now show a different page.
    pub fn set_inputs(
        &mut self,
        config: NavConfig,
        theme: Option<HostTheme>,
        now: Instant,
    ) {
        if self.config == config && self.theme == theme {
            return;
        }

        let effective = resolve(&config, theme.as_ref());
        log::debug!(
            "rail configuration recomputed with {} pages",
            effective.pages.len()
        );

        let previous = std::mem::take(&mut self.buttons);
        self.buttons = effective
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let kept = self.effective.pages.get(index).filter(|old| {
                    old.name == page.name
                });
                match (kept, previous.get(index)) {
                    (Some(_), Some(state)) => state.clone(),
                    _ => NavButtonState::default(),
                }
            })
            .collect();

        self.config = config;
        self.theme = theme;
        self.effective = effective;
        self.sync_buttons(now);
    }

    /// Report the rendered height once; later calls return `None`.
    pub fn mounted(&mut self, viewport_height: f32) -> Option<HostSignal> {
        if self.height_reported {
            return None;
        }
        self.height_reported = true;
        Some(HostSignal::FrameHeight(self.rendered_height(viewport_height)))
    }

    /// Rendered height of the rail inside a viewport of the given height.
    pub fn rendered_height(&self, viewport_height: f32) -> f32 {
        viewport_height.max(self.content_height())
    }

    /// Height of the laid-out column: padding, one slot per page and the
    /// spacing between slots.
    pub fn content_height(&self) -> f32 {
        let count = self.effective.pages.len() as f32;
        let gaps = (count - 1.0).max(0.0) * slot_spacing(&self.effective);
        RAIL_VERTICAL_PADDING * 2.0 + count * slot_size(&self.effective) + gaps
    }

    /// Apply a pointer event. A press selects the page and yields the value
    /// signal for the host.
    pub fn update(
        &mut self,
        event: NavRailEvent,
        now: Instant,
    ) -> Option<HostSignal> {
        let signal = match event {
            NavRailEvent::Pressed(index) => self.select(index),
            NavRailEvent::Entered(index) => {
                if let Some(button) = self.buttons.get_mut(index) {
                    button.pointer_entered();
                }
                None
            },
            NavRailEvent::Exited(index) => {
                if let Some(button) = self.buttons.get_mut(index) {
                    button.pointer_left();
                }
                None
            },
        };
        self.sync_buttons(now);
        signal
    }

    /// Index of the active button.
    ///
    /// With duplicate page names only the first match is active.
    pub fn active_index(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.effective
            .pages
            .iter()
            .position(|page| page.name == selected)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Style of the button at `index` as drawn at `now`.
    pub fn tile_style(&self, index: usize, now: Instant) -> Option<TileStyle> {
        let is_active = self.is_active(index);
        self.buttons
            .get(index)
            .map(|button| button.style(is_active, &self.effective, now))
    }

    /// Content of the tile at `index`.
    pub fn tile_label(&self, index: usize) -> Option<TileLabel> {
        let page = self.effective.pages.get(index)?;
        if self.glyph_font_available {
            return Some(TileLabel::Glyph(glyph::resolve(page.icon.as_deref())));
        }

        let initial = page
            .name
            .chars()
            .next()
            .map(|first| first.to_uppercase().collect())
            .unwrap_or_default();
        Some(TileLabel::Initial(initial))
    }

    /// Whether any button transition is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.buttons.iter().any(|button| button.is_animating(now))
    }

    fn select(&mut self, index: usize) -> Option<HostSignal> {
        let page = self.effective.pages.get(index)?;
        log::debug!("rail page selected: {}", page.name);
        self.selected = Some(page.name.clone());
        Some(HostSignal::Value(page.name.clone()))
    }

    fn sync_buttons(&mut self, now: Instant) {
        let active = self.active_index();
        for (index, button) in self.buttons.iter_mut().enumerate() {
            button.sync(active == Some(index), &self.effective, now);
        }
    }
}
