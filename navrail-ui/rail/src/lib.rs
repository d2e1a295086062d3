//! Vertical navigation rail of icon buttons for [`iced`].
//!
//! The crate is split into two layers:
//! - state helpers ([`NavRail`], [`NavButtonState`], [`resolve`]) that own
//!   configuration resolution, selection and hover state without touching the
//!   renderer;
//! - a view helper ([`view`]) that draws the rail and reports pointer events
//!   as [`NavRailEvent`]s.
//!
//! Feed every [`NavRailEvent`] back into [`NavRail::update`] and forward the
//! returned [`HostSignal`] to whatever embeds the rail.
//!
//! # Quick Example
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use iced::Element;
//! use navrail_ui_rail::{HostSignal, NavConfig, NavRail, NavRailEvent};
//!
//! struct State {
//!     rail: NavRail,
//! }
//!
//! fn update(state: &mut State, event: NavRailEvent) {
//!     if let Some(HostSignal::Value(page)) =
//!         state.rail.update(event, Instant::now())
//!     {
//!         println!("selected {page}");
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, NavRailEvent> {
//!     navrail_ui_rail::view(&state.rail, Instant::now())
//! }
//!
//! let state = State {
//!     rail: NavRail::new(NavConfig::default(), None),
//! };
//! ```

mod button;
mod config;
mod glyph;
mod rail;
mod style;
mod view;

pub use button::{
    HOVER_SCALE, NavButtonState, TRANSITION_DURATION, TileStyle, VisualState,
    visual_state,
};
pub use config::{
    EffectiveConfig, HostTheme, NavConfig, Page, default_pages,
    font_from_theme, resolve,
};
pub use glyph::{
    DEFAULT_GLYPH, GLYPH_FONT, GLYPH_FONT_FILE, Glyph, GlyphCatalog, IconFamily, catalog,
    resolve as resolve_glyph,
};
pub use rail::{
    HostSignal, NavRail, NavRailEvent, RAIL_VERTICAL_PADDING, TileLabel,
    slot_size, slot_spacing,
};
pub use style::{parse_color, parse_radius};
pub use view::view;
