mod event;
mod reducer;
pub(crate) mod view;

pub(crate) use event::{RailEffect, RailIntent};
use navrail_ui_rail::{EffectiveConfig, NavRail};
pub(crate) use reducer::RailCtx;

use crate::host::RenderArgs;

/// Navigation rail widget owning its private state.
pub(crate) struct RailWidget {
    rail: NavRail,
}

impl RailWidget {
    /// Construct the rail from the first render inputs.
    pub(crate) fn new(args: RenderArgs) -> Self {
        Self {
            rail: NavRail::new(args.args, args.theme),
        }
    }

    /// Reduce an intent into state updates and at most one host effect.
    pub(crate) fn reduce(
        &mut self,
        intent: RailIntent,
        ctx: &RailCtx,
    ) -> Option<RailEffect> {
        reducer::reduce(&mut self.rail, intent, ctx)
    }

    /// Record whether the glyph font was registered at startup.
    pub(crate) fn set_glyph_font_available(&mut self, available: bool) {
        self.rail.set_glyph_font_available(available);
    }

    /// Return read-only access to the rail state for rendering.
    pub(crate) fn rail(&self) -> &NavRail {
        &self.rail
    }

    pub(crate) fn effective(&self) -> &EffectiveConfig {
        self.rail.effective()
    }

    /// Return whether a tile transition is still running at `now`.
    pub(crate) fn is_animating(&self, now: std::time::Instant) -> bool {
        self.rail.is_animating(now)
    }
}
