use std::time::Instant;

use navrail_ui_rail::NavRail;

use super::event::{RailEffect, RailIntent};

/// Read-only context for rail reduction.
pub(crate) struct RailCtx {
    pub(crate) now: Instant,
}

/// Reduce a rail intent into state updates and an optional host effect.
pub(crate) fn reduce(
    rail: &mut NavRail,
    intent: RailIntent,
    ctx: &RailCtx,
) -> Option<RailEffect> {
    match intent {
        RailIntent::Pointer(event) => {
            rail.update(event, ctx.now).map(RailEffect::NotifyHost)
        },
        RailIntent::Render(args) => {
            let previous_width = rail.effective().nav_width;
            rail.set_inputs(args.args, args.theme, ctx.now);
            let width = rail.effective().nav_width;
            (width != previous_width)
                .then_some(RailEffect::ResizeWindow { width })
        },
        RailIntent::Mounted { viewport_height } => {
            rail.mounted(viewport_height).map(RailEffect::NotifyHost)
        },
    }
}
