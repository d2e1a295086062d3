use std::time::{Duration, Instant};

use iced::{Color, Shadow, Vector};

use crate::config::EffectiveConfig;
use crate::style::{lerp, mix, parse_color, parse_radius};

/// Uniform scale applied to a hovered, inactive tile.
pub const HOVER_SCALE: f32 = 1.1;
/// Duration of a state-to-state transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

const HOVER_SHADOW_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.2,
};
const HOVER_SHADOW_OFFSET: Vector = Vector { x: 0.0, y: 4.0 };
const HOVER_SHADOW_BLUR: f32 = 8.0;

/// Mutually exclusive visual states of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Idle,
    Hovered,
    Active,
}

/// Pick the visual state; active wins over hovered, hovered over idle.
pub fn visual_state(is_active: bool, is_hovered: bool) -> VisualState {
    if is_active {
        VisualState::Active
    } else if is_hovered {
        VisualState::Hovered
    } else {
        VisualState::Idle
    }
}

/// Concrete drawing parameters of one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    /// Glyph color, `None` when the configured color does not parse.
    pub icon_color: Option<Color>,
    pub background: Color,
    pub radius: f32,
    pub scale: f32,
    pub shadow: Shadow,
}

impl TileStyle {
    /// Resolve the style for `state` from the effective configuration.
    pub fn resolve(state: VisualState, config: &EffectiveConfig) -> Self {
        let (icon, background, radius) = match state {
            VisualState::Active => (
                &config.active_icon_color,
                &config.active_background_color,
                &config.active_border_radius,
            ),
            VisualState::Hovered => (
                &config.hover_icon_color,
                &config.hover_background_color,
                &config.hover_border_radius,
            ),
            VisualState::Idle => (
                &config.icon_color,
                &config.background_color,
                &config.border_radius,
            ),
        };

        let hovered = state == VisualState::Hovered;

        Self {
            icon_color: parse_color(icon),
            background: parse_color(background).unwrap_or(Color::TRANSPARENT),
            radius: parse_radius(radius, config.icon_size, config.font_size)
                .unwrap_or(0.0),
            scale: if hovered { HOVER_SCALE } else { 1.0 },
            shadow: if hovered {
                Shadow {
                    color: HOVER_SHADOW_COLOR,
                    offset: HOVER_SHADOW_OFFSET,
                    blur_radius: HOVER_SHADOW_BLUR,
                }
            } else {
                Shadow::default()
            },
        }
    }

    fn interpolate(&self, to: &Self, t: f32) -> Self {
        let icon_color = match (self.icon_color, to.icon_color) {
            (Some(from), Some(to)) => Some(mix(from, to, t)),
            (_, to) => to,
        };

        Self {
            icon_color,
            background: mix(self.background, to.background, t),
            radius: lerp(self.radius, to.radius, t),
            scale: lerp(self.scale, to.scale, t),
            shadow: Shadow {
                color: mix(self.shadow.color, to.shadow.color, t),
                offset: Vector::new(
                    lerp(self.shadow.offset.x, to.shadow.offset.x, t),
                    lerp(self.shadow.offset.y, to.shadow.offset.y, t),
                ),
                blur_radius: lerp(
                    self.shadow.blur_radius,
                    to.shadow.blur_radius,
                    t,
                ),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: TileStyle,
    started_at: Instant,
}

/// Per-button interaction state: the hover flag plus the running transition.
#[derive(Debug, Clone, Default)]
pub struct NavButtonState {
    hovered: bool,
    shown: Option<VisualState>,
    transition: Option<Transition>,
}

impl NavButtonState {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered the tile.
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the tile.
    pub fn pointer_left(&mut self) {
        self.hovered = false;
    }

    /// Visual state for the given activity, honouring precedence.
    pub fn visual_state(&self, is_active: bool) -> VisualState {
        visual_state(is_active, self.hovered)
    }

    /// Start a transition if the visual state changed since the last sync.
    ///
    /// The first sync after creation snaps to the target without animating.
    pub(crate) fn sync(
        &mut self,
        is_active: bool,
        config: &EffectiveConfig,
        now: Instant,
    ) {
        let target = self.visual_state(is_active);
        match self.shown {
            Some(shown) if shown != target => {
                let from = self.style_for(shown, config, now);
                self.transition = Some(Transition {
                    from,
                    started_at: now,
                });
            },
            Some(_) => {},
            None => self.transition = None,
        }
        self.shown = Some(target);
    }

    /// Style to draw at `now`, eased between the previous and current state.
    pub fn style(
        &self,
        is_active: bool,
        config: &EffectiveConfig,
        now: Instant,
    ) -> TileStyle {
        let state = self.shown.unwrap_or(self.visual_state(is_active));
        self.style_for(state, config, now)
    }

    /// Whether a transition is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .map(|transition| progress(transition.started_at, now) < 1.0)
            .unwrap_or(false)
    }

    fn style_for(
        &self,
        state: VisualState,
        config: &EffectiveConfig,
        now: Instant,
    ) -> TileStyle {
        let target = TileStyle::resolve(state, config);
        match self.transition {
            Some(transition) => {
                let t = progress(transition.started_at, now);
                if t >= 1.0 {
                    target
                } else {
                    transition.from.interpolate(&target, ease_out(t))
                }
            },
            None => target,
        }
    }
}

fn progress(started_at: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started_at);
    (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).min(1.0)
}

/// Cubic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
