use iced::theme::Palette;
use iced::{Color, Theme};
use navrail_ui_rail::{EffectiveConfig, parse_color};

const THEME_NAME: &str = "navrail";

/// Build the window theme from the resolved rail colors.
pub(crate) fn iced_theme(config: &EffectiveConfig) -> Theme {
    Theme::custom(String::from(THEME_NAME), palette(config))
}

fn palette(config: &EffectiveConfig) -> Palette {
    let fallback = Palette::DARK;
    let pick = |value: &str, default: Color| {
        parse_color(value).unwrap_or(default)
    };

    Palette {
        background: pick(&config.background_color, fallback.background),
        text: pick(&config.icon_color, fallback.text),
        primary: pick(&config.active_background_color, fallback.primary),
        ..fallback
    }
}
