mod app;
mod fonts;
mod host;
mod routers;
mod theme;
mod widgets;

use env_logger::Env;
use iced::{Size, window};
use navrail_ui_rail::{font_from_theme, resolve};

use crate::app::{
    App, DEFAULT_WINDOW_HEIGHT, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

fn main() -> iced::Result {
    // Logs go to stderr; stdout carries the host protocol.
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let initial = host::storage::load_initial_render_args();
    let default_font = font_from_theme(initial.theme.as_ref());
    let nav_width = resolve(&initial.args, initial.theme.as_ref()).nav_width;
    log::info!("starting rail with default font {:?}", default_font.family);

    let glyph_font = fonts::load_glyph_font();
    let glyph_font_available = glyph_font.is_some();

    let mut application = iced::application(
        move || App::new(initial.clone(), glyph_font_available),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window(window::Settings {
        size: Size {
            width: nav_width,
            height: DEFAULT_WINDOW_HEIGHT,
        },
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        ..window::Settings::default()
    })
    .default_font(default_font)
    .subscription(App::subscription);

    if let Some(bytes) = glyph_font {
        application = application.font(bytes);
    }

    application.run()
}
