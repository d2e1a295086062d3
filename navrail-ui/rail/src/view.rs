use std::time::Instant;

use iced::widget::{Column, container, mouse_area, text};
use iced::{Border, Color, Element, Length, Padding, alignment, mouse};

use crate::button::TileStyle;
use crate::glyph::GLYPH_FONT;
use crate::rail::{
    NavRail, NavRailEvent, RAIL_VERTICAL_PADDING, TileLabel, slot_size,
    slot_spacing,
};
use crate::style::parse_color;

/// Render the rail as drawn at `now`.
///
/// Slot and spacing come from [`slot_size`] and [`slot_spacing`], the same
/// values [`NavRail::content_height`] measures.
pub fn view(rail: &NavRail, now: Instant) -> Element<'_, NavRailEvent> {
    let config = rail.effective();
    let slot = slot_size(config);
    let spacing = slot_spacing(config);
    let rail_text = parse_color(&config.icon_color);
    let rail_background = parse_color(&config.background_color);

    let buttons = (0..config.pages.len()).filter_map(|index| {
        let style = rail.tile_style(index, now)?;
        let label = rail.tile_label(index)?;
        Some(nav_button(
            index,
            label,
            style,
            slot,
            config.icon_size,
            config.font_size,
            rail_text,
        ))
    });

    let column = Column::with_children(buttons)
        .spacing(spacing)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(Padding {
            top: RAIL_VERTICAL_PADDING,
            right: 0.0,
            bottom: RAIL_VERTICAL_PADDING,
            left: 0.0,
        });

    container(column)
        .width(Length::Fixed(config.nav_width))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: rail_background.map(Into::into),
            text_color: rail_text,
            ..Default::default()
        })
        .into()
}

fn nav_button<'a>(
    index: usize,
    label: TileLabel,
    style: TileStyle,
    slot: f32,
    icon_size: f32,
    font_size: f32,
    fallback_color: Option<Color>,
) -> Element<'a, NavRailEvent> {
    let side = icon_size * style.scale;
    let icon_color = style.icon_color.or(fallback_color);

    let mut label = match label {
        TileLabel::Glyph(glyph) => text(glyph.text()).font(GLYPH_FONT),
        TileLabel::Initial(initial) => text(initial),
    }
    .size(font_size * style.scale);
    if let Some(color) = icon_color {
        label = label.color(color);
    }

    let tile = container(label)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(style.background.into()),
            border: Border {
                radius: (style.radius * style.scale).into(),
                ..Border::default()
            },
            shadow: style.shadow,
            ..Default::default()
        });

    let area = mouse_area(tile)
        .on_press(NavRailEvent::Pressed(index))
        .on_enter(NavRailEvent::Entered(index))
        .on_exit(NavRailEvent::Exited(index))
        .interaction(mouse::Interaction::Pointer);

    container(area)
        .width(Length::Fixed(slot))
        .height(Length::Fixed(slot))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
