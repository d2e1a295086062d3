use iced::widget::container;
use iced::{Element, Length};
use navrail_ui_rail::parse_color;

use super::{App, AppEvent};
use crate::widgets::rail;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let background = parse_color(&app.widgets.rail.effective().background_color);
    let content = rail::view::view(&app.widgets.rail).map(AppEvent::Rail);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: background.map(Into::into),
            ..Default::default()
        })
        .into()
}
