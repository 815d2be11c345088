use iced::widget::{container, text};
use iced::{Element, Length, Shadow, Vector, alignment};

use crate::shared::ui::fonts::UiFont;
use crate::shared::ui::theme::ThemeProps;

const TITLE_BAR_HEIGHT: f32 = 56.0;
const TITLE_BAR_HORIZONTAL_PADDING: f32 = 16.0;
const TITLE_BAR_SHADOW_BLUR: f32 = 4.0;

/// Props for rendering the screen title bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TitleBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) font: &'a UiFont,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the title bar with a centered title.
pub(crate) fn view<'a, Message: 'a>(
    props: TitleBarProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.primary;
    let shadow_color = palette.shadow;

    let title = text(props.title)
        .size(props.font.size)
        .font(props.font.font_type)
        .color(palette.on_primary);

    container(title)
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT))
        .padding([0.0, TITLE_BAR_HORIZONTAL_PADDING])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            shadow: Shadow {
                color: shadow_color,
                offset: Vector::new(0.0, 2.0),
                blur_radius: TITLE_BAR_SHADOW_BLUR,
            },
            ..Default::default()
        })
        .into()
}
