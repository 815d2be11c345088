use iced::widget::{column, container, row, svg, text};
use iced::{Border, Element, Length, Shadow, Vector, alignment};

use super::super::model::{Avatar, NoteCard};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const CARD_HEIGHT: f32 = 100.0;
const CARD_OUTER_VERTICAL_PADDING: f32 = 5.0;
const CARD_OUTER_HORIZONTAL_PADDING: f32 = 10.0;
const CARD_INNER_PADDING: f32 = 10.0;
const CARD_RADIUS: f32 = 10.0;
const CARD_SHADOW_BLUR: f32 = 10.0;
const AVATAR_SIZE: f32 = 60.0;
const AVATAR_TEXT_SPACING: f32 = 10.0;
const TITLE_BODY_SPACING: f32 = 4.0;
const PLACEHOLDER_ALPHA: f32 = 0.3;

/// Props for rendering a single note card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoteCardProps<'a> {
    pub(crate) card: &'a NoteCard,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a note card: round avatar, bold title and a muted body line.
pub(crate) fn view<'a, Message: 'a>(
    props: NoteCardProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let surface = palette.surface;
    let shadow_color = palette.shadow;
    let placeholder_background = iced::Color {
        a: PLACEHOLDER_ALPHA,
        ..palette.secondary
    };

    let avatar: Element<'a, Message> = match props.card.avatar() {
        Avatar::Svg(bytes) => svg::Svg::new(svg::Handle::from_memory(bytes))
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .into(),
        Avatar::Placeholder(initial) => {
            let glyph = text(initial.to_string())
                .size(props.fonts.placeholder.size)
                .font(props.fonts.placeholder.font_type)
                .color(palette.on_surface);

            container(glyph)
                .width(Length::Fixed(AVATAR_SIZE))
                .height(Length::Fixed(AVATAR_SIZE))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(move |_| container::Style {
                    background: Some(placeholder_background.into()),
                    border: Border::default().rounded(AVATAR_SIZE / 2.0),
                    ..Default::default()
                })
                .into()
        },
    };

    let title = text(props.card.title())
        .size(props.fonts.card_title.size)
        .font(props.fonts.card_title.font_type)
        .color(palette.on_surface);
    let body = text(props.card.body())
        .size(props.fonts.card_body.size)
        .font(props.fonts.card_body.font_type)
        .color(palette.muted);

    let content = row![
        avatar,
        column![title, body]
            .spacing(TITLE_BODY_SPACING)
            .width(Length::Fill),
    ]
    .spacing(AVATAR_TEXT_SPACING)
    .align_y(alignment::Vertical::Center);

    let card = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CARD_INNER_PADDING)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(surface.into()),
            border: Border::default().rounded(CARD_RADIUS),
            shadow: Shadow {
                color: shadow_color,
                offset: Vector::new(0.0, 2.0),
                blur_radius: CARD_SHADOW_BLUR,
            },
            ..Default::default()
        });

    container(card)
        .width(Length::Fill)
        .height(Length::Fixed(CARD_HEIGHT))
        .padding([CARD_OUTER_VERTICAL_PADDING, CARD_OUTER_HORIZONTAL_PADDING])
        .into()
}
