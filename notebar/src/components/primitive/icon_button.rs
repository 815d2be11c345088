use iced::widget::{button, container, svg};
use iced::{Border, Element, Length, alignment};

use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

const ICON_BUTTON_PADDING: f32 = 0.0;
const ICON_HOVER_ALPHA: f32 = 0.12;

/// Render a square icon button, tinted for the surface it sits on.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_icon_colors(
        palette.on_surface,
        palette.primary,
        props.theme.overrides,
    );
    let hover_background = props
        .theme
        .overrides
        .and_then(|o| o.background)
        .unwrap_or(iced::Color {
            a: ICON_HOVER_ALPHA,
            ..hover_color
        });
    let radius = props.size / 2.0;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background: Option<iced::Background> = matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            )
            .then_some(hover_background.into());

            button::Style {
                background,
                border: Border::default().rounded(radius),
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_icon_colors(
    default_base: iced::Color,
    accent: iced::Color,
    overrides: Option<StyleOverrides>,
) -> (iced::Color, iced::Color) {
    if let Some(color) = overrides.and_then(|o| o.foreground) {
        return (color, color);
    }

    (default_base, accent)
}
