use iced::widget::{button, container, svg};
use iced::{Border, Color, Element, Length, Padding, Shadow, Vector, alignment};
use notebar_ui_scroll::translate;

use super::super::event::ChromeEvent;
use super::super::model::{ChromeAction, ChromeViewModel};
use crate::shared::ui::icons::ADD;
use crate::shared::ui::theme::ThemeProps;

const ACTION_BUTTON_SIZE: f32 = 56.0;
const ACTION_BUTTON_ICON_SIZE: f32 = 24.0;
const ACTION_BUTTON_END_MARGIN: f32 = 16.0;
const ACTION_BUTTON_SHADOW_BLUR: f32 = 6.0;
const ACTION_BUTTON_PRESSED_ALPHA: f32 = 0.8;

/// Props for rendering the floating action button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionButtonProps<'a> {
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the floating action button docked on the bottom bar's top edge.
///
/// Fills the available area and anchors the button bottom-end, so it is
/// meant to be stacked over the screen content.
pub(crate) fn view<'a>(
    props: ActionButtonProps<'a>,
) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.secondary;
    let foreground = palette.on_secondary;
    let shadow_color = palette.shadow;

    let icon = svg::Svg::new(svg::Handle::from_memory(ADD))
        .width(Length::Fixed(ACTION_BUTTON_ICON_SIZE))
        .height(Length::Fixed(ACTION_BUTTON_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(foreground),
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let action_button = button(icon_container)
        .on_press(ChromeEvent::ActionPressed(ChromeAction::AddNote))
        .padding(0.0)
        .width(Length::Fixed(ACTION_BUTTON_SIZE))
        .height(Length::Fixed(ACTION_BUTTON_SIZE))
        .style(move |_, status| {
            let background = match status {
                button::Status::Pressed => Color {
                    a: ACTION_BUTTON_PRESSED_ALPHA,
                    ..background
                },
                _ => background,
            };

            button::Style {
                background: Some(background.into()),
                text_color: foreground,
                border: Border::default().rounded(ACTION_BUTTON_SIZE / 2.0),
                shadow: Shadow {
                    color: shadow_color,
                    offset: Vector::new(0.0, 3.0),
                    blur_radius: ACTION_BUTTON_SHADOW_BLUR,
                },
                ..button::Style::default()
            }
        });

    container(translate(action_button, props.vm.translation_y))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            top: 0.0,
            right: ACTION_BUTTON_END_MARGIN,
            bottom: docked_bottom_inset(props.vm.bar_height),
            left: 0.0,
        })
        .into()
}

/// Distance from the screen bottom to the button's bottom edge when its
/// centre sits on the bar's top edge.
fn docked_bottom_inset(bar_height: f32) -> f32 {
    (bar_height - ACTION_BUTTON_SIZE / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::{ACTION_BUTTON_SIZE, docked_bottom_inset};

    #[test]
    fn given_bar_taller_than_half_button_when_docking_then_centre_meets_bar_edge()
     {
        assert_eq!(docked_bottom_inset(55.0), 27.0);
    }

    #[test]
    fn given_short_bar_when_docking_then_inset_never_goes_negative() {
        assert_eq!(docked_bottom_inset(10.0), 0.0);
    }

    #[test]
    fn given_translation_equal_to_bar_height_when_docked_then_button_is_still_partly_visible()
     {
        let bar_height = 55.0;
        let translation_y = bar_height;

        let top_above_window_bottom =
            docked_bottom_inset(bar_height) + ACTION_BUTTON_SIZE - translation_y;

        assert_eq!(top_above_window_bottom, 28.0);
    }
}
