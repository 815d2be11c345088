use iced::widget::{Space, container, row};
use iced::{Element, Length, Shadow, Vector, alignment};
use notebar_ui_scroll::translate;

use super::super::event::ChromeEvent;
use super::super::model::{ChromeAction, ChromeViewModel};
use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::shared::ui::icons::{BRUSH, CHECK_BOX, IMAGE, MIC_NONE};
use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

const BOTTOM_BAR_BUTTON_SIZE: f32 = 48.0;
const BOTTOM_BAR_ICON_SIZE: f32 = 24.0;
const BOTTOM_BAR_HORIZONTAL_PADDING: f32 = 4.0;
const BOTTOM_BAR_SPACING: f32 = 4.0;
const BOTTOM_BAR_SHADOW_BLUR: f32 = 8.0;

const BOTTOM_BAR_ACTIONS: [(ChromeAction, &[u8]); 4] = [
    (ChromeAction::Checklist, CHECK_BOX),
    (ChromeAction::Drawing, BRUSH),
    (ChromeAction::VoiceNote, MIC_NONE),
    (ChromeAction::ImageNote, IMAGE),
];

/// Props for rendering the bottom bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BottomBarProps<'a> {
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the bottom bar, shifted down by the shared chrome translation.
pub(crate) fn view<'a>(props: BottomBarProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.primary;
    let shadow_color = palette.shadow;
    let on_bar = props.theme.with_overrides(StyleOverrides {
        background: None,
        foreground: Some(palette.on_primary),
    });

    let buttons = BOTTOM_BAR_ACTIONS.iter().map(|&(action, icon)| {
        icon_button_view(IconButtonProps {
            icon,
            theme: on_bar,
            size: BOTTOM_BAR_BUTTON_SIZE,
            icon_size: BOTTOM_BAR_ICON_SIZE,
        })
        .map(move |_| ChromeEvent::ActionPressed(action))
    });

    let controls = row(buttons)
        .push(Space::new().width(Length::Fill))
        .spacing(BOTTOM_BAR_SPACING)
        .align_y(alignment::Vertical::Center);

    let bar = container(controls)
        .width(Length::Fill)
        .height(Length::Fixed(props.vm.bar_height))
        .padding([0.0, BOTTOM_BAR_HORIZONTAL_PADDING])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            shadow: Shadow {
                color: shadow_color,
                offset: Vector::new(0.0, -1.0),
                blur_radius: BOTTOM_BAR_SHADOW_BLUR,
            },
            ..Default::default()
        });

    translate(bar, props.vm.translation_y).into()
}
