use iced::widget::{Space, Stack, column, container};
use iced::{Element, Length, Theme};
use notebar_ui_scroll::pre_scroll;

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::chrome::view::{action_button, bottom_bar};
use crate::widgets::notes::view::{note_list, title_bar};

/// Render the root application view.
///
/// Layers, bottom to top: title bar over the observed note list, the
/// bottom bar, the floating action button. Both chrome layers read the same
/// view model, so they always share one translation.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let background = theme.iced_palette().background;

    let chrome_vm = app.widgets.chrome.vm();

    let list = note_list::view(note_list::NoteListProps {
        vm: app.widgets.notes.vm(),
        fonts: &app.fonts,
        theme: theme_props,
        bottom_inset: chrome_vm.bar_height,
    });
    let observed_list = pre_scroll(list, |delta_y| {
        AppEvent::ChromeUi(ChromeEvent::PreScrolled { delta_y })
    });

    let title = title_bar::view(title_bar::TitleBarProps {
        title: &app.config.title,
        font: &app.fonts.title,
        theme: theme_props,
    });

    let content = container(column![title, observed_list])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    let bar = bottom_bar::view(bottom_bar::BottomBarProps {
        vm: chrome_vm,
        theme: theme_props,
    })
    .map(AppEvent::ChromeUi);
    let bar_layer = column![Space::new().height(Length::Fill), bar]
        .width(Length::Fill)
        .height(Length::Fill);

    let fab_layer = action_button::view(action_button::ActionButtonProps {
        vm: chrome_vm,
        theme: theme_props,
    })
    .map(AppEvent::ChromeUi);

    Stack::with_children(vec![content.into(), bar_layer.into(), fab_layer])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
