use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeCommand, ChromeEffect, ChromeEvent};

/// Route a chrome UI event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    let command = map_chrome_event_to_command(event);
    app.widgets
        .chrome
        .reduce(command)
        .map(AppEvent::ChromeEffect)
}

/// Route a chrome effect event to an app-level task.
pub(crate) fn route_effect(effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::VisibilityChanged { hidden } => {
            log::debug!("bottom chrome hidden: {hidden}");
            Task::none()
        },
        ChromeEffect::PlaceholderPressed { action } => {
            log::debug!("placeholder control pressed: {action:?}");
            Task::none()
        },
    }
}

fn map_chrome_event_to_command(event: ChromeEvent) -> ChromeCommand {
    match event {
        ChromeEvent::PreScrolled { delta_y } => {
            ChromeCommand::ObservePreScroll { delta_y }
        },
        ChromeEvent::ActionPressed(action) => ChromeCommand::PressAction(action),
    }
}

#[cfg(test)]
mod tests {
    use super::map_chrome_event_to_command;
    use crate::widgets::chrome::model::ChromeAction;
    use crate::widgets::chrome::{ChromeCommand, ChromeEvent};

    #[test]
    fn given_pre_scroll_event_when_mapping_then_delta_is_forwarded() {
        let command = map_chrome_event_to_command(ChromeEvent::PreScrolled {
            delta_y: -12.5,
        });

        assert!(matches!(
            command,
            ChromeCommand::ObservePreScroll { delta_y } if delta_y == -12.5
        ));
    }

    #[test]
    fn given_action_press_when_mapping_then_action_is_forwarded() {
        let command = map_chrome_event_to_command(ChromeEvent::ActionPressed(
            ChromeAction::Drawing,
        ));

        assert!(matches!(
            command,
            ChromeCommand::PressAction(ChromeAction::Drawing)
        ));
    }
}
