use iced::Task;

use super::command::ChromeCommand;
use super::event::ChromeEffect;
use super::state::ChromeState;

/// Reduce a chrome command into state mutation and effect tasks.
pub(super) fn reduce(
    state: &mut ChromeState,
    command: ChromeCommand,
) -> Task<ChromeEffect> {
    match command {
        ChromeCommand::ObservePreScroll { delta_y } => {
            let was_hidden = state.is_hidden();
            state.observe_pre_scroll(delta_y);

            match visibility_change(was_hidden, state.is_hidden()) {
                Some(effect) => Task::done(effect),
                None => Task::none(),
            }
        },
        ChromeCommand::PressAction(action) => {
            Task::done(ChromeEffect::PlaceholderPressed { action })
        },
    }
}

fn visibility_change(was_hidden: bool, is_hidden: bool) -> Option<ChromeEffect> {
    (was_hidden != is_hidden)
        .then_some(ChromeEffect::VisibilityChanged { hidden: is_hidden })
}
