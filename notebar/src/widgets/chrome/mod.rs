mod command;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use command::ChromeCommand;
pub(crate) use event::{ChromeEffect, ChromeEvent};
use iced::Task;
use model::ChromeViewModel;
use notebar_ui_scroll::{Density, Dp};
use state::ChromeState;

/// Chrome widget owning the scroll-linked offset of the bottom bar and the
/// floating action button.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    /// Create the chrome widget at rest.
    ///
    /// The hide distance is fixed for the widget's lifetime.
    pub(crate) fn new(bar_height: Dp, hide_distance: Dp, density: Density) -> Self {
        Self {
            state: ChromeState::new(bar_height, hide_distance, density),
        }
    }

    /// Reduce a chrome command into state updates and effects.
    pub(crate) fn reduce(&mut self, command: ChromeCommand) -> Task<ChromeEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            translation_y: self.state.translation_y(),
            bar_height: self.state.bar_height(),
        }
    }
}
