#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Task, Theme};

use crate::config::ScreenConfig;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeWidget};
use crate::widgets::notes::NotesWidget;

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 400.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Chrome widget
    ChromeUi(ChromeEvent),
    ChromeEffect(ChromeEffect),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: ScreenConfig,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = ScreenConfig::load();
        let theme_manager = ThemeManager::new(&config.palette);

        let widgets = Widgets {
            chrome: ChromeWidget::new(
                config.bar_height(),
                config.hide_distance(),
                config.density(),
            ),
            notes: NotesWidget::new(config.note_count),
        };

        let app = App {
            config,
            theme_manager,
            fonts: FontsConfig::default(),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
