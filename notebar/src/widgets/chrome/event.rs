use super::model::ChromeAction;

/// UI events emitted by chrome views and the list observer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Vertical scroll intent seen before the note list consumed it.
    PreScrolled { delta_y: f32 },
    ActionPressed(ChromeAction),
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChromeEffect {
    VisibilityChanged { hidden: bool },
    /// A placeholder control was pressed; nothing is bound to it.
    PlaceholderPressed { action: ChromeAction },
}
