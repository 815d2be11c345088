use super::model::ChromeAction;

/// Commands processed by the chrome widget reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeCommand {
    ObservePreScroll { delta_y: f32 },
    PressAction(ChromeAction),
}
