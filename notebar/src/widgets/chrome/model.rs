/// Controls hosted by the bottom chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromeAction {
    Checklist,
    Drawing,
    VoiceNote,
    ImageNote,
    AddNote,
}

/// View model for the chrome widget.
///
/// The bottom bar and the action button render from the same instance, so
/// both always apply the same translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChromeViewModel {
    pub(crate) translation_y: f32,
    pub(crate) bar_height: f32,
}
