pub(crate) mod chrome;
pub(crate) mod notes;

pub(crate) struct Widgets {
    pub(crate) chrome: chrome::ChromeWidget,
    pub(crate) notes: notes::NotesWidget,
}
