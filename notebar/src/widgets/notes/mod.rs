pub(crate) mod model;
pub(crate) mod view;

use model::{NoteCard, NotesViewModel, sample_cards};

/// Notes widget holding the static card list.
pub(crate) struct NotesWidget {
    cards: Vec<NoteCard>,
}

impl NotesWidget {
    /// Create the widget with `count` sample cards.
    pub(crate) fn new(count: usize) -> Self {
        let cards = sample_cards(count);

        if let Some(card) = cards.iter().find(|card| {
            matches!(card.avatar(), model::Avatar::Placeholder(_))
        }) {
            log::warn!(
                "note image asset `{}` is missing, rendering placeholder",
                card.image()
            );
        }

        Self { cards }
    }

    /// Produce the notes view model for rendering.
    pub(crate) fn vm(&self) -> NotesViewModel<'_> {
        NotesViewModel { cards: &self.cards }
    }
}
