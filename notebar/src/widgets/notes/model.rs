use crate::shared::ui::icons::image_asset;

pub(crate) const SAMPLE_IMAGE: &str = "cat";
pub(crate) const SAMPLE_TITLE: &str = "Sample Test";
pub(crate) const SAMPLE_BODY: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting industry.";

/// A static note card shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoteCard {
    image: String,
    title: String,
    body: String,
}

impl NoteCard {
    pub(crate) fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Name of the embedded image asset.
    pub(crate) fn image(&self) -> &str {
        &self.image
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn body(&self) -> &str {
        &self.body
    }

    /// Resolve the avatar to render, falling back to the title's initial
    /// when the image asset is unknown.
    pub(crate) fn avatar(&self) -> Avatar {
        match image_asset(&self.image) {
            Some(bytes) => Avatar::Svg(bytes),
            None => Avatar::Placeholder(title_initial(&self.title)),
        }
    }
}

/// Avatar content of a note card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Avatar {
    Svg(&'static [u8]),
    Placeholder(char),
}

/// View model for the notes widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotesViewModel<'a> {
    pub(crate) cards: &'a [NoteCard],
}

/// Build `count` identical sample cards.
pub(crate) fn sample_cards(count: usize) -> Vec<NoteCard> {
    (0..count)
        .map(|_| NoteCard::new(SAMPLE_IMAGE, SAMPLE_TITLE, SAMPLE_BODY))
        .collect()
}

fn title_initial(title: &str) -> char {
    title
        .chars()
        .find(|ch| !ch.is_whitespace())
        .and_then(|ch| ch.to_uppercase().next())
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::{Avatar, NoteCard, SAMPLE_BODY, SAMPLE_TITLE, sample_cards};
    use crate::shared::ui::icons::AVATAR_CAT;

    #[test]
    fn given_count_when_building_samples_then_every_card_is_identical() {
        let cards = sample_cards(20);

        assert_eq!(cards.len(), 20);
        assert!(cards.iter().all(|card| {
            card.title() == SAMPLE_TITLE && card.body() == SAMPLE_BODY
        }));
    }

    #[test]
    fn given_zero_count_when_building_samples_then_list_is_empty() {
        assert!(sample_cards(0).is_empty());
    }

    #[test]
    fn given_known_image_when_resolving_avatar_then_svg_is_used() {
        let card = NoteCard::new("cat", "Sample Test", "body");

        assert_eq!(card.avatar(), Avatar::Svg(AVATAR_CAT));
    }

    #[test]
    fn given_missing_image_when_resolving_avatar_then_title_initial_is_used() {
        let card = NoteCard::new("dog", "  groceries", "body");

        assert_eq!(card.avatar(), Avatar::Placeholder('G'));
    }

    #[test]
    fn given_missing_image_and_blank_title_when_resolving_avatar_then_fallback_glyph_is_used()
     {
        let card = NoteCard::new("dog", "", "body");

        assert_eq!(card.avatar(), Avatar::Placeholder('?'));
    }
}
