use iced::Font;
use iced::font::Weight;

#[derive(Debug, Clone)]
pub(crate) struct UiFont {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl UiFont {
    fn regular(size: f32) -> Self {
        Self {
            font_type: Font::default(),
            size,
        }
    }

    fn bold(size: f32) -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            size,
        }
    }
}

/// Text styles used across the screen.
#[derive(Debug, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) title: UiFont,
    pub(crate) card_title: UiFont,
    pub(crate) card_body: UiFont,
    pub(crate) placeholder: UiFont,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            title: UiFont::regular(20.0),
            card_title: UiFont::bold(16.0),
            card_body: UiFont::regular(12.0),
            placeholder: UiFont::bold(24.0),
        }
    }
}
