use iced::theme::Palette;
use iced::{Color, Theme};
use serde::Deserialize;

/// Hex color palette as it appears in the screen config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ColorPalette {
    pub(crate) primary: String,
    pub(crate) on_primary: String,
    pub(crate) secondary: String,
    pub(crate) on_secondary: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) on_surface: String,
    pub(crate) muted: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: String::from("#6200EE"),
            on_primary: String::from("#FFFFFF"),
            secondary: String::from("#03DAC5"),
            on_secondary: String::from("#FFFFFF"),
            background: String::from("#F5F5F5"),
            surface: String::from("#FFFFFF"),
            on_surface: String::from("#000000"),
            muted: String::from("#888888"),
        }
    }
}

impl ColorPalette {
    /// Names of entries that are not valid hex colors.
    pub(crate) fn invalid_entries(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, value)| parse_hex_color(value).is_none())
            .map(|(name, _)| name)
            .collect()
    }

    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", self.primary.as_str()),
            ("on_primary", self.on_primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("on_secondary", self.on_secondary.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("on_surface", self.on_surface.as_str()),
            ("muted", self.muted.as_str()),
        ]
    }
}

pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    value.trim().parse::<Color>().ok()
}

/// Resolved palette used by views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IcedColorPalette {
    pub(crate) primary: Color,
    pub(crate) on_primary: Color,
    pub(crate) secondary: Color,
    pub(crate) on_secondary: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) on_surface: Color,
    pub(crate) muted: Color,
    pub(crate) shadow: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let fallback = ColorPalette::default();
        let resolve = |value: &str, default: &str| {
            parse_hex_color(value)
                .or_else(|| parse_hex_color(default))
                .unwrap_or(Color::BLACK)
        };

        Self {
            primary: resolve(&p.primary, &fallback.primary),
            on_primary: resolve(&p.on_primary, &fallback.on_primary),
            secondary: resolve(&p.secondary, &fallback.secondary),
            on_secondary: resolve(&p.on_secondary, &fallback.on_secondary),
            background: resolve(&p.background, &fallback.background),
            surface: resolve(&p.surface, &fallback.surface),
            on_surface: resolve(&p.on_surface, &fallback.on_surface),
            muted: resolve(&p.muted, &fallback.muted),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.on_surface,
            primary: palette.primary,
            success: palette.secondary,
            warning: palette.secondary,
            danger: Color::from_rgb8(0xB0, 0x00, 0x20),
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a config palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub(crate) fn with_overrides(self, overrides: StyleOverrides) -> Self {
        Self {
            overrides: Some(overrides),
            ..self
        }
    }
}

/// Owns the active theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(palette: &ColorPalette) -> Self {
        Self {
            current: AppTheme::from_palette(String::from("notebar"), palette),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{AppTheme, ColorPalette, IcedColorPalette, parse_hex_color};

    #[test]
    fn given_default_palette_when_validating_then_all_entries_parse() {
        assert!(ColorPalette::default().invalid_entries().is_empty());
    }

    #[test]
    fn given_bad_entries_when_validating_then_their_names_are_reported() {
        let palette = ColorPalette {
            primary: String::from("purple-ish"),
            muted: String::from("#12"),
            ..ColorPalette::default()
        };

        assert_eq!(palette.invalid_entries(), vec!["primary", "muted"]);
    }

    #[test]
    fn given_padded_hex_when_parsing_then_color_is_decoded() {
        let color = parse_hex_color("  #6200EE \n");

        assert_eq!(
            color.map(Color::into_rgba8),
            Some([0x62, 0x00, 0xEE, 0xFF])
        );
    }

    #[test]
    fn given_non_hex_text_when_parsing_then_none_is_returned() {
        assert_eq!(parse_hex_color("purple-ish"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn given_bad_entry_when_resolving_then_default_color_is_used() {
        let palette = ColorPalette {
            secondary: String::from("nope"),
            ..ColorPalette::default()
        };

        let resolved = IcedColorPalette::from(&palette);
        assert_eq!(resolved.secondary, Color::from_rgb8(0x03, 0xDA, 0xC5));
    }

    #[test]
    fn given_app_theme_when_converting_then_primary_is_carried_over() {
        let theme = AppTheme::default();
        let iced_theme = iced::Theme::from(&theme);

        assert_eq!(
            iced_theme.palette().primary,
            theme.iced_palette().primary
        );
    }
}
