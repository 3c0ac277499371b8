use crate::error::{LayoutError, Result};

/// Drawing roles. Canvas pixels hold the role index; RGB values are only
/// looked up in the [`Palette`] when the canvas is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Swatch {
    Background = 0,
    Interior,
    Wall,
    Door,
    Window,
    Furniture,
    Text,
    Outline,
    Handle,
    Divider,
}

impl Swatch {
    pub const ALL: [Swatch; 10] = [
        Swatch::Background,
        Swatch::Interior,
        Swatch::Wall,
        Swatch::Door,
        Swatch::Window,
        Swatch::Furniture,
        Swatch::Text,
        Swatch::Outline,
        Swatch::Handle,
        Swatch::Divider,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Background => "background",
            Swatch::Interior => "interior",
            Swatch::Wall => "wall",
            Swatch::Door => "door",
            Swatch::Window => "window",
            Swatch::Furniture => "furniture",
            Swatch::Text => "text",
            Swatch::Outline => "outline",
            Swatch::Handle => "handle",
            Swatch::Divider => "divider",
        }
    }

    fn default_rgb(self) -> [u8; 3] {
        match self {
            Swatch::Background => [0xff, 0xff, 0xff],
            Swatch::Interior => [0xec, 0xf0, 0xf1],
            Swatch::Wall => [0x2c, 0x3e, 0x50],
            Swatch::Door => [0x8b, 0x45, 0x13],
            Swatch::Window => [0x34, 0x98, 0xdb],
            Swatch::Furniture => [0xe7, 0x4c, 0x3c],
            Swatch::Text => [0x00, 0x00, 0x00],
            Swatch::Outline => [0x00, 0x00, 0x00],
            Swatch::Handle => [0xff, 0xd7, 0x00],
            Swatch::Divider => [0xff, 0xff, 0xff],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u8>, // RGB triplets, indexed by Swatch
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = Vec::with_capacity(Swatch::ALL.len() * 3);
        for swatch in Swatch::ALL {
            colors.extend_from_slice(&swatch.default_rgb());
        }
        Self { colors }
    }
}

impl Palette {
    /// Build a palette from theme colors, keeping defaults for roles the theme
    /// leaves unset.
    pub fn from_theme(theme_palette: &crate::theme::ThemePalette) -> Result<Self> {
        let mut palette = Self::default();
        for swatch in Swatch::ALL {
            if let Some(hex) = theme_palette.get(swatch) {
                palette.set_rgb(swatch, parse_hex_color(swatch.name(), hex)?);
            }
        }
        Ok(palette)
    }

    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    pub fn get_rgb(&self, swatch: Swatch) -> (u8, u8, u8) {
        let idx = swatch.index() as usize * 3;
        (self.colors[idx], self.colors[idx + 1], self.colors[idx + 2])
    }

    /// Look up a raw canvas value. Unknown indices render as the background.
    pub fn rgb_for_index(&self, index: u8) -> [u8; 3] {
        let swatch = Swatch::from_index(index).unwrap_or(Swatch::Background);
        let (r, g, b) = self.get_rgb(swatch);
        [r, g, b]
    }

    pub fn set_rgb(&mut self, swatch: Swatch, rgb: [u8; 3]) {
        let idx = swatch.index() as usize * 3;
        self.colors[idx..idx + 3].copy_from_slice(&rgb);
    }
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(role: &'static str, value: &str) -> Result<[u8; 3]> {
    let invalid = || LayoutError::InvalidColor {
        role,
        value: value.to_string(),
    };

    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePalette;

    #[test]
    fn test_default_palette_matches_plan_colors() {
        let palette = Palette::default();
        assert_eq!(palette.get_rgb(Swatch::Wall), (0x2c, 0x3e, 0x50));
        assert_eq!(palette.get_rgb(Swatch::Door), (0x8b, 0x45, 0x13));
        assert_eq!(palette.get_rgb(Swatch::Window), (0x34, 0x98, 0xdb));
        assert_eq!(palette.get_rgb(Swatch::Furniture), (0xe7, 0x4c, 0x3c));
        assert_eq!(palette.get_rgb(Swatch::Text), (0, 0, 0));
        assert_eq!(palette.colors().len(), Swatch::ALL.len() * 3);
    }

    #[test]
    fn test_swatch_index_roundtrip() {
        for swatch in Swatch::ALL {
            assert_eq!(Swatch::from_index(swatch.index()), Some(swatch));
        }
        assert_eq!(Swatch::from_index(200), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("wall", "#2c3e50").unwrap(), [0x2c, 0x3e, 0x50]);
        assert_eq!(parse_hex_color("wall", "FFFFFF").unwrap(), [255, 255, 255]);
        assert!(parse_hex_color("wall", "#fff").is_err());
        assert!(parse_hex_color("wall", "#gg0000").is_err());
    }

    #[test]
    fn test_theme_overrides_only_named_roles() {
        let theme = ThemePalette {
            wall: Some("#112233".to_string()),
            ..Default::default()
        };
        let palette = Palette::from_theme(&theme).unwrap();
        assert_eq!(palette.get_rgb(Swatch::Wall), (0x11, 0x22, 0x33));
        assert_eq!(palette.get_rgb(Swatch::Door), Palette::default().get_rgb(Swatch::Door));
    }

    #[test]
    fn test_theme_with_bad_color_is_rejected() {
        let theme = ThemePalette {
            door: Some("brown".to_string()),
            ..Default::default()
        };
        match Palette::from_theme(&theme) {
            Err(LayoutError::InvalidColor { role, .. }) => assert_eq!(role, "door"),
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }
}
