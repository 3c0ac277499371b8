use rust_embed::RustEmbed;

use super::{Canvas, Swatch};

// Embed all font files at compile time
#[derive(RustEmbed)]
#[folder = "assets/fonts/"]
struct EmbeddedFonts;

pub const DEFAULT_FONT_NAME: &str = "mono_6x8";

/// Bitmap font covering the 7-bit ASCII range.
pub struct Font {
    width: usize,
    height: usize,
    glyphs: Vec<Vec<bool>>, // Bitmap data for each of 128 characters
}

impl Font {
    pub fn load(name: Option<&str>) -> Self {
        // Use specified font or default
        let font_name = name.unwrap_or(DEFAULT_FONT_NAME);

        match Self::load_embedded(font_name) {
            Ok(font) => return font,
            Err(e) => log::warn!("Font '{}' unavailable: {}", font_name, e),
        }

        // Fall back to default font if specified font failed
        if font_name != DEFAULT_FONT_NAME {
            if let Ok(font) = Self::load_embedded(DEFAULT_FONT_NAME) {
                return font;
            }
        }

        // Last resort: fallback font
        Self::fallback_font()
    }

    fn load_embedded(name: &str) -> Result<Self, String> {
        let file = EmbeddedFonts::get(&format!("{}.fd", name))
            .ok_or_else(|| format!("not embedded (available: {:?})", Self::available_fonts()))?;
        Self::parse_fd_font(&String::from_utf8_lossy(&file.data))
    }

    /// Get list of available embedded font names
    pub fn available_fonts() -> Vec<String> {
        EmbeddedFonts::iter()
            .filter_map(|path| path.strip_suffix(".fd").map(|s| s.to_string()))
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get_glyph(&self, ch: char) -> &[bool] {
        let code = if ch.is_ascii() { ch as usize } else { b'?' as usize };
        &self.glyphs[code]
    }

    /// Pixel width of `text` at the given scale.
    pub fn text_width(&self, text: &str, size: f32) -> usize {
        let scaled_width = (self.width as f32 * size).round() as usize;
        text.chars().count() * scaled_width
    }

    /// Render a string of text onto a canvas with scaling
    pub fn render_string(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, swatch: Swatch, size: f32) {
        if !size.is_finite() || size <= 0.0 {
            log::warn!("Skipping text '{}' with unusable scale {}", text, size);
            return;
        }
        let scaled_width = (self.width as f32 * size).round() as i32;

        for (char_idx, ch) in text.chars().enumerate() {
            let char_x = x.saturating_add((char_idx as i32).saturating_mul(scaled_width));
            if char_x >= canvas.width() as i32 {
                break;
            }
            self.render_character(canvas, char_x, y, ch, swatch, size);
        }
    }

    /// Only foreground pixels are written; the background shows through.
    fn render_character(&self, canvas: &mut Canvas, x: i32, y: i32, ch: char, swatch: Swatch, size: f32) {
        let glyph = self.get_glyph(ch);
        let scaled_width = (self.width as f32 * size).round() as usize;
        let scaled_height = (self.height as f32 * size).round() as usize;

        for sy in 0..scaled_height {
            for sx in 0..scaled_width {
                // Nearest neighbor
                let glyph_x = ((sx as f32) / size) as usize;
                let glyph_y = ((sy as f32) / size) as usize;

                if glyph_x < self.width && glyph_y < self.height && glyph[glyph_y * self.width + glyph_x] {
                    canvas.plot(x.saturating_add(sx as i32), y.saturating_add(sy as i32), swatch);
                }
            }
        }
    }

    // Parse .fd font format
    fn parse_fd_font(data: &str) -> Result<Self, String> {
        let lines: Vec<&str> = data.lines().collect();
        let mut width = 0;
        let mut height = 0;
        let mut char_start_idx = lines.len();

        // Parse header
        for (idx, line) in lines.iter().enumerate() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            if let Some(value) = line.strip_prefix("width") {
                width = value.trim().parse().map_err(|_| "Invalid width")?;
            } else if let Some(value) = line.strip_prefix("height") {
                height = value.trim().parse().map_err(|_| "Invalid height")?;
            } else if line.starts_with("char") {
                char_start_idx = idx;
                break;
            }
        }

        if width == 0 || height == 0 {
            return Err("Missing width/height header".to_string());
        }

        let mut glyphs: Vec<Vec<bool>> = (0..128u8)
            .map(|ch| Self::generate_fallback_glyph(ch, width, height))
            .collect();
        let mut current_char: Option<usize> = None;
        let mut bitmap_lines: Vec<&str> = Vec::new();

        for line in &lines[char_start_idx..] {
            let line = line.trim();

            if let Some(code) = line.strip_prefix("char") {
                Self::store_glyph(&mut glyphs, current_char, &bitmap_lines, width, height);
                current_char = code.trim().parse().ok();
                bitmap_lines.clear();
            } else if !line.is_empty() && !line.starts_with('#') {
                bitmap_lines.push(line);
            }
        }
        Self::store_glyph(&mut glyphs, current_char, &bitmap_lines, width, height);

        Ok(Self {
            width,
            height,
            glyphs,
        })
    }

    fn store_glyph(glyphs: &mut [Vec<bool>], ch: Option<usize>, lines: &[&str], width: usize, height: usize) {
        match ch {
            Some(idx) if idx < glyphs.len() && lines.len() == height => {
                glyphs[idx] = Self::parse_bitmap(lines, width, height);
            }
            Some(idx) => log::warn!("Skipping malformed glyph {} ({} rows)", idx, lines.len()),
            None => {}
        }
    }

    fn parse_bitmap(lines: &[&str], char_width: usize, height: usize) -> Vec<bool> {
        let mut bitmap = Vec::with_capacity(char_width * height);

        for line in lines {
            let mut row: Vec<bool> = line.chars().take(char_width).map(|ch| ch == 'x').collect();
            row.resize(char_width, false);
            bitmap.extend(row);
        }

        bitmap
    }

    // Fallback font in case parsing fails
    fn fallback_font() -> Self {
        let width = 6;
        let height = 8;
        let glyphs = (0..128u8)
            .map(|ch| Self::generate_fallback_glyph(ch, width, height))
            .collect();

        Self {
            width,
            height,
            glyphs,
        }
    }

    /// Hollow box for printable characters, blank for space and controls.
    fn generate_fallback_glyph(ch: u8, width: usize, height: usize) -> Vec<bool> {
        let mut bitmap = vec![false; width * height];

        if ch > b' ' && ch < 127 && width > 2 && height > 2 {
            for y in 0..height - 1 {
                bitmap[y * width] = true;
                bitmap[y * width + width - 2] = true;
            }
            for x in 0..width - 1 {
                bitmap[x] = true;
                bitmap[(height - 2) * width + x] = true;
            }
        }

        bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_is_embedded() {
        assert!(Font::available_fonts().contains(&DEFAULT_FONT_NAME.to_string()));
        let font = Font::load(None);
        assert_eq!((font.width(), font.height()), (6, 8));
    }

    #[test]
    fn test_unknown_font_falls_back_to_default() {
        let font = Font::load(Some("no_such_font"));
        assert_eq!((font.width(), font.height()), (6, 8));
        assert!(font.get_glyph('A').iter().any(|&p| p));
    }

    #[test]
    fn test_parse_fd_font() {
        let data = "# tiny\nwidth 3\nheight 2\n\nchar 65\nx.x\n.x.\n";
        let font = Font::parse_fd_font(data).unwrap();
        assert_eq!(font.get_glyph('A'), &[true, false, true, false, true, false]);
        assert!(!font.get_glyph(' ').iter().any(|&p| p));
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        assert!(Font::parse_fd_font("char 65\nx\n").is_err());
    }

    #[test]
    fn test_render_string_writes_only_foreground() {
        let font = Font::load(None);
        let mut canvas = Canvas::new(40, 20, Swatch::Background);
        font.render_string(&mut canvas, 2, 2, "TAB", Swatch::Text, 1.0);
        let lit = canvas.count(Swatch::Text);
        assert!(lit > 0);
        assert!(lit < 3 * 6 * 8);
        assert_eq!(font.text_width("TAB", 1.0), 18);
    }

    #[test]
    fn test_text_at_extreme_positions_is_clipped() {
        let font = Font::load(None);
        let mut canvas = Canvas::new(30, 10, Swatch::Background);
        font.render_string(&mut canvas, i32::MAX - 3, 0, "Room", Swatch::Text, 1.0);
        font.render_string(&mut canvas, 0, i32::MAX - 3, "Room", Swatch::Text, 1.0);
        font.render_string(&mut canvas, i32::MIN, 0, "Room", Swatch::Text, 1.0);
        font.render_string(&mut canvas, 0, 0, "Room", Swatch::Text, f32::NAN);
        font.render_string(&mut canvas, 0, 0, "Room", Swatch::Text, -1.0);
        assert_eq!(canvas.count(Swatch::Text), 0);
    }

    #[test]
    fn test_scaled_text_covers_more_pixels() {
        let font = Font::load(None);
        let mut small = Canvas::new(80, 40, Swatch::Background);
        let mut large = Canvas::new(80, 40, Swatch::Background);
        font.render_string(&mut small, 0, 0, "Room", Swatch::Text, 1.0);
        font.render_string(&mut large, 0, 0, "Room", Swatch::Text, 2.0);
        assert_eq!(large.count(Swatch::Text), small.count(Swatch::Text) * 4);
    }
}
