mod canvas;
mod colors;
mod font;

pub use canvas::Canvas;
pub use colors::{parse_hex_color, Palette, Swatch};
pub use font::{Font, DEFAULT_FONT_NAME};
