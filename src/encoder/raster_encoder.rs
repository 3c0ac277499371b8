use image::{ImageBuffer, Rgb, RgbImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::OutputFormat;
use crate::error::{LayoutError, Result};
use crate::renderer::{Canvas, Palette};

/// Writes a single canvas to disk as an RGB still image.
///
/// The image is encoded in memory first, so a failed encode never leaves a
/// partial file behind.
pub struct RasterEncoder {
    path: PathBuf,
    format: OutputFormat,
}

impl RasterEncoder {
    pub fn new(path: &Path, format: OutputFormat) -> Self {
        Self {
            path: path.to_path_buf(),
            format,
        }
    }

    pub fn encode(&self, canvas: &Canvas, palette: &Palette) -> Result<()> {
        let image = to_rgb_image(canvas, palette);

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, self.format.image_format())
            .map_err(|source| LayoutError::Encode {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, buffer.into_inner()).map_err(|source| LayoutError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

pub fn to_rgb_image(canvas: &Canvas, palette: &Palette) -> RgbImage {
    let width = canvas.width();
    let data = canvas.data();

    ImageBuffer::from_fn(width as u32, canvas.height() as u32, |x, y| {
        Rgb(palette.rgb_for_index(data[y as usize * width + x as usize]))
    })
}
