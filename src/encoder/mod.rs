mod raster_encoder;

pub use raster_encoder::RasterEncoder;

use std::path::Path;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
    Jpeg,
    Tga,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "png" => Some(OutputFormat::Png),
                "bmp" => Some(OutputFormat::Bmp),
                "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
                "tga" => Some(OutputFormat::Tga),
                _ => None,
            })
    }

    /// Like `from_path`, but unknown or missing extensions become PNG.
    pub fn for_path(path: &Path) -> Self {
        Self::from_path(path).unwrap_or_else(|| {
            log::warn!("Unrecognized extension on {}, writing PNG", path.display());
            OutputFormat::Png
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Tga => "tga",
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Tga => image::ImageFormat::Tga,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("plan.PNG")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a/b/plan.jpeg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_path(Path::new("plan.tga")), Some(OutputFormat::Tga));
        assert_eq!(OutputFormat::from_path(Path::new("plan")), None);
    }

    #[test]
    fn test_unknown_extension_defaults_to_png() {
        assert_eq!(OutputFormat::for_path(Path::new("plan.xyz")), OutputFormat::Png);
        assert_eq!(OutputFormat::for_path(Path::new("plan.bmp")).extension(), "bmp");
    }
}
