use std::path::PathBuf;
use thiserror::Error;

use crate::layout::Stage;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("canvas {width}x{height} is too small: each side must be at least {min}px")]
    CanvasTooSmall { width: u32, height: u32, min: u32 },

    #[error("canvas {width}x{height} is too large: each side must be at most {max}px")]
    CanvasTooLarge { width: u32, height: u32, max: u32 },

    /// A sampling interval came out empty (`high < low`).
    #[error("no room to place {what}: range [{low}, {high}] is empty")]
    EmptyRange { what: &'static str, low: i32, high: i32 },

    #[error("cannot {step} while the plan is in the {found:?} stage (expected {expected:?})")]
    OutOfOrder { step: &'static str, expected: Stage, found: Stage },

    #[error("invalid color '{value}' for {role}: expected #rrggbb")]
    InvalidColor { role: &'static str, value: String },

    #[error("invalid caption {field} '{value}': {reason}")]
    InvalidTitle { field: &'static str, value: String, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
