//! Random top-down room floor plans rendered to raster images.

pub mod cli;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use error::{LayoutError, Result};
pub use layout::{GeneratorConfig, Layout, LayoutGenerator};
