use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LayoutError;
use crate::layout::MAX_CANVAS_SIDE;
use crate::renderer::Swatch;

pub const BUILTIN_THEMES: &[&str] = &["default", "blueprint", "mono"];

/// Largest caption scale a theme may ask for.
pub const MAX_FONT_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    #[serde(default)]
    pub palette: ThemePalette,

    #[serde(default)]
    pub title: TitleConfig,

    /// Embedded bitmap font name
    #[serde(default)]
    pub font: Option<String>,
}

/// Hex colors (`#rrggbb`) per drawing role. Unset roles keep the stock color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemePalette {
    pub background: Option<String>,
    pub interior: Option<String>,
    pub wall: Option<String>,
    pub door: Option<String>,
    pub window: Option<String>,
    pub furniture: Option<String>,
    pub text: Option<String>,
    pub outline: Option<String>,
    pub handle: Option<String>,
    pub divider: Option<String>,
}

impl ThemePalette {
    pub fn get(&self, swatch: Swatch) -> Option<&str> {
        let value = match swatch {
            Swatch::Background => &self.background,
            Swatch::Interior => &self.interior,
            Swatch::Wall => &self.wall,
            Swatch::Door => &self.door,
            Swatch::Window => &self.window,
            Swatch::Furniture => &self.furniture,
            Swatch::Text => &self.text,
            Swatch::Outline => &self.outline,
            Swatch::Handle => &self.handle,
            Swatch::Divider => &self.divider,
        };
        value.as_deref()
    }
}

/// Caption placement. The caption starts at `canvas_width / 2 + x_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleConfig {
    #[serde(default = "default_title_text")]
    pub text: String,

    #[serde(default = "default_title_x_offset")]
    pub x_offset: i32,

    #[serde(default = "default_title_y")]
    pub y: i32,

    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_title_text() -> String {
    "Room Layout".to_string()
}

fn default_title_x_offset() -> i32 {
    -100
}

fn default_title_y() -> i32 {
    20
}

fn default_font_size() -> f32 {
    1.0
}

impl TitleConfig {
    /// Reject caption settings that would overflow positions or scale glyphs
    /// past any drawable canvas.
    pub fn validate(&self) -> std::result::Result<(), LayoutError> {
        let size = self.font_size;
        if !size.is_finite() || size <= 0.0 || size > MAX_FONT_SIZE {
            return Err(LayoutError::InvalidTitle {
                field: "font_size",
                value: size.to_string(),
                reason: format!("must be greater than 0 and at most {}", MAX_FONT_SIZE),
            });
        }

        let limit = MAX_CANVAS_SIDE as i32;
        for (field, value) in [("x_offset", self.x_offset), ("y", self.y)] {
            if !(-limit..=limit).contains(&value) {
                return Err(LayoutError::InvalidTitle {
                    field,
                    value: value.to_string(),
                    reason: format!("must be within -{limit}..={limit}"),
                });
            }
        }

        Ok(())
    }
}

impl Default for TitleConfig {
    fn default() -> Self {
        TitleConfig {
            text: default_title_text(),
            x_offset: default_title_x_offset(),
            y: default_title_y(),
            font_size: default_font_size(),
        }
    }
}

impl Theme {
    /// Load theme from filesystem path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;

        let theme: Theme = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse theme YAML: {}", path.display()))?;
        theme
            .title
            .validate()
            .with_context(|| format!("Invalid title in theme: {}", path.display()))?;

        Ok(theme)
    }

    /// Resolve a `--theme` argument: an existing file path, a builtin name,
    /// or `<name>.yaml` in one of the search directories.
    pub fn resolve(name_or_path: &str) -> Result<Self> {
        let path = Path::new(name_or_path);
        if path.is_file() {
            return Self::load(path);
        }
        Self::load_by_name(name_or_path)
    }

    /// Load theme by name, searching embedded themes first, then filesystem
    pub fn load_by_name(name: &str) -> Result<Self> {
        if let Ok(theme) = Self::load_builtin(name) {
            return Ok(theme);
        }

        for base_path in Self::theme_search_paths() {
            let theme_path = base_path.join(format!("{}.yaml", name));
            if theme_path.exists() {
                log::debug!("Loading theme from {}", theme_path.display());
                return Self::load(&theme_path);
            }
        }

        anyhow::bail!("Theme '{}' not found in embedded themes or filesystem", name)
    }

    /// Get theme search paths in order of priority
    pub fn theme_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("themes")];

        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "roomplan") {
            paths.push(proj_dirs.data_dir().join("themes"));
            paths.push(proj_dirs.config_dir().join("themes"));
        }

        paths
    }

    /// Load embedded builtin theme
    pub fn load_builtin(name: &str) -> Result<Self> {
        let yaml = match name {
            "default" => include_str!("../../themes/default.yaml"),
            "blueprint" => include_str!("../../themes/blueprint.yaml"),
            "mono" => include_str!("../../themes/mono.yaml"),
            _ => anyhow::bail!("Unknown builtin theme: {}. Available themes: {}", name, BUILTIN_THEMES.join(", ")),
        };

        let theme: Theme = serde_yaml::from_str(yaml)
            .with_context(|| format!("Failed to parse embedded theme: {}", name))?;
        theme.title.validate()?;

        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            name: "default".to_string(),
            palette: ThemePalette::default(),
            title: TitleConfig::default(),
            font: None,
        }
    }
}
