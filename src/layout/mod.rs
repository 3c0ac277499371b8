//! Randomized floor-plan generation.
//!
//! A [`LayoutGenerator`] owns one canvas and one seeded RNG. Every run draws,
//! in order, the room outline, a door, a window, 2–6 furniture pieces, and a
//! caption. Placements never consult each other, so pieces may overlap.

pub mod furniture;
pub mod geometry;

pub use furniture::{FurnitureItem, FurnitureKind};
pub use geometry::{OpeningSpec, Point, Rect, Wall, DOOR, WINDOW};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::Path;

use crate::encoder::{OutputFormat, RasterEncoder};
use crate::error::{LayoutError, Result};
use crate::renderer::{Canvas, Font, Palette, Swatch};
use crate::theme::TitleConfig;
use furniture::{COUNT_RANGE, MAX_PIECE_SIDE, SIZE_RANGE, WALL_CLEARANCE};
use geometry::checked_range;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT: &str = "room_layout.png";

/// Gap between the canvas edge and the room outline.
pub const ROOM_MARGIN: i32 = 50;

const fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Shortest room side that still fits the door, the window, and the largest
/// furniture piece with their clearances.
pub const MIN_ROOM_SIDE: i32 = max(
    max(DOOR.min_wall(), WINDOW.min_wall()),
    MAX_PIECE_SIDE + 2 * WALL_CLEARANCE,
);
pub const MIN_CANVAS_SIDE: u32 = (MIN_ROOM_SIDE + 2 * ROOM_MARGIN) as u32;
pub const MAX_CANVAS_SIDE: u32 = 16_384;

const WALL_STROKE: u32 = 3;
const OPENING_STROKE: u32 = 1;
const FURNITURE_STROKE: u32 = 2;
const HANDLE_RADIUS: i32 = 3;
const HANDLE_OFFSET: i32 = 5;
const LABEL_INSET: i32 = 5;

/// Drawing progress. Each draw call is only legal from the stage before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Empty,
    RoomDrawn,
    DoorDrawn,
    WindowDrawn,
    FurnitureDrawn,
    Captioned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Opening {
    pub kind: OpeningKind,
    pub wall: Wall,
    pub rect: Rect,
}

/// What the last run placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    pub room: Rect,
    pub door: Option<Opening>,
    pub window: Option<Opening>,
    pub furniture: Vec<FurnitureItem>,
    pub caption: Option<String>,
}

impl Layout {
    fn new(width: u32, height: u32, seed: u64, room: Rect) -> Self {
        Layout {
            width,
            height,
            seed,
            room,
            door: None,
            window: None,
            furniture: Vec::new(),
            caption: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub width: u32,
    pub height: u32,
    /// Drawn from OS entropy when `None`.
    pub seed: Option<u64>,
    pub title: TitleConfig,
    pub font: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            title: TitleConfig::default(),
            font: None,
        }
    }
}

/// Room rectangle for a canvas, or a configuration error when the canvas
/// cannot hold every element with its clearances.
pub fn room_rect(width: u32, height: u32) -> Result<Rect> {
    if width < MIN_CANVAS_SIDE || height < MIN_CANVAS_SIDE {
        return Err(LayoutError::CanvasTooSmall {
            width,
            height,
            min: MIN_CANVAS_SIDE,
        });
    }
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(LayoutError::CanvasTooLarge {
            width,
            height,
            max: MAX_CANVAS_SIDE,
        });
    }

    Ok(Rect::new(
        ROOM_MARGIN,
        ROOM_MARGIN,
        width as i32 - 2 * ROOM_MARGIN,
        height as i32 - 2 * ROOM_MARGIN,
    ))
}

pub struct LayoutGenerator {
    config: GeneratorConfig,
    canvas: Canvas,
    palette: Palette,
    font: Font,
    room: Rect,
    rng: StdRng,
    seed: u64,
    stage: Stage,
    layout: Layout,
}

impl LayoutGenerator {
    pub fn new(config: GeneratorConfig, palette: Palette) -> Result<Self> {
        let room = room_rect(config.width, config.height)?;
        config.title.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let canvas = Canvas::new(config.width as usize, config.height as usize, Swatch::Background);
        let font = Font::load(config.font.as_deref());
        let layout = Layout::new(config.width, config.height, seed, room);

        log::debug!(
            "Generator ready: canvas {}x{}, room {:?}, seed {}",
            config.width,
            config.height,
            room,
            seed
        );

        Ok(Self {
            config,
            canvas,
            palette,
            font,
            room,
            rng: StdRng::seed_from_u64(seed),
            seed,
            stage: Stage::Empty,
            layout,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn room(&self) -> Rect {
        self.room
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run the whole pipeline on a blank canvas.
    pub fn generate(&mut self) -> Result<&Canvas> {
        self.reset();

        let origin = self.draw_room()?;
        let door = self.draw_door(origin)?;
        let window = self.draw_window(origin)?;
        let pieces = self.draw_furniture(origin)?.len();
        self.draw_caption()?;

        log::info!(
            "Generated {}x{} plan (seed {}): door on {} wall, window on {} wall, {} furniture pieces",
            self.config.width,
            self.config.height,
            self.seed,
            door.wall,
            window.wall,
            pieces
        );

        Ok(&self.canvas)
    }

    pub fn reset(&mut self) {
        self.canvas.clear(Swatch::Background);
        self.layout = Layout::new(self.config.width, self.config.height, self.seed, self.room);
        self.stage = Stage::Empty;
    }

    /// Outline and floor of the room. Returns the room origin.
    pub fn draw_room(&mut self) -> Result<Point> {
        self.require("draw the room", Stage::Empty)?;

        self.canvas.rectangle(
            self.room.corners(),
            Some(Swatch::Interior),
            Some((Swatch::Wall, WALL_STROKE)),
        );

        self.stage = Stage::RoomDrawn;
        Ok(self.room.origin())
    }

    pub fn draw_door(&mut self, origin: Point) -> Result<Opening> {
        self.require("draw the door", Stage::RoomDrawn)?;

        let room = self.room_at(origin);
        let door = self.place_opening(&DOOR, OpeningKind::Door, &room)?;
        let rect = door.rect;
        self.canvas.rectangle(
            rect.corners(),
            Some(Swatch::Door),
            Some((Swatch::Outline, OPENING_STROKE)),
        );

        let center = rect.center();
        self.canvas.fill_circle(center.x + HANDLE_OFFSET, center.y, HANDLE_RADIUS, Swatch::Handle);

        log::debug!("Door on {} wall at {:?}", door.wall, rect);
        self.layout.door = Some(door);
        self.stage = Stage::DoorDrawn;
        Ok(door)
    }

    /// The wall is drawn independently of the door's, so both may share a
    /// wall and overlap.
    pub fn draw_window(&mut self, origin: Point) -> Result<Opening> {
        self.require("draw the window", Stage::DoorDrawn)?;

        let room = self.room_at(origin);
        let window = self.place_opening(&WINDOW, OpeningKind::Window, &room)?;
        let rect = window.rect;
        self.canvas.rectangle(
            rect.corners(),
            Some(Swatch::Window),
            Some((Swatch::Outline, OPENING_STROKE)),
        );

        // Divider crosses the long axis at its midpoint
        if window.wall.is_horizontal() {
            let x = rect.x + WINDOW.span / 2;
            self.canvas.line(x, rect.y, x, rect.bottom(), Swatch::Divider);
        } else {
            let y = rect.y + WINDOW.span / 2;
            self.canvas.line(rect.x, y, rect.right(), y, Swatch::Divider);
        }

        log::debug!("Window on {} wall at {:?}", window.wall, rect);
        self.layout.window = Some(window);
        self.stage = Stage::WindowDrawn;
        Ok(window)
    }

    pub fn draw_furniture(&mut self, origin: Point) -> Result<&[FurnitureItem]> {
        self.require("place furniture", Stage::WindowDrawn)?;

        let interior = self.room_at(origin).inset(WALL_CLEARANCE);
        let count = self.rng.gen_range(COUNT_RANGE);
        let mut items = Vec::with_capacity(count);

        for _ in 0..count {
            let kind = FurnitureKind::choose(&mut self.rng);
            let width = self.rng.gen_range(SIZE_RANGE);
            let height = self.rng.gen_range(SIZE_RANGE);
            let x = self
                .rng
                .gen_range(checked_range("furniture", interior.x, interior.right() - width)?);
            let y = self
                .rng
                .gen_range(checked_range("furniture", interior.y, interior.bottom() - height)?);
            let rect = Rect::new(x, y, width, height);

            self.canvas.rectangle(
                rect.corners(),
                Some(Swatch::Furniture),
                Some((Swatch::Outline, FURNITURE_STROKE)),
            );
            self.font.render_string(
                &mut self.canvas,
                x + LABEL_INSET,
                y + LABEL_INSET,
                kind.abbreviation(),
                Swatch::Text,
                1.0,
            );

            log::debug!("Placed {} at {:?}", kind, rect);
            items.push(FurnitureItem { kind, rect });
        }

        self.layout.furniture = items;
        self.stage = Stage::FurnitureDrawn;
        Ok(&self.layout.furniture)
    }

    pub fn draw_caption(&mut self) -> Result<()> {
        self.require("draw the caption", Stage::FurnitureDrawn)?;

        let title = &self.config.title;
        let x = (self.config.width as i32 / 2).saturating_add(title.x_offset);
        self.font
            .render_string(&mut self.canvas, x, title.y, &title.text, Swatch::Text, title.font_size);

        self.layout.caption = Some(title.text.clone());
        self.stage = Stage::Captioned;
        Ok(())
    }

    /// Encode the canvas; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = OutputFormat::for_path(path);
        RasterEncoder::new(path, format).encode(&self.canvas, &self.palette)?;
        log::info!("Saved floor plan ({}) to {}", format.extension(), path.display());
        Ok(())
    }

    fn require(&self, step: &'static str, expected: Stage) -> Result<()> {
        if self.stage != expected {
            return Err(LayoutError::OutOfOrder {
                step,
                expected,
                found: self.stage,
            });
        }
        Ok(())
    }

    fn room_at(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.room.width, self.room.height)
    }

    fn place_opening(&mut self, spec: &OpeningSpec, kind: OpeningKind, room: &Rect) -> Result<Opening> {
        let wall = Wall::choose(&mut self.rng);
        let offset = self.rng.gen_range(spec.offset_range(room, wall)?);
        Ok(Opening {
            kind,
            wall,
            rect: spec.place(room, wall, offset),
        })
    }
}
