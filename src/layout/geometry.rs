use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{LayoutError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle. `right()`/`bottom()` are the far edges, matching
/// the inclusive corner convention the canvas draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn inset(&self, amount: i32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2 * amount,
            self.height - 2 * amount,
        )
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }

    pub fn corners(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.right(), self.bottom())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Wall {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Top and bottom walls run along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Wall::Top | Wall::Bottom)
    }

    pub fn name(self) -> &'static str {
        match self {
            Wall::Top => "top",
            Wall::Bottom => "bottom",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed size of a wall opening: `span` runs along the wall, `depth` into
/// the room, and `clearance` is kept free at both corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningSpec {
    pub label: &'static str,
    pub span: i32,
    pub depth: i32,
    pub clearance: i32,
}

pub const DOOR: OpeningSpec = OpeningSpec {
    label: "door",
    span: 40,
    depth: 60,
    clearance: 20,
};

pub const WINDOW: OpeningSpec = OpeningSpec {
    label: "window",
    span: 60,
    depth: 15,
    clearance: 60,
};

impl OpeningSpec {
    /// Shortest wall that can hold this opening.
    pub const fn min_wall(&self) -> i32 {
        self.span + 2 * self.clearance
    }

    /// Valid start offsets along `wall`.
    pub fn offset_range(&self, room: &Rect, wall: Wall) -> Result<RangeInclusive<i32>> {
        let (start, length) = if wall.is_horizontal() {
            (room.x, room.width)
        } else {
            (room.y, room.height)
        };
        checked_range(self.label, start + self.clearance, start + length - self.span - self.clearance)
    }

    /// Opening rectangle flush against `wall`, starting `offset` along it.
    pub fn place(&self, room: &Rect, wall: Wall, offset: i32) -> Rect {
        match wall {
            Wall::Top => Rect::new(offset, room.y, self.span, self.depth),
            Wall::Bottom => Rect::new(offset, room.bottom() - self.depth, self.span, self.depth),
            Wall::Left => Rect::new(room.x, offset, self.depth, self.span),
            Wall::Right => Rect::new(room.right() - self.depth, offset, self.depth, self.span),
        }
    }
}

pub fn checked_range(what: &'static str, low: i32, high: i32) -> Result<RangeInclusive<i32>> {
    if high < low {
        return Err(LayoutError::EmptyRange { what, low, high });
    }
    Ok(low..=high)
}
