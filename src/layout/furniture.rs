use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use super::geometry::Rect;

pub const COUNT_RANGE: RangeInclusive<usize> = 2..=6;
pub const MAX_PIECE_SIDE: i32 = 120;
pub const SIZE_RANGE: RangeInclusive<i32> = 40..=MAX_PIECE_SIDE;
/// Gap kept between every piece and the room walls.
pub const WALL_CLEARANCE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    Table,
    Chair,
    Bed,
    Sofa,
    Wardrobe,
}

impl FurnitureKind {
    pub const ALL: [FurnitureKind; 5] = [
        FurnitureKind::Table,
        FurnitureKind::Chair,
        FurnitureKind::Bed,
        FurnitureKind::Sofa,
        FurnitureKind::Wardrobe,
    ];

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> FurnitureKind {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            FurnitureKind::Table => "table",
            FurnitureKind::Chair => "chair",
            FurnitureKind::Bed => "bed",
            FurnitureKind::Sofa => "sofa",
            FurnitureKind::Wardrobe => "wardrobe",
        }
    }

    /// Label printed on the plan.
    pub fn abbreviation(self) -> &'static str {
        match self {
            FurnitureKind::Table => "TAB",
            FurnitureKind::Chair => "CHA",
            FurnitureKind::Bed => "BED",
            FurnitureKind::Sofa => "SOF",
            FurnitureKind::Wardrobe => "WAR",
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FurnitureItem {
    pub kind: FurnitureKind,
    pub rect: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_is_first_three_letters_uppercased() {
        for kind in FurnitureKind::ALL {
            assert_eq!(kind.abbreviation(), kind.name()[..3].to_uppercase());
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&FurnitureKind::Wardrobe).unwrap();
        assert_eq!(json, "\"wardrobe\"");
    }
}
