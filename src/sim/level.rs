//! Static level geometry
//!
//! The level is a flat list of solid boxes. Loading it from a tile map is the
//! host's job; [`LevelGeometry::arena`] is a built-in layout for headless runs
//! and tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::{LEVEL_HEIGHT, LEVEL_WIDTH};

/// Tile edge length of the built-in layout (16px tiles scaled 2.09x)
const TILE: f32 = 33.44;

/// Static collision surfaces plus the visible level bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGeometry {
    pub width: f32,
    pub height: f32,
    pub solids: Vec<Aabb>,
}

impl LevelGeometry {
    pub fn new(width: f32, height: f32, solids: Vec<Aabb>) -> Self {
        Self {
            width,
            height,
            solids,
        }
    }

    /// Default arena: two floor slabs split by a pit, plus three ledges
    pub fn arena() -> Self {
        let floor_top = 2.0 * TILE;
        let pit_left = LEVEL_WIDTH * 0.5 - 4.0 * TILE;
        let pit_right = LEVEL_WIDTH * 0.5 - 1.0 * TILE;

        let solids = vec![
            // Floor, left of the pit
            Aabb::new(Vec2::ZERO, Vec2::new(pit_left, floor_top)),
            // Floor, right of the pit
            Aabb::new(Vec2::new(pit_right, 0.0), Vec2::new(LEVEL_WIDTH, floor_top)),
            // Ledges
            Aabb::new(
                Vec2::new(4.0 * TILE, 7.0 * TILE),
                Vec2::new(10.0 * TILE, 8.0 * TILE),
            ),
            Aabb::new(
                Vec2::new(LEVEL_WIDTH * 0.5 - 3.0 * TILE, 10.0 * TILE),
                Vec2::new(LEVEL_WIDTH * 0.5 + 3.0 * TILE, 11.0 * TILE),
            ),
            Aabb::new(
                Vec2::new(LEVEL_WIDTH - 10.0 * TILE, 7.0 * TILE),
                Vec2::new(LEVEL_WIDTH - 4.0 * TILE, 8.0 * TILE),
            ),
        ];

        Self::new(LEVEL_WIDTH, LEVEL_HEIGHT, solids)
    }

    /// A single floor spanning the whole width with its top at `top`
    pub fn flat(top: f32) -> Self {
        Self::new(
            LEVEL_WIDTH,
            LEVEL_HEIGHT,
            vec![Aabb::new(Vec2::new(0.0, top - TILE), Vec2::new(LEVEL_WIDTH, top))],
        )
    }

    /// No geometry at all (everything falls)
    pub fn empty() -> Self {
        Self::new(LEVEL_WIDTH, LEVEL_HEIGHT, Vec::new())
    }

    pub fn solids(&self) -> &[Aabb] {
        &self.solids
    }

    /// True if `b` overlaps any solid
    pub fn overlaps(&self, b: &Aabb) -> bool {
        self.solids.iter().any(|s| s.intersects(b))
    }
}

impl Default for LevelGeometry {
    fn default() -> Self {
        Self::arena()
    }
}
