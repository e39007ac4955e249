//! Collision-checked movement of the controllable unit against wall cells.
//! This module exists to keep obstacle queries separate from session bookkeeping.
//! It does not own input polling or per-axis sequencing of diagonal moves.

use crate::mapgen::Grid;
use crate::types::{PixelRect, Pos};

/// Wall lookup keyed by cell coordinate. Answers the same question as scanning
/// every wall rectangle, but only visits the cells a query rectangle covers.
#[derive(Clone, Copy, Debug)]
pub struct CollisionMap<'a> {
    grid: &'a Grid,
    tile_size: u32,
}

impl<'a> CollisionMap<'a> {
    pub fn new(grid: &'a Grid, tile_size: u32) -> Self {
        Self { grid, tile_size }
    }

    pub fn intersects_wall(&self, rect: &PixelRect) -> bool {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return false;
        }
        let edge = self.tile_size as f32;
        let first_x = (rect.x / edge).floor() as i32;
        let last_x = (rect.right() / edge).ceil() as i32 - 1;
        let first_y = (rect.y / edge).floor() as i32;
        let last_y = (rect.bottom() / edge).ceil() as i32 - 1;

        (first_y..=last_y).any(|y| {
            (first_x..=last_x).any(|x| {
                let pos = Pos { y, x };
                self.grid.in_bounds(pos) && self.grid.is_wall(pos)
            })
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked,
}

/// The controllable entity. Position is in cells; the collision rectangle is a
/// full tile in pixels and always matches the position.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    x: f32,
    y: f32,
    tile_size: u32,
    rect: PixelRect,
}

impl Unit {
    pub fn new(start: Pos, tile_size: u32) -> Self {
        let (x, y) = (start.x as f32, start.y as f32);
        Self { x, y, tile_size, rect: footprint(x, y, tile_size) }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Commits the move only when the destination footprint touches no wall;
    /// otherwise the unit stays exactly where it was.
    pub fn try_move(&mut self, dx: f32, dy: f32, obstacles: &CollisionMap<'_>) -> MoveOutcome {
        let (next_x, next_y) = (self.x + dx, self.y + dy);
        let next_rect = footprint(next_x, next_y, self.tile_size);
        if obstacles.intersects_wall(&next_rect) {
            return MoveOutcome::Blocked;
        }
        self.x = next_x;
        self.y = next_y;
        self.rect = next_rect;
        MoveOutcome::Moved
    }
}

fn footprint(x: f32, y: f32, tile_size: u32) -> PixelRect {
    let edge = tile_size as f32;
    PixelRect::new(x * edge, y * edge, edge, edge)
}
