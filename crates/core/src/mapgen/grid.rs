//! Wall/floor cell storage with a permanently walled outer ring.

use crate::types::{PixelRect, Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Every cell starts as wall, so the outer ring holds before anything is carved.
    pub fn new_walled(width: usize, height: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        Self { width, height, tiles: vec![TileKind::Wall; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Strictly inside the outer wall ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x > 0
            && pos.y > 0
            && (pos.x as usize) < self.width.saturating_sub(1)
            && (pos.y as usize) < self.height.saturating_sub(1)
    }

    pub fn is_ring(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.is_interior(pos)
    }

    /// Cells outside the grid read as wall.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Wall
    }

    /// Turns an interior cell into floor. Ring and out-of-range cells are left
    /// untouched; returns whether the cell changed.
    pub fn carve(&mut self, pos: Pos) -> bool {
        if !self.is_interior(pos) {
            return false;
        }
        let index = self.index(pos);
        let changed = self.tiles[index] != TileKind::Floor;
        self.tiles[index] = TileKind::Floor;
        changed
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == TileKind::Floor).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    /// One pixel-space rectangle per wall cell, row-major.
    pub fn wall_rects(&self, tile_size: u32) -> Vec<PixelRect> {
        self.positions()
            .filter(|&pos| self.is_wall(pos))
            .map(|pos| PixelRect::cell(pos, tile_size))
            .collect()
    }

    /// `#` for wall and `.` for floor, one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|tile| match tile {
                        TileKind::Wall => '#',
                        TileKind::Floor => '.',
                    })
                    .collect()
            })
            .collect()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
