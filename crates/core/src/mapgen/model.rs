//! Public data models for generated levels and their collectibles.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{PixelRect, Pos, TileKind};

use super::grid::Grid;
use super::layout::RoomRect;

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub cell: Pos,
    pub rect: PixelRect,
}

impl Collectible {
    /// Half-tile square centred in `cell`.
    pub fn in_cell(cell: Pos, tile_size: u32) -> Self {
        let edge = tile_size as i64;
        let offset = edge / 4;
        let rect = PixelRect::new(
            (cell.x as i64 * edge + offset) as f32,
            (cell.y as i64 * edge + offset) as f32,
            (edge / 2) as f32,
            (edge / 2) as f32,
        );
        Self { cell, rect }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLevel {
    pub width: usize,
    pub height: usize,
    pub tile_size: u32,
    pub grid: Grid,
    /// Accepted rooms in generation order.
    pub rooms: Vec<RoomRect>,
    pub start: Pos,
    pub collectibles: Vec<Collectible>,
}

impl GeneratedLevel {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.tile_size.to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            for value in [room.x, room.y, room.width, room.height] {
                bytes.extend((value as u32).to_le_bytes());
            }
        }

        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());

        bytes.extend((self.collectibles.len() as u32).to_le_bytes());
        for collectible in &self.collectibles {
            bytes.extend(collectible.cell.y.to_le_bytes());
            bytes.extend(collectible.cell.x.to_le_bytes());
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid.tile_at(pos)
    }

    pub fn room_containing(&self, pos: Pos) -> Option<usize> {
        self.rooms.iter().position(|room| room.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collectible_is_centred_half_tile() {
        let collectible = Collectible::in_cell(Pos { y: 3, x: 5 }, 32);
        assert_eq!(collectible.rect, PixelRect::new(168.0, 104.0, 16.0, 16.0));
    }

    #[test]
    fn odd_tile_sizes_use_integer_offsets() {
        let collectible = Collectible::in_cell(Pos { y: 1, x: 1 }, 10);
        assert_eq!(collectible.rect, PixelRect::new(12.0, 12.0, 5.0, 5.0));
    }
}
