//! Shared cell and pixel-space primitives used by generation, movement, and sessions.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

/// Axis-aligned rectangle in rendering pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Square covering one whole cell.
    pub fn cell(pos: Pos, tile_size: u32) -> Self {
        let edge = tile_size as f32;
        Self::new(pos.x as f32 * edge, pos.y as f32 * edge, edge, edge)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap with positive area; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && other.width > 0.0
            && other.height > 0.0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_contact_is_not_an_intersection() {
        let left = PixelRect::new(0.0, 0.0, 32.0, 32.0);
        let right = PixelRect::new(32.0, 0.0, 32.0, 32.0);
        assert!(!left.intersects(&right));
        assert!(!right.intersects(&left));
    }

    #[test]
    fn partial_overlap_intersects() {
        let a = PixelRect::new(0.0, 0.0, 32.0, 32.0);
        let b = PixelRect::new(24.0, 8.0, 16.0, 16.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn cell_rect_scales_by_tile_size() {
        let rect = PixelRect::cell(Pos { y: 2, x: 3 }, 32);
        assert_eq!(rect, PixelRect::new(96.0, 64.0, 32.0, 32.0));
    }
}
