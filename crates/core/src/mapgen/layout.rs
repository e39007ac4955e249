//! Room rectangles and rejection-sampled room placement.

use crate::config::{GeneratorConfig, RING_MARGIN};
use crate::rng::LevelRng;
use crate::types::Pos;

use super::grid::Grid;

/// Smallest top-left coordinate that keeps a 1-cell margin inside the outer ring.
const MIN_ORIGIN: usize = RING_MARGIN + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    pub fn right(self) -> usize {
        self.x + self.width - 1
    }

    pub fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn center(self) -> Pos {
        Pos { y: (self.y + (self.height / 2)) as i32, x: (self.x + (self.width / 2)) as i32 }
    }

    pub fn expanded(self, margin: usize) -> Self {
        let expanded_x = self.x.saturating_sub(margin);
        let expanded_y = self.y.saturating_sub(margin);
        let expanded_right = self.right().saturating_add(margin);
        let expanded_bottom = self.bottom().saturating_add(margin);
        Self {
            x: expanded_x,
            y: expanded_y,
            width: expanded_right - expanded_x + 1,
            height: expanded_bottom - expanded_y + 1,
        }
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Strictly inside the room's 1-cell border.
    pub fn interior_contains(self, pos: Pos) -> bool {
        if pos.x <= 0 || pos.y <= 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.y..=self.bottom()).flat_map(move |y| {
            (self.x..=self.right()).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomPlacement {
    pub requested: usize,
    pub rooms: Vec<RoomRect>,
}

impl RoomPlacement {
    pub fn skipped(&self) -> usize {
        self.requested - self.rooms.len()
    }
}

/// Places up to a randomly drawn number of rooms and carves each accepted one.
/// A room whose attempt budget runs out is skipped, so the result may be short.
pub fn place_rooms<R: LevelRng + ?Sized>(
    grid: &mut Grid,
    config: &GeneratorConfig,
    rng: &mut R,
) -> RoomPlacement {
    let requested = rng.range_inclusive(config.room_count.min, config.room_count.max);
    let mut rooms = Vec::with_capacity(requested);

    for room_index in 0..requested {
        match sample_room(grid.width(), grid.height(), config, &rooms, rng) {
            Some(room) => {
                carve_room(grid, &room);
                rooms.push(room);
            }
            None => log::debug!(
                "room {room_index} skipped after {} placement attempts",
                config.placement_attempts
            ),
        }
    }

    RoomPlacement { requested, rooms }
}

fn sample_room<R: LevelRng + ?Sized>(
    width: usize,
    height: usize,
    config: &GeneratorConfig,
    rooms: &[RoomRect],
    rng: &mut R,
) -> Option<RoomRect> {
    for _ in 0..config.placement_attempts {
        let room_width = rng.range_inclusive(config.room_width.min, config.room_width.max);
        let room_height = rng.range_inclusive(config.room_height.min, config.room_height.max);
        let (Some(max_x), Some(max_y)) =
            (max_origin(width, room_width), max_origin(height, room_height))
        else {
            continue;
        };

        let x = rng.range_inclusive(MIN_ORIGIN, max_x);
        let y = rng.range_inclusive(MIN_ORIGIN, max_y);
        let candidate = RoomRect { x, y, width: room_width, height: room_height };
        let inflated = candidate.expanded(config.room_separation);
        if rooms.iter().any(|existing| inflated.intersects(existing)) {
            continue;
        }
        return Some(candidate);
    }
    None
}

/// Largest origin keeping the room plus its margin clear of the far ring edge.
fn max_origin(extent: usize, room_extent: usize) -> Option<usize> {
    let max = extent.checked_sub(room_extent.checked_add(RING_MARGIN + 1)?)?;
    (max >= MIN_ORIGIN).then_some(max)
}

pub fn carve_room(grid: &mut Grid, room: &RoomRect) {
    for pos in room.cells() {
        grid.carve(pos);
    }
}
