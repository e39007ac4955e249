//! Structural checks every generated level must pass.
//! Used by tests and the fuzz harness; generation itself never calls this.

use std::collections::VecDeque;

use crate::config::RING_MARGIN;
use crate::error::InvariantViolation;
use crate::types::{Pos, TileKind};

use super::grid::Grid;
use super::model::GeneratedLevel;

pub fn check_invariants(
    level: &GeneratedLevel,
    room_separation: usize,
) -> Result<(), InvariantViolation> {
    let grid = &level.grid;
    if let Some(pos) = grid.positions().find(|&pos| grid.is_ring(pos) && !grid.is_wall(pos)) {
        return Err(InvariantViolation::RingBreached(pos));
    }

    if level.rooms.is_empty() {
        return Err(InvariantViolation::NoRooms);
    }

    let margin = RING_MARGIN + 1;
    for (index, room) in level.rooms.iter().enumerate() {
        if room.x < margin
            || room.y < margin
            || room.right() + margin >= level.width
            || room.bottom() + margin >= level.height
        {
            return Err(InvariantViolation::RoomOutsideMargin { index });
        }
        for (earlier, other) in level.rooms[..index].iter().enumerate() {
            if room.expanded(room_separation).intersects(other) {
                return Err(InvariantViolation::RoomsTooClose { first: earlier, second: index });
            }
        }
    }

    if level.room_containing(level.start).is_none() {
        return Err(InvariantViolation::StartOutsideRooms(level.start));
    }

    for collectible in &level.collectibles {
        if !level.rooms.iter().any(|room| room.interior_contains(collectible.cell)) {
            return Err(InvariantViolation::CollectibleOutsideRoom(collectible.cell));
        }
    }

    for (from, pair) in level.rooms.windows(2).enumerate() {
        if !floor_path_exists(grid, pair[0].center(), pair[1].center()) {
            return Err(InvariantViolation::RoomsDisconnected { from, to: from + 1 });
        }
    }

    Ok(())
}

/// Breadth-first search over 4-connected floor cells.
pub fn floor_path_exists(grid: &Grid, start: Pos, goal: Pos) -> bool {
    if grid.tile_at(start) != TileKind::Floor || grid.tile_at(goal) != TileKind::Floor {
        return false;
    }
    if start == goal {
        return true;
    }

    let index = |pos: Pos| (pos.y as usize) * grid.width() + (pos.x as usize);
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut open = VecDeque::from([start]);
    seen[index(start)] = true;

    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors() {
            if grid.tile_at(next) != TileKind::Floor || seen[index(next)] {
                continue;
            }
            if next == goal {
                return true;
            }
            seen[index(next)] = true;
            open.push_back(next);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::corridors::connect_rooms;
    use crate::mapgen::layout::{RoomRect, carve_room};
    use crate::mapgen::model::Collectible;

    fn two_room_level() -> GeneratedLevel {
        let mut grid = Grid::new_walled(20, 12);
        let rooms = vec![
            RoomRect { x: 2, y: 2, width: 5, height: 4 },
            RoomRect { x: 11, y: 5, width: 5, height: 4 },
        ];
        for room in &rooms {
            carve_room(&mut grid, room);
        }
        GeneratedLevel {
            width: 20,
            height: 12,
            tile_size: 32,
            grid,
            start: rooms[0].center(),
            collectibles: vec![Collectible::in_cell(Pos { y: 3, x: 3 }, 32)],
            rooms,
        }
    }

    #[test]
    fn unconnected_rooms_are_reported() {
        let level = two_room_level();
        assert_eq!(
            check_invariants(&level, 2),
            Err(InvariantViolation::RoomsDisconnected { from: 0, to: 1 })
        );
    }

    #[test]
    fn connected_level_passes() {
        let mut level = two_room_level();
        connect_rooms(&mut level.grid, &level.rooms);
        assert_eq!(check_invariants(&level, 2), Ok(()));
    }

    #[test]
    fn collectible_on_room_border_is_reported() {
        let mut level = two_room_level();
        connect_rooms(&mut level.grid, &level.rooms);
        level.collectibles.push(Collectible::in_cell(Pos { y: 2, x: 4 }, 32));
        assert_eq!(
            check_invariants(&level, 2),
            Err(InvariantViolation::CollectibleOutsideRoom(Pos { y: 2, x: 4 }))
        );
    }

    #[test]
    fn path_search_walks_around_walls() {
        let mut grid = Grid::new_walled(7, 5);
        for pos in [
            Pos { y: 1, x: 1 },
            Pos { y: 2, x: 1 },
            Pos { y: 3, x: 1 },
            Pos { y: 3, x: 2 },
            Pos { y: 3, x: 3 },
            Pos { y: 2, x: 3 },
            Pos { y: 1, x: 3 },
        ] {
            grid.carve(pos);
        }
        assert!(floor_path_exists(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 3 }));
        assert!(!floor_path_exists(&grid, Pos { y: 1, x: 1 }, Pos { y: 1, x: 5 }));
    }
}
