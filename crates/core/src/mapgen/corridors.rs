//! L-shaped corridors between consecutively placed rooms, with 3-wide doorways.
//! Rooms are linked in generation order, so the result is a path graph rather
//! than a spanning tree over spatial neighbours.

use crate::types::Pos;

use super::grid::Grid;
use super::layout::RoomRect;

/// Links `rooms[i]` to `rooms[i + 1]` for every consecutive pair and returns how
/// many wall cells were opened.
pub fn connect_rooms(grid: &mut Grid, rooms: &[RoomRect]) -> usize {
    let mut opened = 0;
    for (index, pair) in rooms.windows(2).enumerate() {
        let start = pair[0].center();
        let end = pair[1].center();
        let carved = carve_corridor(grid, start, end);
        log::trace!("corridor {index}->{} from {start:?} to {end:?} opened {carved} cells", index + 1);
        opened += carved;
    }
    opened
}

/// Horizontal run along the start row, then vertical run along the end column.
pub fn carve_corridor(grid: &mut Grid, start: Pos, end: Pos) -> usize {
    carve_horizontal_run(grid, start.y, start.x, end.x)
        + carve_vertical_run(grid, end.x, start.y, end.y)
}

/// Carves row `y` between two columns; at either endpoint column the cells above
/// and below are opened as well.
fn carve_horizontal_run(grid: &mut Grid, y: i32, from_x: i32, to_x: i32) -> usize {
    let mut opened = 0;
    for x in from_x.min(to_x)..=from_x.max(to_x) {
        opened += usize::from(grid.carve(Pos { y, x }));
        if x == from_x || x == to_x {
            opened += usize::from(grid.carve(Pos { y: y - 1, x }));
            opened += usize::from(grid.carve(Pos { y: y + 1, x }));
        }
    }
    opened
}

/// Carves column `x` between two rows; at either endpoint row the cells left and
/// right are opened as well.
fn carve_vertical_run(grid: &mut Grid, x: i32, from_y: i32, to_y: i32) -> usize {
    let mut opened = 0;
    for y in from_y.min(to_y)..=from_y.max(to_y) {
        opened += usize::from(grid.carve(Pos { y, x }));
        if y == from_y || y == to_y {
            opened += usize::from(grid.carve(Pos { y, x: x - 1 }));
            opened += usize::from(grid.carve(Pos { y, x: x + 1 }));
        }
    }
    opened
}
