//! Plain-text rendering of a generated level for terminal inspection.

use dungeon::{GeneratedLevel, Pos};

pub const START: char = '@';
pub const COLLECTIBLE: char = '$';

/// The grid's `#`/`.` rows with collectibles and then the start marked on top.
pub fn render_level(level: &GeneratedLevel) -> String {
    let mut rows: Vec<Vec<char>> =
        level.grid.rows().iter().map(|row| row.chars().collect()).collect();
    for collectible in &level.collectibles {
        mark(&mut rows, collectible.cell, COLLECTIBLE);
    }
    mark(&mut rows, level.start, START);

    let mut out = String::with_capacity((level.width + 1) * level.height);
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn mark(rows: &mut [Vec<char>], pos: Pos, glyph: char) {
    let (Ok(y), Ok(x)) = (usize::try_from(pos.y), usize::try_from(pos.x)) else {
        return;
    };
    if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
        *cell = glyph;
    }
}

pub fn summary_lines(level: &GeneratedLevel) -> Vec<String> {
    let mut lines = vec![
        format!("Size: {}x{} cells, tile {}px", level.width, level.height, level.tile_size),
        format!("Start: x={} y={}", level.start.x, level.start.y),
        format!("Collectibles: {}", level.collectibles.len()),
        format!("Rooms: {}", level.rooms.len()),
    ];
    for (index, room) in level.rooms.iter().enumerate() {
        lines.push(format!(
            "  #{index}: x={} y={} w={} h={}",
            room.x, room.y, room.width, room.height
        ));
    }
    lines
}
