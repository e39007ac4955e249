//! Generator and session tuning, loadable from any serde format.
//! Defaults reproduce a 1024x768 display split into 32px tiles.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TILE_SIZE: u32 = 32;
pub const DEFAULT_DISPLAY_WIDTH: u32 = 1024;
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 768;

/// Rooms keep this many wall cells between their floor and the outer ring.
pub const RING_MARGIN: usize = 1;

pub const MAX_ROOMS: usize = 256;
pub const MAX_COLLECTIBLES_PER_ROOM: usize = 256;
pub const MAX_GRID_CELLS: usize = 1 << 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub min: usize,
    pub max: usize,
}

impl InclusiveRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange { field, min: self.min, max: self.max });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub tile_size: u32,
    pub width: usize,
    pub height: usize,
    pub room_count: InclusiveRange,
    pub room_width: InclusiveRange,
    pub room_height: InclusiveRange,
    pub placement_attempts: usize,
    /// Candidate inflation, in cells, tested against the raw bounds of accepted rooms.
    pub room_separation: usize,
    pub collectibles_per_room: InclusiveRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_display(DEFAULT_DISPLAY_WIDTH, DEFAULT_DISPLAY_HEIGHT, DEFAULT_TILE_SIZE)
    }
}

impl GeneratorConfig {
    /// Grid dimensions derived from a display resolution; a zero tile size is
    /// left for `validate` to report.
    pub fn for_display(display_width: u32, display_height: u32, tile_size: u32) -> Self {
        Self {
            tile_size,
            width: display_width.checked_div(tile_size).unwrap_or(0) as usize,
            height: display_height.checked_div(tile_size).unwrap_or(0) as usize,
            room_count: InclusiveRange::new(5, 10),
            room_width: InclusiveRange::new(5, 10),
            room_height: InclusiveRange::new(4, 8),
            placement_attempts: 100,
            room_separation: 2,
            collectibles_per_room: InclusiveRange::new(1, 3),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        self.room_count.check("room_count")?;
        self.room_width.check("room_width")?;
        self.room_height.check("room_height")?;
        self.collectibles_per_room.check("collectibles_per_room")?;
        if self.room_count.max == 0 {
            return Err(ConfigError::ZeroRooms);
        }
        if self.room_count.max > MAX_ROOMS {
            return Err(ConfigError::TooManyRooms { max: self.room_count.max, limit: MAX_ROOMS });
        }
        if self.collectibles_per_room.max > MAX_COLLECTIBLES_PER_ROOM {
            return Err(ConfigError::TooManyCollectibles {
                max: self.collectibles_per_room.max,
                limit: MAX_COLLECTIBLES_PER_ROOM,
            });
        }

        // A room needs at least one interior cell inside its 1-cell border.
        const MIN_ROOM_EDGE: usize = 3;
        if self.room_width.min < MIN_ROOM_EDGE {
            return Err(ConfigError::RoomTooSmall {
                field: "room_width",
                min: self.room_width.min,
                required: MIN_ROOM_EDGE,
            });
        }
        if self.room_height.min < MIN_ROOM_EDGE {
            return Err(ConfigError::RoomTooSmall {
                field: "room_height",
                min: self.room_height.min,
                required: MIN_ROOM_EDGE,
            });
        }

        let min_width = self.room_width.min.saturating_add(2 * (RING_MARGIN + 1));
        let min_height = self.room_height.min.saturating_add(2 * (RING_MARGIN + 1));
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        if self.width.checked_mul(self.height).is_none_or(|cells| cells > MAX_GRID_CELLS) {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max_cells: MAX_GRID_CELLS,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cells moved per held direction per step.
    pub step_size: f32,
    pub points_per_collectible: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { step_size: 0.25, points_per_collectible: 10 }
    }
}
