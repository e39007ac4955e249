//! Typed failures for configuration validation and level generation.

use thiserror::Error;

use crate::types::Pos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("placement attempt budget must be positive")]
    ZeroAttempts,

    #[error("room count range must allow at least one room")]
    ZeroRooms,

    #[error("range `{field}` is empty: min {min} > max {max}")]
    EmptyRange { field: &'static str, min: usize, max: usize },

    #[error("`{field}` minimum {min} leaves no room interior; need at least {required}")]
    RoomTooSmall { field: &'static str, min: usize, required: usize },

    #[error("room count maximum {max} exceeds the limit of {limit}")]
    TooManyRooms { max: usize, limit: usize },

    #[error("collectibles per room maximum {max} exceeds the limit of {limit}")]
    TooManyCollectibles { max: usize, limit: usize },

    #[error("grid {width}x{height} exceeds the limit of {max_cells} cells")]
    GridTooLarge { width: usize, height: usize, max_cells: usize },

    #[error(
        "grid {width}x{height} cannot hold the smallest room; need at least {min_width}x{min_height}"
    )]
    GridTooSmall { width: usize, height: usize, min_width: usize, min_height: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid generator configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no room could be placed ({requested} requested, {attempts} attempts per room)")]
    EmptyRoomSet { requested: usize, attempts: usize },
}

/// Structural defect found in a generated level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("outer wall ring is open at {0:?}")]
    RingBreached(Pos),

    #[error("rooms {first} and {second} are closer than the required separation")]
    RoomsTooClose { first: usize, second: usize },

    #[error("room {index} touches the outer wall margin")]
    RoomOutsideMargin { index: usize },

    #[error("collectible at {0:?} is not inside any room interior")]
    CollectibleOutsideRoom(Pos),

    #[error("start position {0:?} is not inside any room")]
    StartOutsideRooms(Pos),

    #[error("no floor path between room {from} and room {to}")]
    RoomsDisconnected { from: usize, to: usize },

    #[error("level has no rooms")]
    NoRooms,
}
