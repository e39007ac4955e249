pub mod config;
pub mod error;
pub mod mapgen;
pub mod movement;
pub mod rng;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::{GeneratorConfig, InclusiveRange, SessionConfig};
pub use error::{ConfigError, GenerationError, InvariantViolation};
pub use mapgen::{Collectible, GeneratedLevel, Grid, LevelGenerator, RoomRect, generate_level};
pub use movement::{CollisionMap, MoveOutcome, Unit};
pub use rng::{LevelRng, seeded_rng};
pub use session::{ActiveLevel, CollectibleId, MoveInput, RunSession, StepReport};
pub use types::*;
