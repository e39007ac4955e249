//! Procedural level generation split into coherent submodules.

pub mod invariants;
pub mod model;

mod corridors;
mod generator;
mod grid;
mod layout;
mod spawns;

pub use corridors::{carve_corridor, connect_rooms};
pub use generator::LevelGenerator;
pub use grid::Grid;
pub use layout::{RoomPlacement, RoomRect, carve_room, place_rooms};
pub use model::{Collectible, GeneratedLevel};
pub use spawns::{SpawnPlan, plan_spawns};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::seeded_rng;

/// Validates `config` and generates one level from a `ChaCha8Rng` seeded with `seed`.
pub fn generate_level(seed: u64, config: &GeneratorConfig) -> Result<GeneratedLevel, GenerationError> {
    let generator = LevelGenerator::new(config.clone())?;
    generator.generate(&mut seeded_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::{GeneratorConfig, LevelGenerator};
    use crate::config::{InclusiveRange, MAX_ROOMS};
    use crate::error::{ConfigError, GenerationError};
    use crate::rng::seeded_rng;

    #[test]
    fn generate_level_matches_level_generator_output() {
        let seed = 123_u64;
        let config = GeneratorConfig::default();

        let from_helper = super::generate_level(seed, &config).expect("level");
        let from_generator = LevelGenerator::new(config)
            .expect("valid")
            .generate(&mut seeded_rng(seed))
            .expect("level");

        assert_eq!(from_helper, from_generator);
    }

    #[test]
    fn generate_level_surfaces_config_errors() {
        let config = GeneratorConfig { tile_size: 0, ..GeneratorConfig::default() };
        assert_eq!(
            super::generate_level(1, &config),
            Err(GenerationError::Config(ConfigError::ZeroTileSize))
        );
    }

    #[test]
    fn runaway_room_counts_fail_before_generation() {
        let runaway = [InclusiveRange::new(usize::MAX, usize::MAX), InclusiveRange::new(0, usize::MAX)];
        for room_count in runaway {
            let config = GeneratorConfig { room_count, ..GeneratorConfig::default() };
            assert_eq!(
                super::generate_level(1, &config),
                Err(GenerationError::Config(ConfigError::TooManyRooms {
                    max: usize::MAX,
                    limit: MAX_ROOMS,
                }))
            );
        }
    }
}
