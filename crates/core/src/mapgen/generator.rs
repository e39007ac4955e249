//! High-level level generation orchestration that composes rooms, corridors, and spawns.

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GenerationError};
use crate::rng::LevelRng;

use super::corridors::connect_rooms;
use super::grid::Grid;
use super::layout::place_rooms;
use super::model::GeneratedLevel;
use super::spawns::plan_spawns;

#[derive(Clone, Debug)]
pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a fresh level from `rng`. Each call consumes randomness, so repeated
    /// calls give different layouts unless the source is reseeded.
    pub fn generate<R: LevelRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GeneratedLevel, GenerationError> {
        let config = &self.config;
        let mut grid = Grid::new_walled(config.width, config.height);

        let placement = place_rooms(&mut grid, config, rng);
        if placement.skipped() > 0 {
            log::debug!(
                "placed {} of {} requested rooms",
                placement.rooms.len(),
                placement.requested
            );
        }

        let corridor_cells = connect_rooms(&mut grid, &placement.rooms);
        log::debug!("corridors opened {corridor_cells} cells");

        let Some(spawns) = plan_spawns(&placement.rooms, config, rng) else {
            log::warn!(
                "no rooms fit a {}x{} grid after {} attempts per room",
                config.width,
                config.height,
                config.placement_attempts
            );
            return Err(GenerationError::EmptyRoomSet {
                requested: placement.requested,
                attempts: config.placement_attempts,
            });
        };

        let level = GeneratedLevel {
            width: config.width,
            height: config.height,
            tile_size: config.tile_size,
            grid,
            rooms: placement.rooms,
            start: spawns.start,
            collectibles: spawns.collectibles,
        };
        log::info!(
            "generated {}x{} level: {} rooms, {} collectibles, start {:?} in room {}, fingerprint {:016x}",
            level.width,
            level.height,
            level.rooms.len(),
            level.collectibles.len(),
            level.start,
            spawns.start_room,
            level.fingerprint()
        );
        Ok(level)
    }
}
