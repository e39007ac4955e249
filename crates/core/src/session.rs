//! Explicit run state for a driving game loop: score, level counter, the active
//! level snapshot and the player unit.
//! It does not own rendering, input polling, or frame timing.

use slotmap::{SlotMap, new_key_type};

use crate::config::SessionConfig;
use crate::error::GenerationError;
use crate::mapgen::{Collectible, GeneratedLevel, LevelGenerator};
use crate::movement::{CollisionMap, MoveOutcome, Unit};
use crate::rng::LevelRng;
use crate::types::{PixelRect, Pos};

new_key_type! {
    pub struct CollectibleId;
}

/// A generated level plus the pickups still lying in it. Replaced as a whole on
/// level transition; `layout` is never edited after generation.
#[derive(Clone, Debug)]
pub struct ActiveLevel {
    layout: GeneratedLevel,
    remaining: SlotMap<CollectibleId, Collectible>,
}

impl ActiveLevel {
    pub fn new(layout: GeneratedLevel) -> Self {
        let mut remaining = SlotMap::with_capacity_and_key(layout.collectibles.len());
        for collectible in &layout.collectibles {
            remaining.insert(collectible.clone());
        }
        Self { layout, remaining }
    }

    pub fn layout(&self) -> &GeneratedLevel {
        &self.layout
    }

    pub fn start(&self) -> Pos {
        self.layout.start
    }

    pub fn obstacles(&self) -> CollisionMap<'_> {
        CollisionMap::new(&self.layout.grid, self.layout.tile_size)
    }

    pub fn wall_rects(&self) -> Vec<PixelRect> {
        self.layout.grid.wall_rects(self.layout.tile_size)
    }

    pub fn collectibles(&self) -> impl Iterator<Item = (CollectibleId, &Collectible)> {
        self.remaining.iter()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Removes every collectible overlapping `rect` and returns how many were taken.
    pub fn collect_touching(&mut self, rect: &PixelRect) -> usize {
        let touched: Vec<CollectibleId> = self
            .remaining
            .iter()
            .filter(|(_, collectible)| collectible.rect.intersects(rect))
            .map(|(id, _)| id)
            .collect();
        for id in &touched {
            self.remaining.remove(*id);
        }
        touched.len()
    }
}

/// Directions held during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveInput {
    /// One single-axis delta per held direction, in left, right, up, down order.
    pub fn deltas(self, step: f32) -> impl Iterator<Item = (f32, f32)> {
        [
            (self.left, (-step, 0.0)),
            (self.right, (step, 0.0)),
            (self.up, (0.0, -step)),
            (self.down, (0.0, step)),
        ]
        .into_iter()
        .filter_map(|(held, delta)| held.then_some(delta))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub moves: u8,
    pub blocked: u8,
    pub collected: usize,
    pub advanced_level: bool,
}

pub struct RunSession {
    generator: LevelGenerator,
    config: SessionConfig,
    level_index: u32,
    score: u64,
    level: ActiveLevel,
    unit: Unit,
}

impl RunSession {
    pub fn start<R: LevelRng + ?Sized>(
        generator: LevelGenerator,
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        let level = ActiveLevel::new(generator.generate(rng)?);
        let unit = Unit::new(level.start(), generator.config().tile_size);
        Ok(Self { generator, config, level_index: 1, score: 0, level, unit })
    }

    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> &ActiveLevel {
        &self.level
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Applies held directions one axis at a time, picks up touched collectibles,
    /// and swaps in a new level once the current one is cleared. If that
    /// generation fails the cleared level stays active and the error is returned.
    pub fn step<R: LevelRng + ?Sized>(
        &mut self,
        input: MoveInput,
        rng: &mut R,
    ) -> Result<StepReport, GenerationError> {
        let mut report = StepReport::default();

        let obstacles = self.level.obstacles();
        for (dx, dy) in input.deltas(self.config.step_size) {
            match self.unit.try_move(dx, dy, &obstacles) {
                MoveOutcome::Moved => report.moves += 1,
                MoveOutcome::Blocked => report.blocked += 1,
            }
        }

        report.collected = self.level.collect_touching(&self.unit.rect());
        self.score += report.collected as u64 * self.config.points_per_collectible;

        if self.level.is_cleared() {
            self.advance_level(rng)?;
            report.advanced_level = true;
        }
        Ok(report)
    }

    fn advance_level<R: LevelRng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GenerationError> {
        let next = ActiveLevel::new(self.generator.generate(rng)?);
        self.unit = Unit::new(next.start(), self.generator.config().tile_size);
        self.level = next;
        self.level_index += 1;
        log::info!("level {} started with score {}", self.level_index, self.score);
        Ok(())
    }
}
