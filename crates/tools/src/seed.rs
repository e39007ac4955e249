//! Seed selection: an explicit `--seed` wins, otherwise one is mixed from the clock.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cli(_) => "cli",
            Self::Generated(_) => "generated",
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn resolve_seed(cli_seed: Option<u64>) -> SeedChoice {
    match cli_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generate_runtime_seed()),
    }
}

/// Derives the seed of the `index`-th level in a batch from a base seed.
pub fn level_seed(base: u64, index: u64) -> u64 {
    mix_seed(base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_kept() {
        assert_eq!(resolve_seed(Some(4_242)), SeedChoice::Cli(4_242));
        assert_eq!(resolve_seed(Some(4_242)).value(), 4_242);
    }

    #[test]
    fn missing_seed_is_generated() {
        assert!(matches!(resolve_seed(None), SeedChoice::Generated(_)));
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }

    #[test]
    fn batch_seeds_differ_per_index() {
        assert_ne!(level_seed(7, 0), level_seed(7, 1));
        assert_eq!(level_seed(7, 3), level_seed(7, 3));
    }
}
