//! Scripted random source for unit tests that need exact draw sequences.

use std::collections::VecDeque;

use crate::rng::LevelRng;

#[derive(Clone, Copy, Debug)]
enum Fallback {
    Min,
    Max,
}

/// Replays queued values in order, then falls back to the low or high end of
/// each requested range. A queued value outside its range is a test bug.
pub(crate) struct ScriptedRng {
    values: VecDeque<usize>,
    fallback: Fallback,
}

impl ScriptedRng {
    pub(crate) fn new(values: Vec<usize>) -> Self {
        Self { values: values.into(), fallback: Fallback::Min }
    }

    pub(crate) fn always_max(values: Vec<usize>) -> Self {
        Self { values: values.into(), fallback: Fallback::Max }
    }
}

impl LevelRng for ScriptedRng {
    fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        match self.values.pop_front() {
            Some(value) => {
                assert!(
                    (min..=max).contains(&value),
                    "scripted value {value} outside requested range {min}..={max}"
                );
                value
            }
            None => match self.fallback {
                Fallback::Min => min,
                Fallback::Max => max,
            },
        }
    }
}
