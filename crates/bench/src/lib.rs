use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_RUNTIME_MIN_LEN: usize = 1 << 16;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime profile from the sequence length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_RUNTIME_MIN_LEN {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Number of selected elements for a density given in per mille, at least one
/// for non-empty sequences.
pub fn selection_len(len: usize, per_mille: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (len * per_mille / 1000).clamp(1, len)
}

/// One rearrange call: distinct source indices in random order plus a target
/// that is valid for them.
#[derive(Clone, Debug)]
pub struct Workload {
    pub indices: Vec<usize>,
    pub target: usize,
}

pub fn random_workload<R: Rng + ?Sized>(rng: &mut R, len: usize, selected: usize) -> Workload {
    debug_assert!(selected <= len);
    let indices = sample(rng, len, selected).into_vec();
    let target = rng.random_range(0..=len - selected);
    Workload { indices, target }
}

/// Like [`random_workload`], but the selection is one contiguous run, which
/// is the common "drag a block of rows" case.
pub fn contiguous_workload<R: Rng + ?Sized>(rng: &mut R, len: usize, selected: usize) -> Workload {
    debug_assert!(selected <= len);
    let start = rng.random_range(0..=len - selected);
    let target = rng.random_range(0..=len - selected);
    Workload {
        indices: (start..start + selected).collect(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_len_is_clamped() {
        assert_eq!(selection_len(1000, 0), 1);
        assert_eq!(selection_len(1000, 10), 10);
        assert_eq!(selection_len(1000, 1000), 1000);
        assert_eq!(selection_len(0, 500), 0);
    }

    #[test]
    fn workloads_are_valid() {
        let mut rng = default_rng();
        for &(len, selected) in &[(1_usize, 1_usize), (10, 0), (10, 10), (500, 37)] {
            for workload in [
                random_workload(&mut rng, len, selected),
                contiguous_workload(&mut rng, len, selected),
            ] {
                let mut sorted = workload.indices.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), selected);
                assert!(sorted.iter().all(|&i| i < len));
                assert!(workload.target <= len - selected);
            }
        }
    }
}
