use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::planning::cycle::generate_cycle;
use crate::state::app::AppState;
use crate::study::{CycleConfig, CycleDay, Subject};

/// Hash every input generation reads. Floats are hashed by bit pattern.
pub fn cycle_key(subjects: &[Subject], weekly_hours: f64, config: &CycleConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    for subject in subjects {
        subject.id.hash(&mut hasher);
        subject.name.hash(&mut hasher);
        subject.mastery().hash(&mut hasher);
    }
    weekly_hours.to_bits().hash(&mut hasher);
    config.force_all_subjects.hash(&mut hasher);
    config.subjects_per_cycle.hash(&mut hasher);
    config.focus_mode.hash(&mut hasher);
    config.avoid_consecutive.hash(&mut hasher);
    hasher.finish()
}

/// Generate a cycle, reusing a memoized result for identical inputs.
/// Generation is deterministic, so a hit is indistinguishable from a fresh run.
pub fn cached_cycle(
    state: &AppState,
    subjects: &[Subject],
    weekly_hours: f64,
    config: &CycleConfig,
) -> Vec<CycleDay> {
    let key = cycle_key(subjects, weekly_hours, config);

    if let Some(cycle) = state.cycle_cache.write().get(&key) {
        tracing::debug!(key = key, "Cycle cache hit");
        state.metrics.record_cache_hit();
        return cycle.clone();
    }

    tracing::debug!(key = key, "Cycle cache miss");
    state.metrics.record_cache_miss();

    let cycle = generate_cycle(subjects, weekly_hours, config);
    state.metrics.record_cycle_generated();
    state.cycle_cache.write().put(key, cycle.clone());
    cycle
}
