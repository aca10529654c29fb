use std::collections::HashMap;

use crate::study::{FocusMode, MasteryLevel, Subject};

/// Mastery levels recorded by the assessment step, keyed by subject name.
pub type MasteryLevels = HashMap<String, MasteryLevel>;

/// Scheduling weight for one subject: base weight by mastery, scaled by focus mode.
/// Always finite and >= 1.
pub fn compute_weight(level: MasteryLevel, focus_mode: FocusMode) -> f64 {
    level.base_weight() * focus_mode.weight_multiplier()
}

/// Level for `subject`: the recorded assessment wins, then the subject's own
/// level, then intermediate.
pub fn resolve_level(subject: &Subject, levels: &MasteryLevels) -> MasteryLevel {
    levels
        .get(&subject.name)
        .copied()
        .unwrap_or_else(|| subject.mastery())
}

/// Copy `subjects` with recorded assessment levels written onto them.
pub fn apply_levels(subjects: &[Subject], levels: &MasteryLevels) -> Vec<Subject> {
    subjects
        .iter()
        .map(|s| {
            let mut s = s.clone();
            s.level = Some(resolve_level(&s, levels));
            s
        })
        .collect()
}

/// Combined level + priority weight used when building the initial plan.
/// Rounded to one decimal place, never below 1.
pub fn assessment_weight(level: MasteryLevel, priority: u32) -> f64 {
    let combined = level.base_weight() + (priority.max(1) - 1) as f64 * 0.5;
    ((combined * 10.0).round() / 10.0).max(1.0)
}
