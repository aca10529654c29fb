use std::cmp::Ordering;

use crate::planning::weighting::compute_weight;
use crate::study::{CycleConfig, CycleDay, CycleSlot, FocusMode, Subject};

/// Length of the rotation, independent of the weekly budget.
pub const DAYS_IN_CYCLE: usize = 14;
pub const MAX_SLOTS_PER_DAY: usize = 4;
/// Floor for a day's target; also the point below which avoid-consecutive yields.
pub const MIN_DAILY_HOURS: f64 = 1.0;
pub const MIN_SLOT_HOURS: f64 = 0.5;
pub const MAX_SLOT_HOURS: f64 = 2.5;
const MIN_AVERAGE_DAILY_HOURS: f64 = 1.5;
/// Never equal to `day - 1` for any day >= 0.
const NEVER_USED: i64 = -3;

pub const DAY_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// Static weekday label for a 0-based cycle position.
pub fn day_name(index: usize) -> &'static str {
    DAY_NAMES[index % DAY_NAMES.len()]
}

/// A pool subject plus the counters one generation run mutates.
/// Lives only for the duration of a single `generate_cycle` call.
#[derive(Debug, Clone)]
pub struct WeightedSubject<'a> {
    pub subject: &'a Subject,
    pub weight: f64,
    pub times_used: u32,
    pub last_used_day: i64,
}

impl<'a> WeightedSubject<'a> {
    pub fn new(subject: &'a Subject, focus_mode: FocusMode) -> Self {
        WeightedSubject {
            subject,
            weight: compute_weight(subject.mastery(), focus_mode),
            times_used: 0,
            last_used_day: NEVER_USED,
        }
    }

    fn used_on(&self, day: i64) -> bool {
        self.last_used_day == day
    }

    fn decayed_weight(&self) -> f64 {
        self.weight / (self.times_used + 1) as f64
    }
}

/// Hours each day aims for: the two-week average with a 1.5h floor, capped by
/// the flat weekly share, and never below 1h.
pub fn daily_target_hours(weekly_hours: f64) -> f64 {
    // NaN and negatives both land on 0.
    let weekly = weekly_hours.max(0.0);
    let average = (weekly * 2.0 / DAYS_IN_CYCLE as f64).max(MIN_AVERAGE_DAILY_HOURS);
    average.min(weekly / 7.0).max(MIN_DAILY_HOURS)
}

/// Duration for the next pick: the remaining hours spread over the slots still
/// open today, within [0.5, 2.5].
pub fn slot_hours(remaining: f64, slots_today: usize) -> f64 {
    let open_slots = MAX_SLOTS_PER_DAY.saturating_sub(slots_today).max(1);
    let spread = remaining / open_slots as f64;
    spread.min(MAX_SLOT_HOURS.min(remaining)).max(MIN_SLOT_HOURS)
}

/// Weighted pool for one run. With `force_all_subjects` every subject is kept in
/// input order; otherwise the top `subjects_per_cycle` by weight, ties in input order.
pub fn select_pool<'a>(subjects: &'a [Subject], config: &CycleConfig) -> Vec<WeightedSubject<'a>> {
    let mut weighted: Vec<WeightedSubject<'a>> = subjects
        .iter()
        .map(|s| WeightedSubject::new(s, config.focus_mode))
        .collect();

    if !config.force_all_subjects {
        // sort_by is stable
        weighted.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        weighted.truncate(config.subjects_per_cycle);
    }

    weighted
}

fn pick(pool: &[WeightedSubject<'_>], candidates: &[usize], focus_mode: FocusMode) -> Option<usize> {
    let (&first, rest) = candidates.split_first()?;

    let chosen = rest.iter().copied().fold(first, |best, current| {
        let (b, c) = (&pool[best], &pool[current]);
        let better = match focus_mode {
            FocusMode::Balanced => {
                c.times_used < b.times_used
                    || (c.times_used == b.times_used && c.weight > b.weight)
            }
            FocusMode::Priority | FocusMode::Difficulty => c.decayed_weight() > b.decayed_weight(),
        };
        if better { current } else { best }
    });

    Some(chosen)
}

fn build_day(index: usize, total_hours: f64, tasks: Vec<CycleSlot>) -> CycleDay {
    let day = index as u32 + 1;
    CycleDay {
        day,
        day_name: day_name(index).to_string(),
        subject: "Scheduled study".to_string(),
        topic: Some(format!("Day {}", day)),
        subtopic: Some(format!("{:.1}h of study", total_hours)),
        color: "#8884d8".to_string(),
        duration: format!("{:.1}h", total_hours),
        focus: "Planned".to_string(),
        priority: 1,
        tasks,
        total_planned_hours: total_hours,
    }
}

/// Distribute `subjects` over a 14-day rotation.
///
/// Each day greedily picks subjects until it reaches its target hours, holds
/// four picks, or runs out of eligible subjects. A subject is picked at most once
/// per day. With `avoid_consecutive`, yesterday's subjects are skipped unless the
/// day would otherwise stay below `MIN_DAILY_HOURS` with nothing else to pick.
///
/// Deterministic: the same inputs always yield the same cycle. An empty subject
/// list yields an empty cycle.
pub fn generate_cycle(subjects: &[Subject], weekly_hours: f64, config: &CycleConfig) -> Vec<CycleDay> {
    if subjects.is_empty() {
        tracing::warn!("No subjects provided for cycle generation");
        return Vec::new();
    }

    let target = daily_target_hours(weekly_hours);
    let mut pool = select_pool(subjects, config);
    let max_attempts = pool.len() * 3;

    tracing::info!(
        subjects = subjects.len(),
        pool = pool.len(),
        weekly_hours = weekly_hours,
        target_hours = target,
        focus_mode = ?config.focus_mode,
        avoid_consecutive = config.avoid_consecutive,
        "Generating study cycle"
    );
    if pool.is_empty() {
        tracing::warn!(
            subjects_per_cycle = config.subjects_per_cycle,
            "Subject pool is empty, cycle days will carry no study time"
        );
    }

    let mut cycle = Vec::with_capacity(DAYS_IN_CYCLE);

    for index in 0..DAYS_IN_CYCLE {
        let day = index as i64;
        let mut picked: Vec<usize> = Vec::with_capacity(MAX_SLOTS_PER_DAY);
        let mut tasks: Vec<CycleSlot> = Vec::with_capacity(MAX_SLOTS_PER_DAY);
        let mut day_hours = 0.0;
        let mut attempts = 0;

        while day_hours < target && picked.len() < MAX_SLOTS_PER_DAY && attempts < max_attempts {
            attempts += 1;

            let fresh: Vec<usize> = (0..pool.len()).filter(|i| !picked.contains(i)).collect();
            let mut eligible: Vec<usize> = fresh
                .iter()
                .copied()
                .filter(|&i| !(config.avoid_consecutive && pool[i].used_on(day - 1)))
                .collect();

            if eligible.is_empty() && day_hours < MIN_DAILY_HOURS && !fresh.is_empty() {
                tracing::debug!(day = index + 1, "Only yesterday's subjects left, relaxing avoid-consecutive");
                eligible = fresh;
            }

            let Some(chosen) = pick(&pool, &eligible, config.focus_mode) else {
                tracing::debug!(day = index + 1, hours = day_hours, "No eligible subjects left for day");
                break;
            };

            let hours = slot_hours(target - day_hours, picked.len());
            let entry = &mut pool[chosen];
            entry.times_used += 1;
            entry.last_used_day = day;
            day_hours += hours;

            tracing::debug!(
                day = index + 1,
                subject = %entry.subject.name,
                hours = hours,
                day_hours = day_hours,
                times_used = entry.times_used,
                "Scheduled subject"
            );

            picked.push(chosen);
            tasks.push(CycleSlot {
                subject_id: entry.subject.id.clone(),
                subject: entry.subject.name.clone(),
                hours,
            });
        }

        cycle.push(build_day(index, day_hours, tasks));
    }

    tracing::info!(days = cycle.len(), "Cycle generation completed");
    cycle
}
