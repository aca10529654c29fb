use std::collections::{HashMap, HashSet};

use study_planner_lib::planning::cycle::{
    daily_target_hours, generate_cycle, slot_hours, DAYS_IN_CYCLE, MAX_SLOTS_PER_DAY,
    MAX_SLOT_HOURS, MIN_SLOT_HOURS,
};
use study_planner_lib::study::{CycleConfig, CycleDay, FocusMode, MasteryLevel, Subject};

fn subject(id: &str, name: &str, level: MasteryLevel) -> Subject {
    Subject::new(id, name).with_level(level)
}

fn abc() -> Vec<Subject> {
    vec![
        subject("a", "A", MasteryLevel::Beginner),
        subject("b", "B", MasteryLevel::Intermediate),
        subject("c", "C", MasteryLevel::Advanced),
    ]
}

fn many(n: usize) -> Vec<Subject> {
    let levels = [MasteryLevel::Beginner, MasteryLevel::Intermediate, MasteryLevel::Advanced];
    (0..n)
        .map(|i| subject(&i.to_string(), &format!("S{}", i), levels[i % 3]))
        .collect()
}

fn config(focus_mode: FocusMode, avoid_consecutive: bool) -> CycleConfig {
    CycleConfig {
        force_all_subjects: true,
        subjects_per_cycle: 3,
        rotation_intensity: 1.0,
        focus_mode,
        avoid_consecutive,
    }
}

fn names(day: &CycleDay) -> HashSet<String> {
    day.tasks.iter().map(|t| t.subject.clone()).collect()
}

fn usage(cycle: &[CycleDay]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for day in cycle {
        for task in &day.tasks {
            *counts.entry(task.subject.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[test]
fn empty_subjects_yield_empty_cycle() {
    for mode in [FocusMode::Balanced, FocusMode::Priority, FocusMode::Difficulty] {
        assert!(generate_cycle(&[], 20.0, &config(mode, true)).is_empty());
        assert!(generate_cycle(&[], 0.0, &config(mode, false)).is_empty());
    }
}

#[test]
fn cycle_always_has_fourteen_days() {
    for weekly in [0.0, 3.0, 20.0, 80.0] {
        let cycle = generate_cycle(&abc(), weekly, &config(FocusMode::Balanced, true));
        assert_eq!(cycle.len(), DAYS_IN_CYCLE);
        for (i, day) in cycle.iter().enumerate() {
            assert_eq!(day.day as usize, i + 1);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let subjects = many(7);
    for mode in [FocusMode::Balanced, FocusMode::Priority, FocusMode::Difficulty] {
        let cfg = config(mode, true);
        let first = generate_cycle(&subjects, 25.0, &cfg);
        let second = generate_cycle(&subjects, 25.0, &cfg);
        assert_eq!(first, second);
    }
}

#[test]
fn weekday_labels_repeat_across_both_weeks() {
    let cycle = generate_cycle(&abc(), 20.0, &config(FocusMode::Balanced, false));
    assert_eq!(cycle[0].day_name, "Monday");
    assert_eq!(cycle[6].day_name, "Sunday");
    assert_eq!(cycle[7].day_name, "Monday");
    assert_eq!(cycle[13].day_name, "Sunday");
}

#[test]
fn days_hold_at_most_four_distinct_subjects() {
    let cycle = generate_cycle(&many(10), 60.0, &config(FocusMode::Priority, false));
    for day in &cycle {
        assert!(day.tasks.len() <= MAX_SLOTS_PER_DAY);
        assert_eq!(names(day).len(), day.tasks.len(), "duplicate subject on day {}", day.day);
    }
}

#[test]
fn slot_durations_and_totals_are_bounded() {
    for weekly in [0.0, 5.0, 20.0, 100.0] {
        let cycle = generate_cycle(&many(6), weekly, &config(FocusMode::Difficulty, true));
        for day in &cycle {
            assert!(day.total_planned_hours >= 0.0);
            let sum: f64 = day.tasks.iter().map(|t| t.hours).sum();
            assert!((sum - day.total_planned_hours).abs() < 1e-9);
            for task in &day.tasks {
                assert!(task.hours >= MIN_SLOT_HOURS && task.hours <= MAX_SLOT_HOURS);
            }
        }
    }
}

#[test]
fn negative_and_tiny_budgets_are_floored() {
    assert_eq!(daily_target_hours(-10.0), 1.0);
    assert_eq!(daily_target_hours(0.0), 1.0);
    assert_eq!(daily_target_hours(f64::NAN), 1.0);
    assert!((daily_target_hours(20.0) - 20.0 / 7.0).abs() < 1e-9);

    let cycle = generate_cycle(&abc(), -5.0, &config(FocusMode::Balanced, false));
    assert!(cycle.iter().all(|d| d.total_planned_hours >= 1.0));
}

#[test]
fn slot_hours_spread_over_open_slots() {
    assert_eq!(slot_hours(2.0, 0), 0.5);
    assert_eq!(slot_hours(4.0, 0), 1.0);
    assert_eq!(slot_hours(10.0, 3), 2.5);
    assert_eq!(slot_hours(0.2, 3), 0.5);
}

#[test]
fn avoid_consecutive_keeps_adjacent_days_disjoint() {
    let cycle = generate_cycle(&many(8), 20.0, &config(FocusMode::Balanced, true));
    for pair in cycle.windows(2) {
        let overlap: Vec<_> = names(&pair[0]).intersection(&names(&pair[1])).cloned().collect();
        assert!(overlap.is_empty(), "days {} and {} share {:?}", pair[0].day, pair[1].day, overlap);
    }
}

#[test]
fn pool_is_restricted_to_heaviest_subjects() {
    let subjects = vec![
        subject("1", "Advanced1", MasteryLevel::Advanced),
        subject("2", "Beginner1", MasteryLevel::Beginner),
        subject("3", "Middle1", MasteryLevel::Intermediate),
        subject("4", "Beginner2", MasteryLevel::Beginner),
        subject("5", "Advanced2", MasteryLevel::Advanced),
    ];
    let cfg = CycleConfig {
        force_all_subjects: false,
        subjects_per_cycle: 2,
        ..config(FocusMode::Priority, false)
    };

    let cycle = generate_cycle(&subjects, 30.0, &cfg);
    let used: HashSet<String> = usage(&cycle).into_keys().collect();
    let expected: HashSet<String> = ["Beginner1", "Beginner2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(used, expected);
}

#[test]
fn pool_ties_keep_input_order() {
    let subjects = vec![
        subject("1", "First", MasteryLevel::Intermediate),
        subject("2", "Second", MasteryLevel::Intermediate),
        subject("3", "Third", MasteryLevel::Intermediate),
    ];
    let cfg = CycleConfig {
        force_all_subjects: false,
        subjects_per_cycle: 2,
        ..config(FocusMode::Balanced, false)
    };

    let used: HashSet<String> = usage(&generate_cycle(&subjects, 20.0, &cfg)).into_keys().collect();
    assert!(used.contains("First") && used.contains("Second"));
    assert!(!used.contains("Third"));
}

#[test]
fn three_subject_scenario() {
    let cycle = generate_cycle(&abc(), 20.0, &config(FocusMode::Balanced, true));
    let target = 20.0 / 7.0;

    assert_eq!(cycle.len(), 14);
    for day in &cycle {
        assert!(day.total_planned_hours >= 1.0, "day {} too short", day.day);
        assert!(day.total_planned_hours <= target + 1e-9, "day {} over target", day.day);
    }

    let counts = usage(&cycle);
    assert!(counts["A"] >= counts["C"]);
}

#[test]
fn single_subject_still_fills_every_day() {
    let subjects = vec![subject("only", "Only", MasteryLevel::Beginner)];
    let cycle = generate_cycle(&subjects, 20.0, &config(FocusMode::Balanced, true));

    assert_eq!(cycle.len(), 14);
    for day in &cycle {
        assert_eq!(day.tasks.len(), 1);
        assert_eq!(day.tasks[0].subject, "Only");
        assert!(day.total_planned_hours > 0.0);
    }
}

#[test]
fn priority_mode_favours_weaker_subjects() {
    let subjects = vec![
        subject("w", "Weak", MasteryLevel::Beginner),
        subject("s1", "Strong1", MasteryLevel::Advanced),
        subject("s2", "Strong2", MasteryLevel::Advanced),
        subject("s3", "Strong3", MasteryLevel::Advanced),
        subject("s4", "Strong4", MasteryLevel::Advanced),
        subject("s5", "Strong5", MasteryLevel::Advanced),
    ];
    let cycle = generate_cycle(&subjects, 14.0, &config(FocusMode::Priority, false));
    let counts = usage(&cycle);
    for strong in ["Strong1", "Strong2", "Strong3", "Strong4", "Strong5"] {
        assert!(counts["Weak"] >= counts.get(strong).copied().unwrap_or(0));
    }
}

#[test]
fn cycle_days_carry_display_summary() {
    let cycle = generate_cycle(&abc(), 20.0, &config(FocusMode::Balanced, false));
    let first = &cycle[0];
    assert_eq!(first.topic.as_deref(), Some("Day 1"));
    assert_eq!(first.duration, format!("{:.1}h", first.total_planned_hours));
    assert_eq!(first.priority, 1);
}
