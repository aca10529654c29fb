use serde::{Serialize, Deserialize};

use crate::planning::cycle::{generate_cycle, DAY_NAMES};
use crate::planning::weighting::{apply_levels, assessment_weight, resolve_level, MasteryLevels};
use crate::study::exam::palette_color;
use crate::study::plan::{ScheduledSubject, SubjectShare, WeeklySchedule};
use crate::study::{CycleConfig, MasteryLevel, PlanType, StudyPlan, Subject};

/// A subject after the mastery assessment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessedSubject {
    pub name: String,
    pub level: MasteryLevel,
    pub weight: f64,
    pub color: String,
}

/// True once every subject has a recorded level.
pub fn is_assessment_complete(subjects: &[Subject], levels: &MasteryLevels) -> bool {
    subjects.iter().all(|s| levels.contains_key(&s.name))
}

pub fn assess_subjects(subjects: &[Subject], levels: &MasteryLevels) -> Vec<AssessedSubject> {
    subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let level = resolve_level(subject, levels);
            AssessedSubject {
                name: subject.name.clone(),
                level,
                weight: assessment_weight(level, subject.priority()),
                color: palette_color(index).to_string(),
            }
        })
        .collect()
}

fn focus_areas(assessed: &[AssessedSubject]) -> Vec<String> {
    assessed
        .iter()
        .filter(|s| s.weight >= 2.0)
        .map(|s| s.name.clone())
        .collect()
}

/// Build a rotating-cycle plan: subject shares of the weekly budget plus a
/// generated 14-day cycle.
pub fn build_cycle_plan(
    subjects: &[Subject],
    levels: &MasteryLevels,
    weekly_hours: f64,
    config: &CycleConfig,
) -> StudyPlan {
    let mut plan = StudyPlan::empty(PlanType::Cycle);
    if subjects.is_empty() {
        return plan;
    }

    let assessed = assess_subjects(subjects, levels);
    let total_weight: f64 = assessed.iter().map(|s| s.weight).sum();

    plan.shares = assessed
        .iter()
        .map(|s| {
            let fraction = s.weight / total_weight;
            SubjectShare {
                subject: s.name.clone(),
                color: s.color.clone(),
                weight: s.weight,
                percentage: (fraction * 100.0).round() as u32,
                hours: (fraction * weekly_hours).round(),
            }
        })
        .collect();

    plan.subjects = apply_levels(subjects, levels);
    plan.cycle = generate_cycle(&plan.subjects, weekly_hours, config);
    plan.focus_areas = focus_areas(&assessed);
    plan.total_hours = weekly_hours;
    plan.weekly_hour_limit = Some(weekly_hours);
    plan
}

struct Tier {
    session_hours: f64,
    priority: &'static str,
    weekly_hours: f64,
}

fn weight_tier(weight: f64) -> Tier {
    if weight >= 3.0 {
        Tier { session_hours: 3.0, priority: "High", weekly_hours: 9.0 }
    } else if weight >= 2.0 {
        Tier { session_hours: 2.0, priority: "Medium", weekly_hours: 6.0 }
    } else {
        Tier { session_hours: 1.0, priority: "Low", weekly_hours: 3.0 }
    }
}

/// Build a fixed weekly timetable: each subject gets ceil(weight) sessions,
/// staggered two weekdays apart per subject.
pub fn build_schedule_plan(subjects: &[Subject], levels: &MasteryLevels) -> StudyPlan {
    let mut plan = StudyPlan::empty(PlanType::Schedule);
    let assessed = assess_subjects(subjects, levels);

    let mut weekly: Vec<WeeklySchedule> = DAY_NAMES
        .iter()
        .map(|day| WeeklySchedule {
            day: day.to_string(),
            subjects: Vec::new(),
            total_planned_hours: 0.0,
        })
        .collect();

    for (index, subject) in assessed.iter().enumerate() {
        let sessions = subject.weight.ceil().max(1.0) as usize;
        let tier = weight_tier(subject.weight);
        for k in 0..sessions {
            let slot = &mut weekly[(index * 2 + k) % DAY_NAMES.len()];
            slot.subjects.push(ScheduledSubject {
                name: subject.name.clone(),
                color: subject.color.clone(),
                duration: format!("{}h", tier.session_hours),
                priority: tier.priority.to_string(),
                time_slot: None,
            });
            slot.total_planned_hours += tier.session_hours;
        }
    }

    plan.shares = assessed
        .iter()
        .map(|s| SubjectShare {
            subject: s.name.clone(),
            color: s.color.clone(),
            weight: s.weight,
            percentage: 0,
            hours: weight_tier(s.weight).weekly_hours,
        })
        .collect();
    plan.total_hours = plan.shares.iter().map(|s| s.hours).sum();
    for share in &mut plan.shares {
        share.percentage = (share.hours / plan.total_hours * 100.0).round() as u32;
    }
    plan.subjects = apply_levels(subjects, levels);
    plan.focus_areas = focus_areas(&assessed);
    plan.weekly = if assessed.is_empty() { Vec::new() } else { weekly };
    plan
}
