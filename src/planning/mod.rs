pub mod assessment;
pub mod cycle;
pub mod store;
pub mod weighting;

use chrono::Weekday;

use crate::planning::cycle::DAY_NAMES;
use crate::study::StudyPlan;

pub use cycle::generate_cycle;
pub use weighting::{compute_weight, MasteryLevels};

/// Label used by cycle days for a calendar weekday.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// What the plan suggests studying on `weekday`: the first cycle day carrying
/// that label, as "subject - topic". Empty when there is nothing to suggest.
pub fn next_suggestion(plan: &StudyPlan, weekday: Weekday) -> String {
    let label = weekday_label(weekday);
    match plan.cycle.iter().find(|d| d.day_name == label) {
        Some(day) => match &day.topic {
            Some(topic) if !topic.is_empty() => format!("{} - {}", day.subject, topic),
            _ => day.subject.clone(),
        },
        None => String::new(),
    }
}
