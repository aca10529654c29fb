use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Serialize, Deserialize};

use crate::sessions::StudySession;
use crate::study::Subject;

const DEFAULT_COLOR: &str = "#8884d8";

/// Aggregates over the session history. Minutes throughout.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_minutes: f64,
    pub today_minutes: f64,
    pub week_minutes: f64,
    pub completed_sessions: usize,
    pub today_completed: usize,
    pub week_completed: usize,
    pub subject_minutes: BTreeMap<String, f64>,
    /// Keyed by "subject - topic".
    pub topic_minutes: BTreeMap<String, f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectBreakdown {
    pub subject: String,
    pub minutes: f64,
    pub color: String,
    pub percentage: u32,
}

/// Monday of the week containing `day`.
fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

pub fn compute_progress(sessions: &[StudySession], now: DateTime<Utc>) -> ProgressStats {
    let today = now.date_naive();
    let monday = week_start(today);
    let sunday = monday + Duration::days(6);

    let mut stats = ProgressStats::default();

    for session in sessions {
        let day = session.start_time.date_naive();
        let is_today = day == today;
        let in_week = day >= monday && day <= sunday;

        stats.total_minutes += session.duration;
        if session.completed {
            stats.completed_sessions += 1;
        }
        if is_today {
            stats.today_minutes += session.duration;
            if session.completed {
                stats.today_completed += 1;
            }
        }
        if in_week {
            stats.week_minutes += session.duration;
            if session.completed {
                stats.week_completed += 1;
            }
        }

        *stats.subject_minutes.entry(session.subject.clone()).or_insert(0.0) += session.duration;
        if let Some(topic) = &session.topic {
            let key = format!("{} - {}", session.subject, topic);
            *stats.topic_minutes.entry(key).or_insert(0.0) += session.duration;
        }
    }

    stats
}

/// Per-subject share of total study time, for the progress charts.
pub fn subject_breakdown(stats: &ProgressStats, subjects: &[Subject]) -> Vec<SubjectBreakdown> {
    stats
        .subject_minutes
        .iter()
        .map(|(subject, &minutes)| {
            let color = subjects
                .iter()
                .find(|s| &s.name == subject)
                .and_then(|s| s.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string());
            let percentage = if stats.total_minutes > 0.0 {
                (minutes / stats.total_minutes * 100.0).round() as u32
            } else {
                0
            };
            SubjectBreakdown {
                subject: subject.clone(),
                minutes,
                color,
                percentage,
            }
        })
        .collect()
}

/// The last `n` sessions, newest first.
pub fn recent_sessions(sessions: &[StudySession], n: usize) -> Vec<&StudySession> {
    sessions.iter().rev().take(n).collect()
}
