use chrono::{DateTime, Duration, TimeZone, Utc};
use study_planner_lib::analytics::{compute_progress, recent_sessions, subject_breakdown};
use study_planner_lib::sessions::StudySession;
use study_planner_lib::study::Subject;

// Wednesday
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 8, 18, 0, 0).unwrap()
}

fn session(id: &str, subject: &str, topic: Option<&str>, start: DateTime<Utc>, minutes: f64, completed: bool) -> StudySession {
    StudySession {
        id: id.to_string(),
        subject: subject.to_string(),
        topic: topic.map(str::to_string),
        subtopic: None,
        start_time: start,
        end_time: Some(start + Duration::minutes(minutes as i64)),
        duration: minutes,
        completed,
        notes: None,
        performance: None,
        task_id: None,
    }
}

fn history() -> Vec<StudySession> {
    vec![
        // Previous Sunday, outside this week
        session("1", "Math", Some("Algebra"), now() - Duration::days(3), 25.0, true),
        // Monday
        session("2", "Law", None, now() - Duration::days(2), 25.0, true),
        // Today
        session("3", "Math", Some("Algebra"), now() - Duration::hours(2), 25.0, true),
        session("4", "Math", Some("Geometry"), now() - Duration::hours(1), 10.0, false),
    ]
}

#[test]
fn empty_history_has_zero_stats() {
    let stats = compute_progress(&[], now());
    assert_eq!(stats.total_minutes, 0.0);
    assert_eq!(stats.completed_sessions, 0);
    assert!(stats.subject_minutes.is_empty());
    assert!(subject_breakdown(&stats, &[]).is_empty());
}

#[test]
fn progress_splits_today_and_week() {
    let stats = compute_progress(&history(), now());

    assert_eq!(stats.total_minutes, 85.0);
    assert_eq!(stats.completed_sessions, 3);

    assert_eq!(stats.today_minutes, 35.0);
    assert_eq!(stats.today_completed, 1);

    assert_eq!(stats.week_minutes, 60.0);
    assert_eq!(stats.week_completed, 2);

    assert_eq!(stats.subject_minutes["Math"], 60.0);
    assert_eq!(stats.subject_minutes["Law"], 25.0);
    assert_eq!(stats.topic_minutes["Math - Algebra"], 50.0);
    assert_eq!(stats.topic_minutes["Math - Geometry"], 10.0);
    assert_eq!(stats.topic_minutes.len(), 2);
}

#[test]
fn breakdown_uses_subject_colors() {
    let stats = compute_progress(&history(), now());
    let subjects = vec![Subject::new("0", "Math").with_color("#ff0000")];

    let breakdown = subject_breakdown(&stats, &subjects);
    assert_eq!(breakdown.len(), 2);

    let law = breakdown.iter().find(|b| b.subject == "Law").unwrap();
    assert_eq!(law.color, "#8884d8");
    assert_eq!(law.percentage, 29);

    let math = breakdown.iter().find(|b| b.subject == "Math").unwrap();
    assert_eq!(math.color, "#ff0000");
    assert_eq!(math.percentage, 71);
}

#[test]
fn recent_sessions_newest_first() {
    let sessions = history();
    let recent = recent_sessions(&sessions, 2);
    let ids: Vec<&str> = recent.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "3"]);

    assert_eq!(recent_sessions(&sessions, 10).len(), 4);
}
