use study_planner_lib::config::{load_settings_from, load_settings_or_default, DataPaths, PlannerSettings};
use study_planner_lib::study::FocusMode;
use tempfile::TempDir;

const SAMPLE: &str = r#"
weekly_hours = 25.5
cycle_cache_size = 8

[cycle]
forceAllSubjects = false
subjectsPerCycle = 3
focusMode = "priority"

[pomodoro]
studyTime = 3000
soundEnabled = false

[[exam_types]]
id = "bar"
name = "Bar exam"
defaultSubjects = ["Civil Law", "Criminal Law"]
recommendedHours = 35.0
difficulty = "hard"
"#;

#[test]
fn settings_parse_with_defaults_for_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, SAMPLE).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.weekly_hours, 25.5);
    assert_eq!(settings.cycle_cache_size, 8);

    assert!(!settings.cycle.force_all_subjects);
    assert_eq!(settings.cycle.subjects_per_cycle, 3);
    assert_eq!(settings.cycle.focus_mode, FocusMode::Priority);
    assert!(settings.cycle.avoid_consecutive);

    assert_eq!(settings.pomodoro.study_time, 3000);
    assert_eq!(settings.pomodoro.break_time, 300);
    assert!(!settings.pomodoro.sound_enabled);

    assert_eq!(settings.exam_types.len(), 1);
    assert_eq!(settings.exam_types[0].default_subjects.len(), 2);
}

#[test]
fn empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "").unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), PlannerSettings::default());
}

#[test]
fn missing_and_malformed_files_report_their_stage() {
    let dir = TempDir::new().unwrap();
    let missing = load_settings_from(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(missing.stage, "not_found");

    // Reading a directory fails with something other than NotFound
    let unreadable = load_settings_from(dir.path()).unwrap_err();
    assert_eq!(unreadable.stage, "io");

    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "weekly_hours = [").unwrap();
    let broken = load_settings_from(&path).unwrap_err();
    assert_eq!(broken.stage, "toml_parse");
    assert!(broken.context.is_some());
}

#[test]
fn unusable_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let defaults = PlannerSettings::default();
    assert_eq!(load_settings_or_default(&dir.path().join("absent.toml")), defaults);
    assert_eq!(load_settings_or_default(dir.path()), defaults);

    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "weekly_hours = 12.0").unwrap();
    assert_eq!(load_settings_or_default(&path).weekly_hours, 12.0);
}

#[test]
fn data_paths_nest_under_root() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::under(dir.path());
    assert!(paths.plans.ends_with("data/plans.json"));
    assert!(paths.sessions.ends_with("data/sessions"));
}
