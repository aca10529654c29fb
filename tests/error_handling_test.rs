use study_planner_lib::error::PlannerError;
use study_planner_lib::sessions::timer::TimerError;

#[test]
fn test_error_creation() {
    let error = PlannerError::new("Test error", "test_stage");
    assert_eq!(error.message, "Test error");
    assert_eq!(error.stage, "test_stage");
    assert!(error.context.is_none());
}

#[test]
fn test_error_with_context() {
    let error = PlannerError::new("Test error", "test_stage")
        .with_context("Additional context");
    assert_eq!(error.context.as_deref(), Some("Additional context"));
}

#[test]
fn test_error_display() {
    let error = PlannerError::new("Test error", "test_stage")
        .with_context("context")
        .with_source("source");
    let display = format!("{}", error);
    assert_eq!(display, "[test_stage] Test error (context: context) (source: source)");
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
    let error: PlannerError = parse.into();
    assert_eq!(error.stage, "json_parse");
    assert_eq!(error.source.as_deref(), Some("serde_json"));
}

#[test]
fn test_timer_error_message() {
    let error: PlannerError = TimerError::AlreadyActive.into();
    assert_eq!(error.to_string(), "[timer] timer already active");
}
