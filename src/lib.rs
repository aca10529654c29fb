pub mod analytics;
pub mod cache;
pub mod config;
pub mod error;
mod logging;
pub mod metrics;
pub mod planning;
pub mod sessions;
pub mod state;
pub mod study;

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::analytics::{compute_progress, subject_breakdown, ProgressStats, SubjectBreakdown};
use crate::config::{get_settings, DataPaths};
use crate::error::PlannerError;
use crate::metrics::MetricsSnapshot;
use crate::planning::next_suggestion;
use crate::state::app::AppState;
use crate::state::persist;
use crate::study::PlanType;

/// What `run` prints once startup work is done.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupSummary {
    pub plan_id: Option<String>,
    pub plan_type: Option<PlanType>,
    pub subjects: usize,
    pub cycle_days: usize,
    pub total_hours: f64,
    pub days_until_exam: Option<i64>,
    pub suggestion: String,
    pub progress: ProgressStats,
    pub breakdown: Vec<SubjectBreakdown>,
    pub metrics: MetricsSnapshot,
}

pub fn run() -> Result<(), PlannerError> {
    // Initialize structured logging first
    logging::init_logging();
    tracing::info!("study planner starting");

    let settings = get_settings();
    let app_state = AppState::with_cache_size(settings.cycle_cache_size);
    let paths = DataPaths::default();

    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        PlannerError::new(format!("Failed to create async runtime: {}", e), "startup")
    })?;

    let summary = rt.block_on(async {
        persist::load_into(&app_state, &paths).await?;

        // A cycle plan saved before its cycle was generated gets one now
        if let Some(plan) = app_state.current_plan() {
            if plan.plan_type == PlanType::Cycle && plan.cycle.is_empty() && !plan.subjects.is_empty() {
                if let Err(e) = persist::regenerate_and_save(&app_state, &paths, &settings.cycle).await {
                    tracing::warn!(error = %e, "Cycle regenerated but not saved");
                }
            }
        }

        Ok::<_, PlannerError>(summarize(&app_state))
    })?;

    let json = serde_json::to_string_pretty(&summary)?;
    println!("{}", json);
    Ok(())
}

fn summarize(state: &AppState) -> StartupSummary {
    let now = Utc::now();
    let plan = state.current_plan();
    let progress = compute_progress(&state.sessions(), now);
    let subjects = plan.as_ref().map(|p| p.subjects.clone()).unwrap_or_default();
    let breakdown = subject_breakdown(&progress, &subjects);

    StartupSummary {
        plan_id: plan.as_ref().and_then(|p| p.id.clone()),
        plan_type: plan.as_ref().map(|p| p.plan_type),
        subjects: subjects.len(),
        cycle_days: plan.as_ref().map(|p| p.cycle.len()).unwrap_or(0),
        total_hours: plan.as_ref().map(|p| p.total_hours).unwrap_or(0.0),
        days_until_exam: plan
            .as_ref()
            .and_then(|p| p.exam_date)
            .map(|d| study::plan::days_until_exam(d, now.date_naive())),
        suggestion: plan
            .as_ref()
            .map(|p| next_suggestion(p, now.weekday()))
            .unwrap_or_default(),
        progress,
        breakdown,
        metrics: state.metrics.snapshot(),
    }
}
