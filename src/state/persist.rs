use crate::config::paths::DataPaths;
use crate::error::PlannerError;
use crate::planning::store as plan_store;
use crate::sessions::{load_all_sessions, save_session, StudySession};
use crate::state::app::AppState;
use crate::study::{CycleConfig, StudyPlan};

/// Fill AppState from disk: the most recently saved plan becomes current and
/// the session history is replaced.
pub async fn load_into(state: &AppState, paths: &DataPaths) -> Result<(), PlannerError> {
    let plans = plan_store::load_all(&paths.plans).await?;
    match plans.into_iter().last() {
        Some(plan) => {
            tracing::info!(plan_id = ?plan.id, "Loaded study plan");
            state.set_plan(plan);
        }
        None => tracing::info!("No saved study plan"),
    }

    let sessions = load_all_sessions(&paths.sessions).await?;
    tracing::info!(count = sessions.len(), "Loaded study sessions");
    state.set_sessions(sessions);
    Ok(())
}

/// Persist the current plan. On success the assigned id is written back into
/// AppState; on failure the in-memory plan is left untouched.
pub async fn save_current_plan(state: &AppState, paths: &DataPaths) -> Result<String, PlannerError> {
    let plan = state
        .current_plan()
        .ok_or_else(|| PlannerError::new("No study plan loaded", "state"))?;

    match plan_store::save(&paths.plans, &plan).await {
        Ok(id) => {
            if plan.id.as_deref() != Some(id.as_str()) {
                let mut guard = state.plan.write();
                if let Some(current) = guard.as_mut() {
                    current.id = Some(id.clone());
                }
            }
            Ok(id)
        }
        Err(e) => {
            state.metrics.record_persistence_error();
            tracing::warn!(error = %e, "Failed to save study plan, keeping it in memory");
            Err(e)
        }
    }
}

/// Make `plan` current and persist it.
pub async fn adopt_plan(
    state: &AppState,
    paths: &DataPaths,
    plan: StudyPlan,
) -> Result<String, PlannerError> {
    state.set_plan(plan);
    save_current_plan(state, paths).await
}

/// Regenerate the current cycle, then persist. A failed save is reported but the
/// regenerated plan stays current.
pub async fn regenerate_and_save(
    state: &AppState,
    paths: &DataPaths,
    config: &CycleConfig,
) -> Result<StudyPlan, PlannerError> {
    state.regenerate_cycle(config)?;
    save_current_plan(state, paths).await?;
    state
        .current_plan()
        .ok_or_else(|| PlannerError::new("No study plan loaded", "state"))
}

/// Append a finished session to the history and write its record.
pub async fn record_and_save_session(
    state: &AppState,
    paths: &DataPaths,
    session: StudySession,
) -> Result<(), PlannerError> {
    state.record_session(session.clone());
    if let Err(e) = save_session(&paths.sessions, &session).await {
        state.metrics.record_persistence_error();
        tracing::warn!(session_id = %session.id, error = %e, "Failed to save study session");
        return Err(e);
    }
    Ok(())
}
