use std::path::Path;

use crate::error::PlannerError;
use crate::study::StudyPlan;

/// Load every saved plan. A missing file is an empty list.
pub async fn load_all(path: &Path) -> Result<Vec<StudyPlan>, PlannerError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => serde_json::from_str(&content).map_err(|e| {
            PlannerError::new(format!("Failed to parse plans.json: {}", e), "json_parse")
                .with_context(format!("path: {:?}", path))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(PlannerError::new(format!("Failed to read plans.json: {}", e), "io")
            .with_context(format!("path: {:?}", path))),
    }
}

/// Load one plan by id.
pub async fn load(path: &Path, id: &str) -> Result<Option<StudyPlan>, PlannerError> {
    let plans = load_all(path).await?;
    Ok(plans.into_iter().find(|p| p.id.as_deref() == Some(id)))
}

async fn write_all(path: &Path, plans: &[StudyPlan]) -> Result<(), PlannerError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            PlannerError::new(format!("Failed to create directory: {}", e), "io")
                .with_context(format!("path: {:?}", parent))
        })?;
    }

    let json = serde_json::to_string_pretty(plans).map_err(|e| {
        PlannerError::new(format!("Failed to serialize plans: {}", e), "json_serialize")
    })?;

    tokio::fs::write(path, json).await.map_err(|e| {
        PlannerError::new(format!("Failed to write plans.json: {}", e), "io")
            .with_context(format!("path: {:?}", path))
    })
}

/// Insert or replace a plan by id, assigning a fresh id when it has none.
/// The saved plan always ends up last, so file order is save order.
/// Returns the id the plan was stored under.
pub async fn save(path: &Path, plan: &StudyPlan) -> Result<String, PlannerError> {
    let mut plans = load_all(path).await?;

    let mut plan = plan.clone();
    let id = plan
        .id
        .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
        .clone();

    plans.retain(|p| p.id.as_deref() != Some(id.as_str()));
    plans.push(plan);

    write_all(path, &plans).await?;
    tracing::debug!(plan_id = %id, count = plans.len(), "Saved study plan");
    Ok(id)
}

/// Remove a plan by id. Returns whether anything was removed.
pub async fn delete(path: &Path, id: &str) -> Result<bool, PlannerError> {
    let mut plans = load_all(path).await?;
    let before = plans.len();
    plans.retain(|p| p.id.as_deref() != Some(id));
    if plans.len() == before {
        return Ok(false);
    }
    write_all(path, &plans).await?;
    Ok(true)
}
