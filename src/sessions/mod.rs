pub mod timer;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::error::PlannerError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Low,
    Medium,
    High,
}

/// One timed study session, as recorded by the Pomodoro timer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub subtopic: Option<String>,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Minutes.
    pub duration: f64,
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub performance: Option<Performance>,
    #[serde(default)]
    pub task_id: Option<String>,
}

/// Save a session record as `<dir>/<id>.json`
pub async fn save_session(dir: &Path, record: &StudySession) -> Result<(), PlannerError> {
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        PlannerError::new(format!("Failed to create sessions directory: {}", e), "io")
            .with_context(format!("path: {:?}", dir))
    })?;

    let fname = dir.join(format!("{}.json", record.id));
    let json = serde_json::to_string_pretty(record).map_err(|e| {
        PlannerError::new(format!("Failed to serialize session record: {}", e), "json_serialize")
    })?;

    tokio::fs::write(&fname, json).await.map_err(|e| {
        PlannerError::new(format!("Failed to write session file: {}", e), "io")
            .with_context(format!("path: {:?}", fname))
    })?;

    Ok(())
}

/// Load all session records, oldest first. Unreadable files are skipped.
pub async fn load_all_sessions(dir: &Path) -> Result<Vec<StudySession>, PlannerError> {
    let mut records = Vec::new();

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(records);
        }
        Err(e) => {
            return Err(PlannerError::new(
                format!("Failed to read sessions directory: {}", e),
                "io",
            )
            .with_context(format!("path: {:?}", dir)));
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<StudySession>(&text) {
                Ok(rec) => records.push(rec),
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Failed to parse session file");
                }
            },
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to read session file");
            }
        }
    }

    records.sort_by_key(|r| r.start_time);
    Ok(records)
}
