use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::paths::settings_path;
use crate::error::PlannerError;
use crate::sessions::timer::PomodoroSettings;
use crate::study::exam::ExamType;
use crate::study::CycleConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Weekly study budget used for new plans
    pub weekly_hours: f64,
    pub cycle: CycleConfig,
    pub pomodoro: PomodoroSettings,
    pub exam_types: Vec<ExamType>,
    pub cycle_cache_size: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        PlannerSettings {
            weekly_hours: 40.0,
            cycle: CycleConfig::default(),
            pomodoro: PomodoroSettings::default(),
            exam_types: Vec::new(),
            cycle_cache_size: 32,
        }
    }
}

/// Parse settings from a TOML file. A missing file fails with stage `not_found`,
/// any other read failure with stage `io`.
pub fn load_settings_from(path: &Path) -> Result<PlannerSettings, PlannerError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        let stage = if e.kind() == std::io::ErrorKind::NotFound { "not_found" } else { "io" };
        PlannerError::new(format!("Failed to read settings: {}", e), stage)
            .with_context(format!("path: {:?}", path))
    })?;
    toml::from_str::<PlannerSettings>(&content).map_err(|e| {
        PlannerError::from(e).with_context(format!("path: {:?}", path))
    })
}

/// Settings from `path`, or defaults when the file is absent or unusable.
pub fn load_settings_or_default(path: &Path) -> PlannerSettings {
    match load_settings_from(path) {
        Ok(settings) => {
            tracing::info!(path = ?path, "Loaded planner settings");
            settings
        }
        Err(e) if e.stage == "not_found" => {
            tracing::info!(path = ?path, "No settings file, using defaults");
            PlannerSettings::default()
        }
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "Failed to load settings, using defaults");
            PlannerSettings::default()
        }
    }
}

lazy_static! {
    static ref SETTINGS: PlannerSettings = load_settings_or_default(&settings_path());
}

/// Get the cached settings (loaded once on first use)
pub fn get_settings() -> &'static PlannerSettings {
    &SETTINGS
}
