use serde::{Serialize, Deserialize};
use std::fmt;

use crate::sessions::timer::TimerError;

/// Failure from loading or saving plans, sessions and settings, or from a state
/// transition that needs a plan. `stage` names where it happened (`io`,
/// `json_parse`, `toml_parse`, `not_found`, `state`, `timer`, ...) so callers can
/// branch on it without parsing the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerError {
    pub message: String,
    pub stage: String,
    /// Usually the file path involved.
    pub context: Option<String>,
    /// Library the failure came from, when converted.
    pub source: Option<String>,
}

impl PlannerError {
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        PlannerError {
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        PlannerError { context: Some(context.into()), ..self }
    }

    pub fn with_source<S: Into<String>>(self, source: S) -> Self {
        PlannerError { source: Some(source.into()), ..self }
    }

    fn converted(message: String, stage: &'static str, source: &str) -> Self {
        PlannerError::new(message, stage).with_source(source)
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<anyhow::Error> for PlannerError {
    fn from(err: anyhow::Error) -> Self {
        PlannerError::converted(err.to_string(), "unknown", "anyhow")
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::converted(format!("I/O error: {}", err), "io", "std::io")
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::converted(format!("JSON error: {}", err), "json_parse", "serde_json")
    }
}

impl From<toml::de::Error> for PlannerError {
    fn from(err: toml::de::Error) -> Self {
        PlannerError::converted(format!("TOML error: {}", err), "toml_parse", "toml")
    }
}

impl From<TimerError> for PlannerError {
    fn from(err: TimerError) -> Self {
        PlannerError::new(err.to_string(), "timer")
    }
}
