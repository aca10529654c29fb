use serde::{Serialize, Deserialize};

/// Self-reported proficiency for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl MasteryLevel {
    /// Lower mastery schedules more time.
    pub fn base_weight(self) -> f64 {
        match self {
            MasteryLevel::Beginner => 3.0,
            MasteryLevel::Intermediate => 2.0,
            MasteryLevel::Advanced => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MasteryLevel::Beginner => "beginner",
            MasteryLevel::Intermediate => "intermediate",
            MasteryLevel::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtopic {
    pub id: String,
    pub name: String,
    pub topic_id: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub subject_id: String,
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
    #[serde(default)]
    pub completed: bool,
}

/// A named unit of study content. `name` is the join key for mastery levels
/// and session records, so it must be unique within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub level: Option<MasteryLevel>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub custom_subject: bool,
    /// Minutes studied so far.
    #[serde(default)]
    pub total_time: f64,
}

impl Subject {
    pub fn new<S: Into<String>>(id: S, name: S) -> Self {
        Subject {
            id: id.into(),
            name: name.into(),
            topics: Vec::new(),
            level: None,
            priority: None,
            color: None,
            custom_subject: false,
            total_time: 0.0,
        }
    }

    pub fn with_level(mut self, level: MasteryLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mastery level, defaulting to intermediate when none was recorded.
    pub fn mastery(&self) -> MasteryLevel {
        self.level.unwrap_or_default()
    }

    /// Explicit priority, never below 1.
    pub fn priority(&self) -> u32 {
        self.priority.unwrap_or(1).max(1)
    }

    /// Percentage of topics marked completed (0 when the subject has no topics).
    pub fn progress(&self) -> f64 {
        if self.topics.is_empty() {
            return 0.0;
        }
        let completed = self.topics.iter().filter(|t| t.completed).count();
        completed as f64 / self.topics.len() as f64 * 100.0
    }
}
