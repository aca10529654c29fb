use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

use crate::study::model::Subject;

/// Weight adjustment and per-day tie-break policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    #[default]
    Balanced,
    Priority,
    Difficulty,
}

impl FocusMode {
    pub fn weight_multiplier(self) -> f64 {
        match self {
            FocusMode::Balanced => 1.0,
            FocusMode::Priority => 1.5,
            FocusMode::Difficulty => 2.0,
        }
    }
}

/// Scheduling policy for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CycleConfig {
    pub force_all_subjects: bool,
    pub subjects_per_cycle: usize,
    /// Stored for the settings UI; generation does not read it.
    pub rotation_intensity: f64,
    pub focus_mode: FocusMode,
    pub avoid_consecutive: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            force_all_subjects: true,
            subjects_per_cycle: 5,
            rotation_intensity: 1.0,
            focus_mode: FocusMode::Balanced,
            avoid_consecutive: true,
        }
    }
}

/// One subject pick inside a cycle day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSlot {
    pub subject_id: String,
    pub subject: String,
    pub hours: f64,
}

/// One slot of the rotation, with display fields for the plan view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDay {
    /// 1-based position in the rotation.
    pub day: u32,
    pub day_name: String,
    pub subject: String,
    pub topic: Option<String>,
    pub subtopic: Option<String>,
    pub color: String,
    pub duration: String,
    pub focus: String,
    pub priority: u32,
    #[serde(default)]
    pub tasks: Vec<CycleSlot>,
    pub total_planned_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Cycle,
    Schedule,
}

/// Share of the plan assigned to one subject, used by the plan charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectShare {
    pub subject: String,
    pub color: String,
    pub weight: f64,
    #[serde(default)]
    pub percentage: u32,
    /// Hours per week in a cycle plan, weekly hours in a schedule plan.
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSubject {
    pub name: String,
    pub color: String,
    pub duration: String,
    pub priority: String,
    #[serde(default)]
    pub time_slot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub day: String,
    pub subjects: Vec<ScheduledSubject>,
    pub total_planned_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Methodology {
    Pomodoro,
    Timeboxing,
    Custom,
}

/// Aggregate owned by the caller. The generator only ever hands back a fresh
/// cycle which replaces `cycle` wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_until_exam: Option<i64>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default, rename = "data")]
    pub shares: Vec<SubjectShare>,
    #[serde(default)]
    pub cycle: Vec<CycleDay>,
    #[serde(default)]
    pub weekly: Vec<WeeklySchedule>,
    pub total_hours: f64,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub intensity: Option<Intensity>,
    #[serde(default)]
    pub methodology: Option<Methodology>,
    #[serde(default)]
    pub weekly_hour_limit: Option<f64>,
}

impl StudyPlan {
    pub fn empty(plan_type: PlanType) -> Self {
        StudyPlan {
            id: None,
            name: None,
            plan_type,
            exam_date: None,
            days_until_exam: None,
            subjects: Vec::new(),
            shares: Vec::new(),
            cycle: Vec::new(),
            weekly: Vec::new(),
            total_hours: 0.0,
            focus_areas: Vec::new(),
            intensity: None,
            methodology: None,
            weekly_hour_limit: None,
        }
    }

    /// Copy of this plan with the cycle replaced; every other field is preserved.
    pub fn with_cycle(&self, cycle: Vec<CycleDay>) -> Self {
        StudyPlan {
            cycle,
            ..self.clone()
        }
    }

    /// Attach an exam date and refresh the day countdown against `today`.
    pub fn with_exam_date(mut self, exam_date: NaiveDate, today: NaiveDate) -> Self {
        self.exam_date = Some(exam_date);
        self.days_until_exam = Some(days_until_exam(exam_date, today));
        self
    }
}

/// Whole days from `today` to the exam; negative once it has passed.
pub fn days_until_exam(exam_date: NaiveDate, today: NaiveDate) -> i64 {
    exam_date.signed_duration_since(today).num_days()
}
