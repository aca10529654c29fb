use serde::{Serialize, Deserialize};

use crate::study::model::Subject;

/// Chart/label palette, cycled by subject index.
pub const PALETTE: [&str; 8] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7c7c", "#8dd1e1", "#d084d0", "#ffb347", "#87d068",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_subjects: Vec<String>,
    #[serde(default)]
    pub recommended_hours: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<ExamDifficulty>,
}

/// Subjects pre-filled from an exam's default list.
pub fn subjects_for_exam(exam: &ExamType) -> Vec<Subject> {
    exam.default_subjects
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Subject::new(index.to_string(), name.clone())
                .with_priority(1)
                .with_color(palette_color(index))
        })
        .collect()
}

pub fn find_exam<'a>(exams: &'a [ExamType], id: &str) -> Option<&'a ExamType> {
    exams.iter().find(|e| e.id == id)
}
