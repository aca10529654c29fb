pub mod exam;
pub mod model;
pub mod plan;

pub use model::{MasteryLevel, Subject, Subtopic, Topic};
pub use plan::{CycleConfig, CycleDay, CycleSlot, FocusMode, PlanType, StudyPlan};
