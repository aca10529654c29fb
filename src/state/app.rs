use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::RwLock;

use crate::cache::cached_cycle;
use crate::error::PlannerError;
use crate::metrics::Metrics;
use crate::planning::weighting::{apply_levels, MasteryLevels};
use crate::sessions::StudySession;
use crate::study::{CycleConfig, CycleDay, MasteryLevel, StudyPlan};

const DEFAULT_CYCLE_CACHE_SIZE: usize = 32;

/// Application-wide state container.
/// All mutable state is centralized here and passed explicitly to functions.
#[derive(Clone)]
pub struct AppState {
    /// The plan currently shown to the user
    pub plan: Arc<RwLock<Option<StudyPlan>>>,
    /// Assessment results keyed by subject name
    pub subject_levels: Arc<RwLock<MasteryLevels>>,
    /// Session history, oldest first
    pub sessions: Arc<RwLock<Vec<StudySession>>>,
    /// Generated cycles keyed by a hash of their inputs
    pub cycle_cache: Arc<RwLock<LruCache<u64, Vec<CycleDay>>>>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_cache_size(DEFAULT_CYCLE_CACHE_SIZE)
    }

    pub fn with_cache_size(size: usize) -> Self {
        let capacity = NonZeroUsize::new(size)
            .unwrap_or(NonZeroUsize::MIN);
        AppState {
            plan: Arc::new(RwLock::new(None)),
            subject_levels: Arc::new(RwLock::new(MasteryLevels::new())),
            sessions: Arc::new(RwLock::new(Vec::new())),
            cycle_cache: Arc::new(RwLock::new(LruCache::new(capacity))),
            metrics: Metrics::new(),
        }
    }

    pub fn current_plan(&self) -> Option<StudyPlan> {
        self.plan.read().clone()
    }

    pub fn set_plan(&self, plan: StudyPlan) {
        *self.plan.write() = Some(plan);
    }

    pub fn clear_plan(&self) {
        *self.plan.write() = None;
    }

    pub fn set_subject_level<S: Into<String>>(&self, subject: S, level: MasteryLevel) {
        self.subject_levels.write().insert(subject.into(), level);
    }

    pub fn subject_levels(&self) -> MasteryLevels {
        self.subject_levels.read().clone()
    }

    pub fn record_session(&self, session: StudySession) {
        let mut sessions = self.sessions.write();
        sessions.push(session);
        sessions.sort_by_key(|s| s.start_time);
        self.metrics.record_session();
    }

    pub fn set_sessions(&self, sessions: Vec<StudySession>) {
        *self.sessions.write() = sessions;
    }

    pub fn sessions(&self) -> Vec<StudySession> {
        self.sessions.read().clone()
    }

    /// Rebuild the current plan's cycle under `config` and make the result current.
    /// The plan lock is held for the whole update so a concurrent `set_plan` is
    /// never overwritten by a cycle built from the plan it replaced.
    pub fn regenerate_cycle(&self, config: &CycleConfig) -> Result<StudyPlan, PlannerError> {
        let mut guard = self.plan.write();
        let plan = guard
            .as_ref()
            .ok_or_else(|| PlannerError::new("No study plan loaded", "state"))?;

        let subjects = apply_levels(&plan.subjects, &self.subject_levels.read());
        tracing::info!(
            plan_id = ?plan.id,
            subjects = subjects.len(),
            weekly_hours = plan.total_hours,
            "Regenerating cycle"
        );

        let cycle = cached_cycle(self, &subjects, plan.total_hours, config);
        let updated = plan.with_cycle(cycle);
        *guard = Some(updated.clone());
        Ok(updated)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
