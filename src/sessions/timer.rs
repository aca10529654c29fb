use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sessions::StudySession;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("a subject is required to start a study session")]
    EmptySubject,
    #[error("timer already active")]
    AlreadyActive,
    #[error("timer is not running")]
    NotRunning,
    #[error("timer is not paused")]
    NotPaused,
    #[error("study time must be at least one second")]
    ZeroStudyTime,
}

/// Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PomodoroSettings {
    pub study_time: u32,
    pub break_time: u32,
    pub long_break_time: u32,
    pub sessions_until_long_break: u32,
    pub auto_start_breaks: bool,
    pub auto_start_sessions: bool,
    pub sound_enabled: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            study_time: 25 * 60,
            break_time: 5 * 60,
            long_break_time: 15 * 60,
            sessions_until_long_break: 4,
            auto_start_breaks: false,
            auto_start_sessions: false,
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    #[default]
    Study,
    Break,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Countdown driving study sessions. The caller calls `tick` once per second;
/// finished and interrupted sessions come back as `StudySession` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroTimer {
    pub settings: PomodoroSettings,
    pub mode: TimerMode,
    pub status: TimerStatus,
    pub remaining_secs: u32,
    pub completed_sessions: u32,
    pub current: Option<StudySession>,
}

impl PomodoroTimer {
    pub fn new(settings: PomodoroSettings) -> Self {
        Self {
            settings,
            mode: TimerMode::Study,
            status: TimerStatus::Idle,
            remaining_secs: 0,
            completed_sessions: 0,
            current: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status != TimerStatus::Idle
    }

    pub fn start(
        &mut self,
        subject: &str,
        topic: Option<&str>,
        subtopic: Option<&str>,
        task_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), TimerError> {
        if subject.trim().is_empty() {
            return Err(TimerError::EmptySubject);
        }
        if self.is_active() {
            return Err(TimerError::AlreadyActive);
        }
        if self.settings.study_time == 0 {
            return Err(TimerError::ZeroStudyTime);
        }

        let non_empty = |s: Option<&str>| s.filter(|v| !v.is_empty()).map(str::to_string);
        self.current = Some(StudySession {
            id: uuid::Uuid::new_v4().to_string(),
            subject: subject.to_string(),
            topic: non_empty(topic),
            subtopic: non_empty(subtopic),
            start_time: now,
            end_time: None,
            duration: 0.0,
            completed: false,
            notes: None,
            performance: None,
            task_id: non_empty(task_id),
        });
        self.mode = TimerMode::Study;
        self.status = TimerStatus::Running;
        self.remaining_secs = self.settings.study_time;

        tracing::info!(subject = subject, seconds = self.remaining_secs, "Study timer started");
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TimerError> {
        if self.status != TimerStatus::Running {
            return Err(TimerError::NotRunning);
        }
        self.status = TimerStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), TimerError> {
        if self.status != TimerStatus::Paused {
            return Err(TimerError::NotPaused);
        }
        self.status = TimerStatus::Running;
        Ok(())
    }

    /// Whether the break after the next completed session is a long one.
    pub fn next_break_is_long(&self) -> bool {
        (self.completed_sessions + 1) % self.settings.sessions_until_long_break.max(1) == 0
    }

    /// Advance one second. Returns the session record when a study countdown completes.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<StudySession> {
        if self.status != TimerStatus::Running || self.remaining_secs == 0 {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }

        match self.mode {
            TimerMode::Study => {
                let break_secs = if self.next_break_is_long() {
                    self.settings.long_break_time
                } else {
                    self.settings.break_time
                };

                let finished = self.current.take().map(|session| StudySession {
                    end_time: Some(now),
                    duration: self.settings.study_time as f64 / 60.0,
                    completed: true,
                    ..session
                });
                if finished.is_some() {
                    self.completed_sessions += 1;
                }

                if break_secs == 0 {
                    self.reset();
                } else {
                    self.mode = TimerMode::Break;
                    self.remaining_secs = break_secs;
                }
                tracing::info!(completed_sessions = self.completed_sessions, break_secs, "Study session completed");
                finished
            }
            TimerMode::Break => {
                tracing::debug!("Break finished");
                self.reset();
                None
            }
        }
    }

    /// Stop early. The in-progress session comes back as interrupted, with whole
    /// minutes elapsed since it started.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<StudySession> {
        let interrupted = self.current.take().map(|session| {
            let minutes = (now - session.start_time).num_minutes().max(0);
            StudySession {
                end_time: Some(now),
                duration: minutes as f64,
                completed: false,
                ..session
            }
        });
        self.reset();
        interrupted
    }

    fn reset(&mut self) {
        self.mode = TimerMode::Study;
        self.status = TimerStatus::Idle;
        self.remaining_secs = 0;
        self.current = None;
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(PomodoroSettings::default())
    }
}
