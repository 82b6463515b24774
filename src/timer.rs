use crate::models::Phase;

pub const DEFAULT_STUDY_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Ticked,
    StudyComplete { study_minutes: u32 },
    BreakComplete,
}

#[derive(Debug)]
pub struct Timer {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub running: bool,
    pub study_minutes: u32,
    pub break_minutes: u32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_STUDY_MINUTES, DEFAULT_BREAK_MINUTES)
    }
}

impl Timer {
    pub fn new(study_minutes: u32, break_minutes: u32) -> Self {
        Self {
            phase: Phase::Study,
            remaining_seconds: study_minutes.saturating_mul(60),
            running: false,
            study_minutes,
            break_minutes,
        }
    }

    fn full_duration(&self) -> u32 {
        match self.phase {
            Phase::Study => self.study_minutes.saturating_mul(60),
            Phase::Break => self.break_minutes.saturating_mul(60),
        }
    }

    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.pause();
        self.remaining_seconds = self.full_duration();
    }

    pub fn reset_to_study(&mut self) {
        self.phase = Phase::Study;
        self.pause();
        self.remaining_seconds = self.study_minutes.saturating_mul(60);
    }

    /// Only a paused study countdown re-bases immediately; a running one,
    /// and any break countdown, finishes at its old length.
    pub fn set_study_minutes(&mut self, minutes: u32) {
        self.study_minutes = minutes;
        if !self.running && self.phase == Phase::Study {
            self.remaining_seconds = minutes.saturating_mul(60);
        }
    }

    /// Takes effect when the next break countdown begins.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes = minutes;
    }

    /// Advances the countdown by one second. Draining it to zero completes
    /// the phase within this same call and auto-continues into the next one.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Ticked;
        }

        match self.phase {
            Phase::Study => {
                self.phase = Phase::Break;
                self.remaining_seconds = self.break_minutes.saturating_mul(60);
                TickOutcome::StudyComplete {
                    study_minutes: self.study_minutes,
                }
            }
            Phase::Break => {
                self.phase = Phase::Study;
                self.remaining_seconds = self.study_minutes.saturating_mul(60);
                TickOutcome::BreakComplete
            }
        }
    }
}
