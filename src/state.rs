use crate::errors::AppError;
use crate::history;
use crate::models::{DaySession, StudyRecord};
use crate::session;
use crate::storage::Store;
use crate::timer::{TickOutcome, Timer};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

/// Handle to the background once-per-second tick task. Every pause, reset
/// and day switch bumps the epoch, so a tick that wakes up against a stale
/// epoch exits without touching the timer even if the abort raced it.
#[derive(Debug, Default)]
pub struct Ticker {
    epoch: u64,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Cancels whatever tick task may still be queued or sleeping.
    pub fn invalidate(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Claims a fresh epoch for a tick task about to be spawned.
    pub fn arm(&mut self) -> u64 {
        self.invalidate();
        self.epoch
    }

    pub fn install(&mut self, handle: JoinHandle<()>) {
        self.handle = Some(handle);
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Everything the app mutates, behind a single lock: the persistent store,
/// the day being worked on, the countdown and the recorded history.
pub struct Tracker {
    pub store: Store,
    pub session: DaySession,
    pub timer: Timer,
    pub records: Vec<StudyRecord>,
    pub ticker: Ticker,
}

impl Tracker {
    /// Folds a finished study countdown into the day and the history, then
    /// persists both. The timer itself has already moved on to the break
    /// countdown when this runs.
    pub async fn complete_study_phase(&mut self, study_minutes: u32) -> Result<(), AppError> {
        self.session.current_study_time = self
            .session
            .current_study_time
            .saturating_add(study_minutes);

        let completed = session::completed_count(&self.session) as u32;
        let total = self.session.tasks.len() as u32;
        history::record_session(
            &mut self.records,
            self.session.day,
            study_minutes,
            completed,
            total,
        );

        self.store.write_day(&self.session).await?;
        self.store.write_records(&self.records).await?;

        info!(
            day = self.session.day,
            study_minutes, "study phase finished, break started"
        );
        Ok(())
    }

    /// Stops the countdown and the task driving it.
    pub fn halt_timer(&mut self) {
        self.timer.pause();
        self.ticker.invalidate();
    }
}

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    /// Restores the tracker from the store: the remembered current day, its
    /// session and the history. The timer always boots paused at a full
    /// study countdown.
    pub fn bootstrap(store: Store) -> Self {
        let day = store.read_current_day();
        let session = store.read_day(day);
        let records = store.read_records();

        let tracker = Tracker {
            store,
            session,
            timer: Timer::default(),
            records,
            ticker: Ticker::default(),
        };

        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}

/// Drives the countdown at one tick per second until the timer pauses or the
/// epoch moves on. A completed study phase is persisted before the next tick
/// is awaited.
pub(crate) fn spawn_ticker(state: AppState, epoch: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; swallow it so the countdown
        // moves a full second after start.
        interval.tick().await;

        loop {
            interval.tick().await;

            let mut tracker = state.tracker.lock().await;
            if tracker.ticker.epoch() != epoch || !tracker.timer.running {
                break;
            }

            match tracker.timer.tick() {
                TickOutcome::Idle => break,
                TickOutcome::Ticked => {}
                TickOutcome::StudyComplete { study_minutes } => {
                    if let Err(err) = tracker.complete_study_phase(study_minutes).await {
                        error!(error = %err.message, "failed to persist finished study phase");
                    }
                }
                TickOutcome::BreakComplete => {
                    info!("break finished, study countdown restarted");
                }
            }
        }
    })
}
