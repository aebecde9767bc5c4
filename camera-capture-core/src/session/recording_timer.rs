//! Countdown for bounded-duration video recordings.
//!
//! The tick arithmetic lives in [`RecordingTimer`], a deterministic core
//! with no clock of its own; [`spawn_driver`] runs it on a dedicated thread
//! at the tick interval. Recorded time is `ticks × interval` rather than an
//! accumulating sum, so a bounded recording expires on an exact tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Tick cadence used for recordings started by the controller.
pub const DEFAULT_TICK_INTERVAL_SECS: f64 = 0.25;

/// One timer advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerTick {
    pub recorded_secs: f64,
    /// `None` for an unbounded recording.
    pub remaining_secs: Option<f64>,
    /// True exactly once, on the tick that exhausts a bounded duration.
    pub expired: bool,
}

/// Deterministic countdown state for one recording.
///
/// A non-positive `video_duration_secs` means unbounded: remaining time is
/// never reported and the timer never expires.
#[derive(Debug)]
pub struct RecordingTimer {
    interval_secs: f64,
    video_duration_secs: f64,
    ticks: u64,
    expired: bool,
}

impl RecordingTimer {
    /// A non-positive or non-finite `interval_secs` falls back to
    /// [`DEFAULT_TICK_INTERVAL_SECS`].
    pub fn new(interval_secs: f64, video_duration_secs: f64) -> Self {
        let interval_secs = if interval_secs.is_finite() && interval_secs > 0.0 {
            interval_secs
        } else {
            DEFAULT_TICK_INTERVAL_SECS
        };
        Self {
            interval_secs,
            video_duration_secs,
            ticks: 0,
            expired: false,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_secs)
    }

    pub fn is_bounded(&self) -> bool {
        self.video_duration_secs > 0.0
    }

    pub fn recorded_secs(&self) -> f64 {
        self.ticks as f64 * self.interval_secs
    }

    /// Advance by one interval.
    ///
    /// Returns `None` once a bounded timer has expired; no further ticks
    /// are ever produced after the one that reported `expired`.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if self.expired {
            return None;
        }

        self.ticks += 1;
        let recorded = self.recorded_secs();

        let (remaining, expired) = if self.is_bounded() {
            let remaining = (self.video_duration_secs - recorded).max(0.0);
            (Some(remaining), remaining <= 0.0)
        } else {
            (None, false)
        };
        self.expired = expired;

        Some(TimerTick {
            recorded_secs: recorded,
            remaining_secs: remaining,
            expired,
        })
    }
}

/// Handle to a running timer driver thread.
///
/// Halting is flag-based, never join-based: a tick that is blocked handing
/// its stop action to the session context must not be able to deadlock the
/// caller that is stopping the timer.
#[derive(Debug)]
pub struct RecordingTimerHandle {
    running: Arc<AtomicBool>,
}

impl RecordingTimerHandle {
    pub fn halt(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Run a timer on a dedicated thread, invoking `on_tick` after each
/// interval until the timer expires or the handle is halted.
pub fn spawn_driver(
    mut timer: RecordingTimer,
    on_tick: Arc<dyn Fn(TimerTick) + Send + Sync>,
) -> RecordingTimerHandle {
    let running = Arc::new(AtomicBool::new(true));
    let thread_running = Arc::clone(&running);
    let interval = timer.interval();

    let spawned = thread::Builder::new()
        .name("recording-timer".into())
        .spawn(move || {
            loop {
                thread::sleep(interval);
                if !thread_running.load(Ordering::SeqCst) {
                    break;
                }
                match timer.tick() {
                    Some(tick) => {
                        let expired = tick.expired;
                        on_tick(tick);
                        if expired {
                            break;
                        }
                    }
                    None => break,
                }
            }
        });

    if let Err(e) = spawned {
        log::error!("failed to spawn recording-timer thread: {}", e);
        running.store(false, Ordering::SeqCst);
    }

    RecordingTimerHandle { running }
}
