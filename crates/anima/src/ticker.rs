//! Fixed-rate redraw scheduler.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::event::Event;

/// Shortest interval the ticker will run at.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Periodic timer that posts [`Event::Redraw`] from a background thread.
///
/// Ticks are scheduled at a fixed rate from the first one. A tick that finds
/// the previous redraw still pending is dropped, and deadlines missed while
/// the thread was descheduled are skipped rather than fired in a burst.
/// Dropping the ticker stops the thread.
#[derive(Debug)]
pub struct Ticker {
    /// Time between ticks.
    interval: Duration,
    /// Delay before the first tick.
    start_delay: Duration,
    /// Set by the ticker when it posts a redraw, cleared by the consumer.
    redraw_pending: Arc<AtomicBool>,
    /// Dropping or signalling this wakes and stops the thread.
    stop_tx: Option<Sender<()>>,
    /// Handle of the background thread.
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Create a stopped ticker.
    pub fn new(interval: Duration, start_delay: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            start_delay,
            redraw_pending: Arc::new(AtomicBool::new(false)),
            stop_tx: None,
            handle: None,
        }
    }

    /// Start posting redraw requests to `events`.
    pub fn start(&mut self, events: Sender<Event>) {
        if self.handle.is_some() {
            return; // Already running
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let interval = self.interval;
        let start_delay = self.start_delay;
        let pending = Arc::clone(&self.redraw_pending);

        let handle = thread::spawn(move || {
            tracing::debug!(?interval, ?start_delay, "ticker started");
            let mut deadline = Instant::now() + start_delay;
            let mut dropped: u64 = 0;

            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                if pending.swap(true, Ordering::AcqRel) {
                    dropped += 1;
                } else if events.send(Event::Redraw).is_err() {
                    // Nobody left to draw
                    break;
                }

                deadline = next_deadline(deadline, interval, Instant::now());
            }

            tracing::debug!(dropped, "ticker stopped");
        });

        self.stop_tx = Some(stop_tx);
        self.handle = Some(handle);
    }

    /// Stop the background thread and wait for it to exit.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("ticker thread panicked");
        }
    }

    /// Whether the background thread has been started and not stopped.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Mark the posted redraw as taken, allowing the next tick through.
    pub fn acknowledge(&self) {
        self.redraw_pending.store(false, Ordering::Release);
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Next fixed-rate deadline after `deadline`, skipping any already in the past.
fn next_deadline(deadline: Instant, interval: Duration, now: Instant) -> Instant {
    let next = deadline + interval;
    if next > now {
        return next;
    }
    let behind = now.duration_since(next).as_nanos();
    let missed = u32::try_from(behind / interval.as_nanos() + 1).unwrap_or(u32::MAX);
    next + interval.saturating_mul(missed)
}
