//! Cancellable timers
//!
//! The only asynchrony in the crate: a recurring tick for video playback
//! and a one-shot delay for the simulated voice capture. Each handle owns
//! its worker thread and stops it on drop, so a discarded session can
//! never receive a stale tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Sleep granularity while waiting; bounds cancellation latency
const CANCEL_SLICE: Duration = Duration::from_millis(10);

fn interruptible_sleep(period: Duration, stop: &AtomicBool) -> bool {
    let slice = CANCEL_SLICE.min(period);
    let mut slept = Duration::ZERO;
    while slept < period {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        thread::sleep(slice);
        slept += slice;
    }
    !stop.load(Ordering::Relaxed)
}

/// Recurring tick source for Watch playback.
#[derive(Debug)]
pub struct TickTimer {
    stop: Arc<AtomicBool>,
    ticks: Receiver<()>,
    worker: Option<JoinHandle<()>>,
}

impl TickTimer {
    /// Start ticking once per `period`.
    pub fn start(period: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, ticks) = mpsc::channel();
        let flag = Arc::clone(&stop);
        let worker = thread::spawn(move || {
            while interruptible_sleep(period, &flag) {
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self {
            stop,
            ticks,
            worker: Some(worker),
        }
    }

    /// Number of ticks elapsed since the last poll
    pub fn poll(&self) -> u32 {
        let mut n = 0;
        loop {
            match self.ticks.try_recv() {
                Ok(()) => n += 1,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        n
    }

    /// Stop the worker thread. Also runs on drop.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One-shot timer; fires once after the configured delay.
#[derive(Debug)]
pub struct DelayTimer {
    stop: Arc<AtomicBool>,
    done: Receiver<()>,
    fired: std::cell::Cell<bool>,
    worker: Option<JoinHandle<()>>,
}

impl DelayTimer {
    pub fn start(delay: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, done) = mpsc::channel();
        let flag = Arc::clone(&stop);
        let worker = thread::spawn(move || {
            if interruptible_sleep(delay, &flag) {
                let _ = tx.send(());
            }
        });
        Self {
            stop,
            done,
            fired: std::cell::Cell::new(false),
            worker: Some(worker),
        }
    }

    /// True once the delay has elapsed; keeps returning true afterwards.
    pub fn ready(&self) -> bool {
        if self.fired.get() {
            return true;
        }
        if matches!(self.done.try_recv(), Ok(())) {
            self.fired.set(true);
        }
        self.fired.get()
    }

    /// Stop the worker thread. Also runs on drop.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for DelayTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
