//! Display rotation
//!
//! A passive, fixed-interval display timer: every tick advances the active
//! pool index by one, modulo pool length. Not an interactive carousel — no
//! pause-on-hover, no manual navigation.
//!
//! The state machine is pure and separately testable
//! ([`RotationState`]); the timer is a scoped resource owned by
//! [`RotationScheduler`]. Whenever the pool is rebuilt, becomes empty, or
//! the display tears down, the running timer is cancelled (stop signal plus
//! join) before any new one starts, so a stale timer can never advance an
//! index into a pool of different length and no duplicate timers can leak.
//! Teardown is idempotent: calling it twice is a no-op.

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Rotation state for one display instance
///
/// `Idle` when there is nothing to display (empty pool); otherwise
/// `Displaying` with the index of the active pool entry. A fresh pool always
/// starts at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationState {
    Idle,
    Displaying { active_index: usize },
}

impl RotationState {
    /// Initial state for a pool of the given length
    pub fn for_pool(pool_len: usize) -> Self {
        if pool_len == 0 {
            RotationState::Idle
        } else {
            RotationState::Displaying { active_index: 0 }
        }
    }

    /// Advance the active index by one, modulo pool length
    ///
    /// A no-op when idle or when the pool is empty.
    pub fn advance(&mut self, pool_len: usize) {
        if pool_len == 0 {
            return;
        }
        if let RotationState::Displaying { active_index } = self {
            *active_index = (*active_index + 1) % pool_len;
        }
    }

    /// Index of the currently displayed entry, if any
    pub fn active_index(&self) -> Option<usize> {
        match self {
            RotationState::Idle => None,
            RotationState::Displaying { active_index } => Some(*active_index),
        }
    }
}

/// Handle to a running timer thread
struct TimerHandle {
    stop_tx: Sender<()>,
    thread: thread::JoinHandle<()>,
}

/// Owns the rotation state and its driving timer for one display instance
pub struct RotationScheduler {
    interval: Duration,
    pool_len: usize,
    state: Arc<Mutex<RotationState>>,
    timer: Option<TimerHandle>,
    ticks_rx: Option<Receiver<usize>>,
}

impl RotationScheduler {
    /// Create an idle scheduler; no timer runs until a pool is installed
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pool_len: 0,
            state: Arc::new(Mutex::new(RotationState::Idle)),
            timer: None,
            ticks_rx: None,
        }
    }

    /// Install a (re)built pool of the given length
    ///
    /// Cancels any running timer first, resets the active index to 0, and
    /// starts a fresh timer when the pool is non-empty. Rebuild resets
    /// rather than preserving the old index: the new pool may have a
    /// different length, and a deterministic starting point is worth more
    /// than continuity nobody observes.
    pub fn install_pool(&mut self, pool_len: usize) {
        self.shutdown();

        self.pool_len = pool_len;
        if let Ok(mut state) = self.state.lock() {
            *state = RotationState::for_pool(pool_len);
        }

        if pool_len == 0 {
            self.ticks_rx = None;
            return;
        }

        let (stop_tx, stop_rx) = unbounded::<()>();
        let (tick_tx, tick_rx) = unbounded::<usize>();
        let state = Arc::clone(&self.state);
        let interval = self.interval;

        let thread = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                // Interval elapsed without a stop signal: advance
                Err(crossbeam::channel::RecvTimeoutError::Timeout) => {
                    let index = {
                        let Ok(mut state) = state.lock() else { break };
                        state.advance(pool_len);
                        state.active_index()
                    };
                    if let Some(index) = index {
                        // Nobody listening is fine; the state is the truth
                        let _ = tick_tx.send(index);
                    }
                }
                // Stop requested, or the scheduler was dropped
                Ok(()) | Err(crossbeam::channel::RecvTimeoutError::Disconnected) => break,
            }
        });

        self.timer = Some(TimerHandle { stop_tx, thread });
        self.ticks_rx = Some(tick_rx);
    }

    /// Index of the currently displayed entry, if any
    pub fn active_index(&self) -> Option<usize> {
        self.state.lock().ok().and_then(|s| s.active_index())
    }

    /// Length of the installed pool
    pub fn pool_len(&self) -> usize {
        self.pool_len
    }

    /// Whether a timer thread is currently running
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Receiver yielding the active index after every tick
    pub fn ticks(&self) -> Option<Receiver<usize>> {
        self.ticks_rx.clone()
    }

    /// Stop and join the timer thread; safe to call repeatedly
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.timer.take() {
            // The thread may have already exited; both results are fine
            let _ = handle.stop_tx.send(());
            let _ = handle.thread.join();
        }
        self.ticks_rx = None;
    }
}

impl Drop for RotationScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_fresh_pool_starts_at_zero() {
        assert_eq!(RotationState::for_pool(5).active_index(), Some(0));
        assert_eq!(RotationState::for_pool(0), RotationState::Idle);
    }

    #[test]
    fn test_state_wraparound() {
        // After exactly L ticks the index returns to its tick-0 value
        let pool_len = 4;
        let mut state = RotationState::for_pool(pool_len);
        let start = state.active_index();

        for tick in 1..pool_len {
            state.advance(pool_len);
            assert_eq!(state.active_index(), Some(tick));
        }
        state.advance(pool_len);
        assert_eq!(state.active_index(), start);
    }

    #[test]
    fn test_state_advance_idle_is_noop() {
        let mut state = RotationState::Idle;
        state.advance(10);
        assert_eq!(state, RotationState::Idle);

        let mut displaying = RotationState::Displaying { active_index: 2 };
        displaying.advance(0);
        assert_eq!(displaying.active_index(), Some(2));
    }

    #[test]
    fn test_scheduler_empty_pool_stays_idle() {
        let mut scheduler = RotationScheduler::new(Duration::from_millis(5));
        scheduler.install_pool(0);

        assert_eq!(scheduler.active_index(), None);
        assert!(!scheduler.is_running());
        assert!(scheduler.ticks().is_none());
    }

    #[test]
    fn test_scheduler_timer_advances() {
        let mut scheduler = RotationScheduler::new(Duration::from_millis(5));
        scheduler.install_pool(3);
        assert_eq!(scheduler.active_index(), Some(0));

        let ticks = scheduler.ticks().unwrap();
        let first = ticks.recv_timeout(Duration::from_secs(2)).unwrap();
        let second = ticks.recv_timeout(Duration::from_secs(2)).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        scheduler.shutdown();
    }

    #[test]
    fn test_scheduler_wraps_modulo_pool_len() {
        let mut scheduler = RotationScheduler::new(Duration::from_millis(5));
        scheduler.install_pool(2);

        let ticks = scheduler.ticks().unwrap();
        let observed: Vec<usize> = (0..4)
            .map(|_| ticks.recv_timeout(Duration::from_secs(2)).unwrap())
            .collect();

        assert_eq!(observed, vec![1, 0, 1, 0]);
        scheduler.shutdown();
    }

    #[test]
    fn test_scheduler_rebuild_resets_index() {
        let mut scheduler = RotationScheduler::new(Duration::from_millis(5));
        scheduler.install_pool(5);

        let ticks = scheduler.ticks().unwrap();
        let _ = ticks.recv_timeout(Duration::from_secs(2)).unwrap();

        // Rebuild with a different length: index resets, old timer is gone
        scheduler.install_pool(2);
        assert_eq!(scheduler.active_index(), Some(0));
        assert!(scheduler.is_running());

        scheduler.shutdown();
    }

    #[test]
    fn test_scheduler_rebuild_to_empty_cancels_timer() {
        let mut scheduler = RotationScheduler::new(Duration::from_millis(5));
        scheduler.install_pool(3);
        assert!(scheduler.is_running());

        scheduler.install_pool(0);
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.active_index(), None);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut scheduler = RotationScheduler::new(Duration::from_millis(5));
        scheduler.install_pool(3);

        scheduler.shutdown();
        scheduler.shutdown(); // double teardown must be a no-op
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_drop_cancels_timer() {
        let scheduler = {
            let mut s = RotationScheduler::new(Duration::from_millis(5));
            s.install_pool(3);
            s
        };
        // Dropping while the timer runs must join cleanly, not hang or panic
        drop(scheduler);
    }
}
