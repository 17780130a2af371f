//! Autoplay scheduler
//!
//! Owns the only autoplay timer. The timer is deadline based: callers ask for
//! the next deadline, sleep until it, then [`AutoplayScheduler::poll`] reports
//! whether it passed. Each tick is one "next slide, wrapping" command for the
//! caller to dispatch. A poll that comes a whole period late or more fires
//! once and restarts the schedule from that poll.

use std::time::{Duration, Instant};

use tracing::{debug, info};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle of the active autoplay timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    pub id: u64,
    pub period: Duration,
    pub next_deadline: Instant,
}

/// What a reconcile step did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayTransition {
    Started,
    Restarted,
    Stopped,
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct AutoplayScheduler {
    timer: Option<AutoplayTimer>,
    next_timer_id: u64,
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the timer in line with the desired state.
    ///
    /// A running timer whose period differs from `period` is replaced rather
    /// than adjusted in flight.
    pub fn reconcile(
        &mut self,
        should_run: bool,
        period: Duration,
        now: Instant,
    ) -> AutoplayTransition {
        let period = period.max(MIN_PERIOD);
        match (self.timer, should_run) {
            (None, false) => AutoplayTransition::Unchanged,
            (Some(_), false) => {
                self.stop();
                AutoplayTransition::Stopped
            }
            (Some(timer), true) if timer.period == period => AutoplayTransition::Unchanged,
            (Some(_), true) => {
                self.start(period, now);
                AutoplayTransition::Restarted
            }
            (None, true) => {
                self.start(period, now);
                AutoplayTransition::Started
            }
        }
    }

    /// Start a fresh timer, stopping any running one first
    pub fn start(&mut self, period: Duration, now: Instant) -> AutoplayTimer {
        self.stop();

        let period = period.max(MIN_PERIOD);
        self.next_timer_id += 1;
        let timer = AutoplayTimer {
            id: self.next_timer_id,
            period,
            next_deadline: now + period,
        };
        self.timer = Some(timer);
        info!(timer = timer.id, period_ms = period.as_millis() as u64, "Autoplay started");
        timer
    }

    /// Stop the running timer. Returns false if none was running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                info!(timer = timer.id, "Autoplay stopped");
                true
            }
            None => false,
        }
    }

    /// Whether the deadline passed by `now`. Fires at most once per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.next_deadline > now {
            return false;
        }

        timer.next_deadline += timer.period;
        if timer.next_deadline <= now {
            debug!(timer = timer.id, "Autoplay fell behind, rescheduling from now");
            timer.next_deadline = now + timer.period;
        }
        debug!(timer = timer.id, "Autoplay tick");
        true
    }

    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.next_deadline)
    }

    #[inline]
    pub fn timer(&self) -> Option<AutoplayTimer> {
        self.timer
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Unconditionally cancel the timer
    pub fn teardown(&mut self) {
        self.stop();
    }
}
