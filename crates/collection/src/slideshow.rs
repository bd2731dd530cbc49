use std::time::{Duration, Instant};

use glimpse_runtime::clamp_slideshow_secs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowState {
    /// Not available, e.g. fewer than two images.
    Denied,
    Stopped,
    Running,
}

/// Timer bookkeeping for automatic advancing.
///
/// The owner polls `due` from its event loop; nothing here sleeps.
#[derive(Debug, Clone)]
pub struct Slideshow {
    interval: Duration,
    state: SlideshowState,
    deadline: Option<Instant>,
}

impl Slideshow {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(clamp_slideshow_secs(interval_secs)),
            state: SlideshowState::Denied,
            deadline: None,
        }
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SlideshowState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval; a running slideshow restarts its countdown.
    pub fn set_interval(&mut self, secs: u64, now: Instant) {
        self.interval = Duration::from_secs(clamp_slideshow_secs(secs));
        self.rearm(now);
    }

    pub fn allow(&mut self) {
        if self.state == SlideshowState::Denied {
            self.state = SlideshowState::Stopped;
        }
    }

    pub fn deny(&mut self) {
        self.state = SlideshowState::Denied;
        self.deadline = None;
    }

    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != SlideshowState::Stopped {
            return false;
        }
        self.state = SlideshowState::Running;
        self.deadline = Some(now + self.interval);
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.state != SlideshowState::Running {
            return false;
        }
        self.state = SlideshowState::Stopped;
        self.deadline = None;
        true
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.stop()
        } else {
            self.start(now)
        }
    }

    /// Restart the countdown of a running slideshow.
    pub fn rearm(&mut self, now: Instant) {
        if self.is_running() {
            self.deadline = Some(now + self.interval);
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }
}

#[cfg(test)]
#[path = "slideshow_tests.rs"]
mod tests;
