//! Rest timer
//!
//! A countdown between sets. The caller drives it with one `tick` per second.

/// Preset durations in seconds
pub const REST_PRESETS: [u32; 5] = [30, 60, 90, 120, 180];

pub const DEFAULT_REST_SECS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestTimer {
    initial: u32,
    remaining: u32,
    running: bool,
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REST_SECS)
    }
}

impl RestTimer {
    pub fn new(seconds: u32) -> Self {
        Self {
            initial: seconds,
            remaining: seconds,
            running: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting down. Does nothing once the timer has reached zero.
    pub fn start(&mut self) {
        self.running = self.remaining > 0;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Back to the selected duration, stopped
    pub fn reset(&mut self) {
        self.remaining = self.initial;
        self.running = false;
    }

    /// Pick a new duration; stops the timer
    pub fn select_preset(&mut self, seconds: u32) {
        self.initial = seconds;
        self.reset();
    }

    /// Advance one second. Returns `true` on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            tracing::debug!("rest over after {}s", self.initial);
            return true;
        }
        false
    }

    /// Elapsed share of the selected duration, 0 to 100
    pub fn progress_percent(&self) -> f64 {
        if self.initial == 0 {
            return 0.0;
        }
        f64::from(self.initial - self.remaining) / f64::from(self.initial) * 100.0
    }

    /// Remaining time as `m:ss`
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let timer = RestTimer::default();
        assert_eq!(timer.remaining(), 60);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "1:00");
        assert_eq!(timer.progress_percent(), 0.0);
    }

    #[test]
    fn test_countdown_completes_once() {
        let mut timer = RestTimer::new(30);
        timer.start();

        let completions = (0..40).filter(|_| timer.tick()).count();

        assert_eq!(completions, 1);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.progress_percent(), 100.0);
        assert_eq!(timer.display(), "0:00");

        timer.start();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_ticks_ignored_while_paused() {
        let mut timer = RestTimer::new(90);
        timer.tick();
        assert_eq!(timer.remaining(), 90);

        timer.start();
        for _ in 0..15 {
            timer.tick();
        }
        timer.pause();
        timer.tick();
        assert_eq!(timer.display(), "1:15");
    }

    #[test]
    fn test_reset_and_presets() {
        let mut timer = RestTimer::default();
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.remaining(), 60);
        assert!(!timer.is_running());

        timer.select_preset(REST_PRESETS[4]);
        assert_eq!(timer.initial(), 180);
        assert_eq!(timer.display(), "3:00");

        timer.start();
        for _ in 0..45 {
            timer.tick();
        }
        assert_eq!(timer.progress_percent(), 25.0);
    }
}
