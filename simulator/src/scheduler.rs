//! Decides when ticks happen, so the session doesn't care what's driving it.

use std::time::Duration;

/// Something that hands out ticks. The host calls `pump` once per frame with however much
/// real time went by, and the scheduler says how many ticks are due.
pub trait TickScheduler {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;

    /// Account for `elapsed` time and return how many ticks are due. Stopped schedulers
    /// return 0.
    fn advance(&mut self, elapsed: Duration) -> u32;

    /// Run `on_tick` once for every due tick. Returns the number run.
    fn pump<F: FnMut()>(&mut self, elapsed: Duration, mut on_tick: F) -> u32
    where
        Self: Sized,
    {
        let due = self.advance(elapsed);
        for _ in 0..due {
            on_tick();
        }
        due
    }
}

/// Ticks at a fixed rate no matter how often it gets pumped.
/// If the host falls way behind, the backlog is dropped instead of run all at once.
#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    /// Time banked towards the next tick
    residue: Duration,
    max_catch_up: u32,
    running: bool,
}

impl FixedStep {
    pub fn new(ticks_per_second: u32) -> Self {
        FixedStep {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            residue: Duration::from_secs(0),
            max_catch_up: 4,
            running: false,
        }
    }

    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }
}

impl TickScheduler for FixedStep {
    fn start(&mut self) {
        self.running = true;
        self.residue = Duration::from_secs(0);
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.residue += elapsed;
        let mut due = 0;
        while self.residue >= self.step {
            self.residue -= self.step;
            due += 1;
        }
        if due > self.max_catch_up {
            log::debug!("Dropping {} ticks, host is running behind", due - self.max_catch_up);
            due = self.max_catch_up;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_scheduler_never_ticks() {
        let mut s = FixedStep::new(60);
        assert_eq!(s.advance(Duration::from_secs(1)), 0);
        s.start();
        s.stop();
        assert_eq!(s.pump(Duration::from_secs(1), || panic!("should not tick")), 0);
    }

    #[test]
    fn ticks_accumulate_across_frames() {
        let mut s = FixedStep::new(100);
        s.start();
        assert_eq!(s.advance(Duration::from_millis(4)), 0);
        assert_eq!(s.advance(Duration::from_millis(4)), 0);
        assert_eq!(s.advance(Duration::from_millis(4)), 1);
        let mut count = 0;
        assert_eq!(s.pump(Duration::from_millis(20), || count += 1), 2);
        assert_eq!(count, 2);
    }

    #[test]
    fn backlog_is_capped() {
        let mut s = FixedStep::new(60).with_max_catch_up(3);
        s.start();
        assert_eq!(s.advance(Duration::from_secs(5)), 3);
        assert_eq!(s.advance(Duration::from_millis(1)), 0);
    }
}
