use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Time source for run timing, as an offset from an arbitrary fixed epoch.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
    }
}

/// Manually advanced clock. Clones share the same time, so a test can keep a
/// handle after moving one into a session.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    current_time: Rc<std::cell::Cell<Duration>>,
}

impl FakeClock {
    pub fn new(start_time: Duration) -> Self {
        Self {
            current_time: Rc::new(std::cell::Cell::new(start_time)),
        }
    }

    pub fn advance(&self, amount: Duration) {
        self.current_time.set(self.current_time.get() + amount);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        self.current_time.get()
    }
}
