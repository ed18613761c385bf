// Copyright (c) 2026 rezky_nightky

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds on a 32-bit counter. Wraps after roughly 49.7 days, the same
/// way a microcontroller `millis()` does.
pub type Millis = u32;

pub trait Clock {
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        // Truncation is the wraparound.
        self.origin.elapsed().as_millis() as Millis
    }
}

// Clones share one counter.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, t: Millis) {
        self.now.set(t);
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new(10);
        let b = a.clone();
        a.advance(5);
        assert_eq!(b.now(), 15);
        b.set(u32::MAX);
        a.advance(2);
        assert_eq!(b.now(), 1);
    }

    #[test]
    fn system_clock_starts_near_zero() {
        let c = SystemClock::new();
        assert!(c.now() < 1000);
    }
}
