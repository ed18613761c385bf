// Copyright (c) 2026 rezky_nightky

use std::fmt;
use std::num::NonZeroU32;

use crate::clock::{Clock, Millis};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(NonZeroU32);

impl Period {
    pub fn from_millis(ms: Millis) -> Result<Self> {
        NonZeroU32::new(ms).map(Self).ok_or(Error::ZeroPeriod)
    }

    pub fn as_millis(self) -> Millis {
        self.0.get()
    }

    /// Keeps `fallback` when `ms` is 0.
    pub(crate) fn from_millis_or(ms: Millis, fallback: Period) -> Self {
        NonZeroU32::new(ms).map(Self).unwrap_or(fallback)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl TryFrom<Millis> for Period {
    type Error = Error;

    fn try_from(ms: Millis) -> Result<Self> {
        Self::from_millis(ms)
    }
}

/// Polled periodic timer. Readings go through wrapping subtraction, so a
/// clock overflow is harmless as long as polls are less than one full wrap
/// apart.
#[derive(Clone, Debug)]
pub struct Timer<C> {
    clock: C,
    last_tic: Millis,
    period: Period,
}

impl<C: Clock> Timer<C> {
    pub fn new(clock: C, period: Period) -> Self {
        let last_tic = clock.now();
        Self {
            clock,
            last_tic,
            period,
        }
    }

    pub fn with_period_ms(clock: C, period_ms: Millis) -> Result<Self> {
        Ok(Self::new(clock, Period::from_millis(period_ms)?))
    }

    // Restarts the phase from now.
    pub fn set_period(&mut self, period: Period) {
        self.period = period;
        self.last_tic = self.clock.now();
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn last_tic(&self) -> Millis {
        self.last_tic
    }

    /// Fires at most once per call. The phase snaps to the latest period
    /// boundary at or before now, so missed periods are skipped, not
    /// replayed.
    pub fn tictoc(&mut self) -> bool {
        let tic = self.clock.now();
        let elapsed = tic.wrapping_sub(self.last_tic);
        let period = self.period.as_millis();

        if elapsed < period {
            return false;
        }

        self.last_tic = tic.wrapping_sub(elapsed % period);
        true
    }
}
