// Copyright (c) 2026 rezky_nightky

use log::trace;

use crate::clock::{Clock, Millis};
use crate::error::{Error, Result};
use crate::random::{rand_range, RandomSource, RANDOM_STEPS};
use crate::timer::{Period, Timer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodRange {
    min: Period,
    max: Period,
}

impl PeriodRange {
    pub fn new(min_ms: Millis, max_ms: Millis) -> Result<Self> {
        let min = Period::from_millis(min_ms)?;
        let max = Period::from_millis(max_ms)?;
        if max < min {
            return Err(Error::InvertedRange {
                min: min_ms,
                max: max_ms,
            });
        }
        Ok(Self { min, max })
    }

    pub fn fixed(ms: Millis) -> Result<Self> {
        Self::new(ms, ms)
    }

    pub fn min(&self) -> Period {
        self.min
    }

    pub fn max(&self) -> Period {
        self.max
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Period {
        let ms = rand_range(rng, self.min.as_millis(), self.max.as_millis(), RANDOM_STEPS);
        // ms >= min >= 1
        Period::from_millis_or(ms, self.min)
    }
}

/// How the very first respawn wait is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialWait {
    /// Use the lower respawn bound as-is. Every droplet of a freshly built
    /// matrix then starts falling at the same moment.
    #[default]
    Minimum,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropletConfig {
    pub wait_before_respawn: PeriodRange,
    pub fall_period: PeriodRange,
    pub initial_wait: InitialWait,
}

impl DropletConfig {
    pub fn new(wait_before_respawn: PeriodRange, fall_period: PeriodRange) -> Self {
        Self {
            wait_before_respawn,
            fall_period,
            initial_wait: InitialWait::Minimum,
        }
    }

    pub fn with_initial_wait(mut self, initial_wait: InitialWait) -> Self {
        self.initial_wait = initial_wait;
        self
    }
}

// `row == rows` means off the grid, waiting to respawn.
#[derive(Clone, Debug)]
pub struct Droplet<C> {
    rows: u16,
    row: u16,
    col: u16,
    timer: Timer<C>,
    wait_before_respawn: PeriodRange,
    fall_period: PeriodRange,
}

impl<C: Clock> Droplet<C> {
    pub fn new<R: RandomSource + ?Sized>(
        clock: C,
        col: u16,
        rows: u16,
        config: &DropletConfig,
        rng: &mut R,
    ) -> Result<Self> {
        if rows == 0 {
            return Err(Error::ZeroRows);
        }

        let first_wait = match config.initial_wait {
            InitialWait::Minimum => config.wait_before_respawn.min(),
            InitialWait::Random => config.wait_before_respawn.sample(rng),
        };

        Ok(Self {
            rows,
            row: rows,
            col,
            timer: Timer::new(clock, first_wait),
            wait_before_respawn: config.wait_before_respawn,
            fall_period: config.fall_period,
        })
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn visible(&self) -> bool {
        self.row < self.rows
    }

    pub fn timer(&self) -> &Timer<C> {
        &self.timer
    }

    // Returns whether the row changed.
    pub fn update<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.timer.tictoc() {
            return false;
        }

        if self.visible() {
            self.row += 1;

            if !self.visible() {
                let wait = self.wait_before_respawn.sample(rng);
                trace!("droplet col {} landed, respawn in {}", self.col, wait);
                self.timer.set_period(wait);
            }
        } else {
            self.row = 0;
            let fall = self.fall_period.sample(rng);
            trace!("droplet col {} respawned, falling every {}", self.col, fall);
            self.timer.set_period(fall);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::random::tests::Scripted;
    use proptest::prelude::*;

    fn config(wait: (Millis, Millis), fall: (Millis, Millis)) -> DropletConfig {
        DropletConfig::new(
            PeriodRange::new(wait.0, wait.1).unwrap(),
            PeriodRange::new(fall.0, fall.1).unwrap(),
        )
    }

    #[test]
    fn range_validation() {
        assert_eq!(PeriodRange::new(0, 10).unwrap_err(), Error::ZeroPeriod);
        assert_eq!(
            PeriodRange::new(20, 10).unwrap_err(),
            Error::InvertedRange { min: 20, max: 10 }
        );
        assert!(PeriodRange::fixed(5).is_ok());
    }

    #[test]
    fn sample_returns_the_drawn_step_exactly() {
        let range = PeriodRange::new(100, 200).unwrap();
        let got: Vec<u32> = [0u8, 3, 9]
            .iter()
            .map(|&d| range.sample(&mut Scripted::new(&[d])).as_millis())
            .collect();
        assert_eq!(got, vec![100, 130, 190]);
        assert_eq!(
            PeriodRange::fixed(7).unwrap().sample(&mut Scripted::new(&[4])),
            Period::from_millis(7).unwrap()
        );
    }

    #[test]
    fn zero_rows_is_rejected() {
        let mut rng = Scripted::new(&[0]);
        let err = Droplet::new(ManualClock::new(0), 0, 0, &config((1, 1), (1, 1)), &mut rng)
            .unwrap_err();
        assert_eq!(err, Error::ZeroRows);
    }

    #[test]
    fn starts_invisible_with_minimum_wait() {
        let mut rng = Scripted::new(&[9]);
        let d = Droplet::new(
            ManualClock::new(0),
            3,
            8,
            &config((100, 1000), (10, 20)),
            &mut rng,
        )
        .unwrap();
        assert_eq!(d.row(), 8);
        assert_eq!(d.col(), 3);
        assert!(!d.visible());
        assert_eq!(d.timer().period().as_millis(), 100);
    }

    #[test]
    fn random_initial_wait_draws_from_range() {
        let mut rng = Scripted::new(&[5]);
        let cfg = config((100, 200), (10, 20)).with_initial_wait(InitialWait::Random);
        let d = Droplet::new(ManualClock::new(0), 0, 4, &cfg, &mut rng).unwrap();
        assert_eq!(d.timer().period().as_millis(), 150);
    }

    #[test]
    fn does_nothing_until_timer_fires() {
        let clock = ManualClock::new(0);
        let mut rng = Scripted::new(&[0]);
        let mut d = Droplet::new(clock.clone(), 0, 4, &config((100, 100), (10, 10)), &mut rng)
            .unwrap();
        clock.advance(99);
        assert!(!d.update(&mut rng));
        assert_eq!(d.row(), 4);
        clock.advance(1);
        assert!(d.update(&mut rng));
        assert_eq!(d.row(), 0);
    }

    #[test]
    fn cycles_through_every_row_when_timer_always_fires() {
        let clock = ManualClock::new(0);
        let mut rng = Scripted::new(&[3, 7, 1]);
        let rows = 5;
        let mut d = Droplet::new(
            clock.clone(),
            2,
            rows,
            &config((10, 90), (10, 90)),
            &mut rng,
        )
        .unwrap();

        let mut seen = vec![d.row()];
        for _ in 0..(2 * (rows as usize + 1)) {
            // longer than any period the ranges can produce
            clock.advance(1000);
            assert!(d.update(&mut rng));
            seen.push(d.row());
        }
        assert_eq!(seen, vec![5, 0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn landing_draws_wait_and_respawn_draws_fall() {
        let clock = ManualClock::new(0);
        let mut rng = Scripted::new(&[2, 4]);
        let mut d = Droplet::new(
            clock.clone(),
            0,
            1,
            &config((100, 200), (1000, 2000)),
            &mut rng,
        )
        .unwrap();

        clock.advance(100);
        assert!(d.update(&mut rng));
        assert_eq!(d.row(), 0);
        assert_eq!(d.timer().period().as_millis(), 1200);

        clock.advance(1200);
        assert!(d.update(&mut rng));
        assert_eq!(d.row(), 1);
        assert!(!d.visible());
        assert_eq!(d.timer().period().as_millis(), 140);
    }

    #[test]
    fn fixed_ranges_fall_at_50ms_and_rest_100ms() {
        let clock = ManualClock::new(0);
        let mut rng = Scripted::new(&[0, 3, 9]);
        let mut d = Droplet::new(
            clock.clone(),
            0,
            8,
            &config((100, 100), (50, 50)),
            &mut rng,
        )
        .unwrap();

        // (time, row) of every change over three full cycles, polled each ms
        let mut changes = Vec::new();
        for t in 1..=3 * (100 + 8 * 50) {
            clock.set(t);
            if d.update(&mut rng) {
                changes.push((t, d.row()));
            }
        }

        let mut expected = Vec::new();
        let mut t = 0;
        for _ in 0..3 {
            t += 100;
            expected.push((t, 0));
            for row in 1..=8 {
                t += 50;
                expected.push((t, row));
            }
        }
        assert_eq!(changes, expected);
    }

    proptest! {
        #[test]
        fn visible_iff_on_grid(
            rows in 1u16..20,
            draws in proptest::collection::vec(0u8..10, 1..8),
            steps in proptest::collection::vec(0u32..300, 1..200),
        ) {
            let clock = ManualClock::new(0);
            let mut rng = Scripted::new(&draws);
            let mut d = Droplet::new(
                clock.clone(),
                0,
                rows,
                &config((20, 120), (5, 60)),
                &mut rng,
            )
            .unwrap();

            for step in steps {
                clock.advance(step);
                let before = d.row();
                let changed = d.update(&mut rng);
                prop_assert!(d.row() <= rows);
                prop_assert_eq!(d.visible(), d.row() < rows);
                if changed {
                    let expected = if before == rows { 0 } else { before + 1 };
                    prop_assert_eq!(d.row(), expected);
                } else {
                    prop_assert_eq!(d.row(), before);
                }
            }
        }

        #[test]
        fn sampled_periods_stay_in_range(min in 1u32..100_000, span in 0u32..100_000, draw in 0u8..10) {
            let range = PeriodRange::new(min, min + span).unwrap();
            let p = range.sample(&mut Scripted::new(&[draw])).as_millis();
            prop_assert!(p >= min);
            prop_assert!(p <= min + span);
            if span > 0 {
                prop_assert!(p < min + span);
            }
        }
    }
}
