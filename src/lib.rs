// Copyright (c) 2026 rezky_nightky

pub mod clock;
pub mod droplet;
pub mod error;
pub mod frame;
pub mod rain;
pub mod random;
pub mod timer;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use droplet::{Droplet, DropletConfig, InitialWait, PeriodRange};
pub use error::{Error, Result};
pub use frame::Frame;
pub use rain::Rain;
pub use random::{rand_range, RandomSource, RngSource, RANDOM_STEPS};
pub use timer::{Period, Timer};
