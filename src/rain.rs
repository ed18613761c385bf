// Copyright (c) 2026 rezky_nightky

use log::debug;

use crate::clock::Clock;
use crate::droplet::{Droplet, DropletConfig};
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::random::RandomSource;

pub struct Rain<C, R> {
    cols: u16,
    rows: u16,
    pub pause: bool,

    config: DropletConfig,
    clock: C,
    rng: R,

    droplets: Vec<Droplet<C>>,
    // row each column's pixel was last lit at
    drawn: Vec<Option<u16>>,
    force_draw_everything: bool,
}

impl<C: Clock + Clone, R: RandomSource> Rain<C, R> {
    pub fn new(clock: C, rng: R, cols: u16, rows: u16, config: DropletConfig) -> Result<Self> {
        let mut rain = Self {
            cols,
            rows,
            pause: false,
            config,
            clock,
            rng,
            droplets: Vec::new(),
            drawn: Vec::new(),
            force_draw_everything: true,
        };
        rain.reset(cols, rows)?;
        Ok(rain)
    }

    // All droplets restart idle.
    pub fn reset(&mut self, cols: u16, rows: u16) -> Result<()> {
        if cols == 0 {
            return Err(Error::ZeroCols);
        }
        if rows == 0 {
            return Err(Error::ZeroRows);
        }

        let droplets = (0..cols)
            .map(|col| {
                Droplet::new(self.clock.clone(), col, rows, &self.config, &mut self.rng)
            })
            .collect::<Result<Vec<_>>>()?;

        self.cols = cols;
        self.rows = rows;
        self.droplets = droplets;
        self.drawn.clear();
        self.drawn.resize(cols as usize, None);
        self.force_draw_everything = true;

        debug!(
            "rain reset to {}x{} (wait {}..{}, fall {}..{}, initial {:?})",
            cols,
            rows,
            self.config.wait_before_respawn.min(),
            self.config.wait_before_respawn.max(),
            self.config.fall_period.min(),
            self.config.fall_period.max(),
            self.config.initial_wait,
        );
        Ok(())
    }

    pub fn droplets(&self) -> &[Droplet<C>] {
        &self.droplets
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn toggle_pause(&mut self) {
        self.pause = !self.pause;
    }

    // Returns how many droplets moved.
    pub fn update(&mut self) -> usize {
        if self.pause {
            return 0;
        }

        let mut moved = 0;
        for d in &mut self.droplets {
            if d.update(&mut self.rng) {
                moved += 1;
            }
        }
        moved
    }

    pub fn render(&mut self, frame: &mut Frame) {
        if self.force_draw_everything {
            frame.clear();
            self.drawn.fill(None);
        }

        for d in &self.droplets {
            let col = d.col();
            let now = d.visible().then(|| d.row());
            let Some(prev) = self.drawn.get_mut(col as usize) else {
                continue;
            };
            if *prev == now && !self.force_draw_everything {
                continue;
            }

            if let Some(row) = *prev {
                frame.set(col, row, false);
            }
            if let Some(row) = now {
                frame.set(col, row, true);
            }
            *prev = now;
        }

        self.force_draw_everything = false;
    }

    pub fn rain(&mut self, frame: &mut Frame) -> usize {
        let moved = self.update();
        self.render(frame);
        moved
    }
}
