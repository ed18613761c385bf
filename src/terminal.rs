// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{
    cursor, event,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use pixelrain::Frame;

/// Terminal cells per LED horizontally; keeps the pixels roughly square.
pub const CELLS_PER_LED: u16 = 2;

const LIT: &str = "██";
const DARK: &str = "· ";
const LIT_COLOR: Color = Color::Rgb {
    r: 0x40,
    g: 0xa0,
    b: 0xff,
};
const DARK_COLOR: Color = Color::DarkGrey;

pub struct Terminal {
    stdout: Stdout,
    last_size: Option<(u16, u16)>,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let init_res: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore(&mut out);
            return Err(e);
        }
        Ok(Self {
            stdout: out,
            last_size: None,
        })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll_event(timeout: std::time::Duration) -> Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event() -> Result<event::Event> {
        event::read()
    }

    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let size = (frame.width, frame.height);
        let full = frame.is_dirty_all() || self.last_size != Some(size);

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..frame.height {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                let mut cur: Option<bool> = None;
                for x in 0..frame.width {
                    let lit = frame.get(x, y).unwrap_or(false);
                    if cur != Some(lit) {
                        self.stdout.queue(SetForegroundColor(led_color(lit)))?;
                        cur = Some(lit);
                    }
                    self.stdout.queue(Print(led_glyph(lit)))?;
                }
            }
        } else {
            let width = frame.width as usize;
            for &idx in frame.dirty_indices() {
                let x = (idx % width) as u16;
                let y = (idx / width) as u16;
                let lit = frame.pixel_at_index(idx);
                self.stdout
                    .queue(cursor::MoveTo(x * CELLS_PER_LED, y))?
                    .queue(SetForegroundColor(led_color(lit)))?
                    .queue(Print(led_glyph(lit)))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        self.last_size = Some(size);
        frame.clear_dirty();
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout);
    }
}

fn led_glyph(lit: bool) -> &'static str {
    if lit {
        LIT
    } else {
        DARK
    }
}

fn led_color(lit: bool) -> Color {
    if lit {
        LIT_COLOR
    } else {
        DARK_COLOR
    }
}

fn restore(out: &mut Stdout) {
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

pub fn restore_terminal_best_effort() {
    restore(&mut stdout());
}

/// LED matrix size that fits a terminal of `cols x rows` cells.
pub fn matrix_size_for(cols: u16, rows: u16) -> (u16, u16) {
    ((cols / CELLS_PER_LED).max(1), rows.max(1))
}
