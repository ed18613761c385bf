// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::str::FromStr;

use clap::Parser;
use pixelrain::{InitialWait, Millis};

pub const DEFAULT_PARAMS_USAGE: &str = "DEFAULT PARAMS USAGE:\n  pixelrain --fps 60 --wait-ms 500,3000 --fall-ms 40,120 --initial-wait minimum";

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub fn default_params_usage_for_help() -> String {
    if !color_enabled_stdout() {
        return DEFAULT_PARAMS_USAGE.to_string();
    }
    let mut out = String::with_capacity(DEFAULT_PARAMS_USAGE.len() + 32);
    for (i, line) in DEFAULT_PARAMS_USAGE.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if let Some(rest) = line.strip_prefix("  pixelrain") {
            out.push_str("  \x1b[1;34mpixelrain\x1b[0m");
            out.push_str(rest);
        } else {
            out.push_str("\x1b[1;36m");
            out.push_str(line);
            out.push_str("\x1b[0m");
        }
    }
    out
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialWaitArg {
    #[value(name = "minimum")]
    Minimum,
    #[value(name = "random")]
    Random,
}

impl From<InitialWaitArg> for InitialWait {
    fn from(v: InitialWaitArg) -> Self {
        match v {
            InitialWaitArg::Minimum => InitialWait::Minimum,
            InitialWaitArg::Random => InitialWait::Random,
        }
    }
}

/// `LOW,HIGH` in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MsRange {
    pub low: Millis,
    pub high: Millis,
}

impl FromStr for MsRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(',')
            .ok_or_else(|| "expected: NUM1,NUM2".to_string())?;
        let low: Millis = a
            .trim()
            .parse()
            .map_err(|_| "invalid low value".to_string())?;
        let high: Millis = b
            .trim()
            .parse()
            .map_err(|_| "invalid high value".to_string())?;
        if low == 0 || high == 0 || low > high {
            return Err("range must be >0 and low <= high".to_string());
        }
        Ok(Self { low, high })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "pixelrain", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        short = 'w',
        long = "wait-ms",
        default_value = "500,3000",
        help_heading = "RAIN",
        help = "Pause before a droplet respawns in ms: LOW,HIGH (min 1 max 600000)"
    )]
    pub wait_ms: MsRange,

    #[arg(
        short = 'F',
        long = "fall-ms",
        default_value = "40,120",
        help_heading = "RAIN",
        help = "Time per row while falling in ms: LOW,HIGH (min 1 max 60000)"
    )]
    pub fall_ms: MsRange,

    #[arg(
        long = "initial-wait",
        default_value_t = InitialWaitArg::Minimum,
        value_enum,
        help_heading = "RAIN",
        help = "First respawn wait: minimum (all columns start together) or random"
    )]
    pub initial_wait: InitialWaitArg,

    #[arg(
        long = "seed",
        help_heading = "RAIN",
        help = "Seed for the random source (default: from the OS)"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "cols",
        help_heading = "MATRIX",
        help = "LED columns (min 1 max 512; default: fit the terminal)"
    )]
    pub cols: Option<u16>,

    #[arg(
        long = "rows",
        help_heading = "MATRIX",
        help = "LED rows (min 1 max 512; default: fit the terminal)"
    )]
    pub rows: Option<u16>,

    #[arg(
        short = 'f',
        long = "fps",
        default_value_t = 60.0,
        help_heading = "GENERAL",
        help = "Target FPS (min 1 max 240)"
    )]
    pub fps: f64,

    #[arg(
        long = "duration",
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,

    #[arg(
        short = 's',
        long = "screensaver",
        help_heading = "GENERAL",
        help = "Screensaver mode (exit on keypress)"
    )]
    pub screensaver: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}
