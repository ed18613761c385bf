// Copyright (c) 2026 rezky_nightky

use crate::clock::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("period must be greater than 0 ms")]
    ZeroPeriod,
    #[error("invalid range {min},{max} (low must be <= high)")]
    InvertedRange { min: Millis, max: Millis },
    #[error("grid must have at least one row")]
    ZeroRows,
    #[error("grid must have at least one column")]
    ZeroCols,
}

pub type Result<T> = std::result::Result<T, Error>;
