// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised at the chrono boundary.
//!
//! The calendar, sidereal and angle conversions are total functions and never
//! fail; only conversions that must land inside chrono's representable range
//! return [`TimeResult`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("longitude must be finite, got {0}")]
    NonFiniteLongitude(f64),

    #[error("{0} is outside the representable date range")]
    OutOfRange(String),
}

pub type TimeResult<T> = Result<T, TimeError>;
