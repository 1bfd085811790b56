// ABOUTME: Magnus-formula dew-point approximation
// ABOUTME: Rejects non-positive humidity where the underlying logarithm is undefined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Dew-point calculation
//!
//! Magnus-Tetens approximation with a = 17.27 and b = 237.7. At 100%
//! relative humidity the dew point equals the air temperature; in very dry
//! air it falls far below it. The formula takes `ln(humidity / 100)`, so
//! zero humidity is a mathematical singularity rather than a valid input;
//! it is rejected as an input-contract violation instead of letting a
//! non-finite value escape.

#![allow(clippy::suboptimal_flops)] // formulas keep the published coefficient order

use crate::errors::{AppError, AppResult};
use crate::meteorological_constants::magnus;

/// Calculate the dew point in Celsius via the Magnus formula
///
/// `temp_celsius` is air temperature in Celsius; `humidity` is relative
/// humidity as a 0-100 percentage and must be strictly positive. The
/// result is not clamped.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` when `humidity <= 0`, where the
/// formula's logarithm is undefined
pub fn dew_point(temp_celsius: f64, humidity: f64) -> AppResult<f64> {
    if humidity <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Dew point requires humidity > 0%, got {humidity}"
        )));
    }

    let alpha = (magnus::A * temp_celsius) / (magnus::B + temp_celsius) + (humidity / 100.0).ln();
    Ok((magnus::B * alpha) / (magnus::A - alpha))
}
