// ABOUTME: Pure meteorological formula implementations for derived metrics
// ABOUTME: Heat index, wind chill, dew point, precipitation probability, comfort score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Derived-metric formulas
//!
//! Each submodule implements one formula family as pure functions: same
//! inputs always produce the same output, no shared state between calls,
//! and every call may run concurrently from any thread. Input units are
//! part of each function's contract and are never converted internally;
//! callers align units first (see [`crate::units`]).

/// NWS heat index and wind chill (apparent temperature)
pub mod apparent_temperature;

/// Composite comfort score over temperature, humidity, wind, and pressure
pub mod comfort;

/// Magnus-formula dew point
pub mod dew_point;

/// Additive precipitation-probability estimate
pub mod precipitation;

pub use apparent_temperature::{heat_index, wind_chill};
pub use comfort::comfort_score;
pub use dew_point::dew_point;
pub use precipitation::precipitation_probability;
