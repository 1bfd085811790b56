// ABOUTME: Composite weather comfort score over temperature, humidity, wind, and pressure
// ABOUTME: Four independent penalty terms against a 100-point ceiling, clamped at the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Comfort-score calculation
//!
//! Starts at 100 and subtracts four independent penalties: temperature and
//! humidity outside their ideal bands, wind outside its ideal band, and
//! pressure deviating from the 1013 hPa reference beyond a deadband. The
//! wind penalty is asymmetric: excess wind scales per m/s while stagnant
//! air (below 0.5 m/s, zero included) costs a flat penalty. Penalties
//! accumulate unclamped; the score is clamped to [0, 100] exactly once at
//! the end, so one extreme factor alone can drive it to the floor.

use crate::meteorological_constants::comfort as params;

/// Calculate the composite comfort score as a 0-100 value
///
/// `temp_celsius` is air temperature in Celsius, `humidity` a 0-100
/// percentage, `wind_ms` wind speed in meters per second, and
/// `pressure_hpa` barometric pressure in hPa.
#[must_use]
pub fn comfort_score(temp_celsius: f64, humidity: f64, wind_ms: f64, pressure_hpa: f64) -> f64 {
    let temp_deviation = (params::IDEAL_TEMP_MIN_CELSIUS - temp_celsius)
        .max(temp_celsius - params::IDEAL_TEMP_MAX_CELSIUS)
        .max(0.0);
    let temp_penalty = params::TEMP_PENALTY_PER_DEGREE * temp_deviation;

    let humidity_deviation = (params::IDEAL_HUMIDITY_MIN_PCT - humidity)
        .max(humidity - params::IDEAL_HUMIDITY_MAX_PCT)
        .max(0.0);
    let humidity_penalty = params::HUMIDITY_PENALTY_PER_PCT * humidity_deviation;

    let wind_penalty = if wind_ms > params::IDEAL_WIND_MAX_MS {
        params::WIND_PENALTY_PER_MS * (wind_ms - params::IDEAL_WIND_MAX_MS)
    } else if wind_ms < params::IDEAL_WIND_MIN_MS {
        params::STAGNANT_AIR_PENALTY
    } else {
        0.0
    };

    let pressure_deviation = (pressure_hpa - params::REFERENCE_PRESSURE_HPA).abs();
    let pressure_penalty = if pressure_deviation > params::PRESSURE_DEADBAND_HPA {
        params::PRESSURE_PENALTY_PER_HPA * (pressure_deviation - params::PRESSURE_DEADBAND_HPA)
    } else {
        0.0
    };

    let score =
        params::MAX_SCORE - (temp_penalty + humidity_penalty + wind_penalty + pressure_penalty);
    score.clamp(0.0, params::MAX_SCORE)
}
