// ABOUTME: Additive precipitation-probability estimate from pressure, humidity, and conditions
// ABOUTME: Clamps the accumulated total to 0-100 once at the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Precipitation-probability estimate
//!
//! An additive heuristic, not a forecast model: low pressure, humid air,
//! and condition text describing clouds or active precipitation each push
//! the estimate up. Contributions accumulate unbounded and the total is
//! clamped to [0, 100] exactly once at the end.

#![allow(clippy::suboptimal_flops)] // contributions accumulate in rule order

use crate::meteorological_constants::precipitation as params;

/// Estimate precipitation probability as a 0-100 percentage
///
/// `pressure_hpa` may be absent (stations without a barometer contribute
/// nothing from pressure). `humidity` is a 0-100 percentage and
/// `conditions` is free-text weather description matched
/// case-insensitively.
///
/// Condition matching is mutually exclusive with first match winning:
/// the rain family ("rain", "drizzle", "shower", "thunderstorm") takes
/// priority over "overcast", which takes priority over "cloud". Text
/// matching several categories scores only the highest-priority one.
#[must_use]
pub fn precipitation_probability(
    pressure_hpa: Option<f64>,
    humidity: f64,
    conditions: &str,
) -> f64 {
    let mut probability = 0.0;

    if let Some(pressure) = pressure_hpa {
        if pressure < params::PRESSURE_REFERENCE_HPA {
            probability += (params::PRESSURE_REFERENCE_HPA - pressure)
                * params::PRESSURE_DEFICIT_FACTOR;
        }
    }

    if humidity > params::HUMIDITY_THRESHOLD_PCT {
        probability += (humidity - params::HUMIDITY_THRESHOLD_PCT)
            * params::HUMIDITY_EXCESS_FACTOR;
    }

    probability += condition_contribution(conditions);

    probability.clamp(0.0, 100.0)
}

/// Contribution of the condition text, first matching category wins
fn condition_contribution(conditions: &str) -> f64 {
    let lowered = conditions.to_lowercase();
    if params::RAIN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        params::RAIN_CONTRIBUTION
    } else if lowered.contains("overcast") {
        params::OVERCAST_CONTRIBUTION
    } else if lowered.contains("cloud") {
        params::CLOUD_CONTRIBUTION
    } else {
        0.0
    }
}
