// ABOUTME: NWS apparent-temperature formulas: heat index and wind chill
// ABOUTME: Each returns None outside its physically valid regime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Apparent-temperature formulas
//!
//! Both formulas are conditionally defined: the heat index has no physical
//! meaning in cool air and wind chill has none in warm or still air.
//! Outside their regimes they return `None` rather than a spurious number,
//! so a computed value is always distinguishable from "not applicable".

#![allow(clippy::suboptimal_flops)] // formulas keep the published coefficient order

use crate::meteorological_constants::{rothfusz, wind_chill as wc};

/// Calculate the NWS heat index via the Rothfusz regression
///
/// `temp_fahrenheit` is air temperature in Fahrenheit; `humidity` is
/// relative humidity as a 0-100 percentage, not a fraction.
///
/// Returns `None` below `min_temp_fahrenheit` (the configured
/// applicability floor, 80 F by default). The cutoff is inclusive on the
/// valid side: exactly the floor temperature produces a value. The output
/// is not clamped and legitimately exceeds 130 F in extreme conditions.
#[must_use]
pub fn heat_index(temp_fahrenheit: f64, humidity: f64, min_temp_fahrenheit: f64) -> Option<f64> {
    if temp_fahrenheit < min_temp_fahrenheit {
        return None;
    }

    let t = temp_fahrenheit;
    let h = humidity;
    Some(
        rothfusz::C1
            + rothfusz::C2 * t
            + rothfusz::C3 * h
            + rothfusz::C4 * t * h
            + rothfusz::C5 * t * t
            + rothfusz::C6 * h * h
            + rothfusz::C7 * t * t * h
            + rothfusz::C8 * t * h * h
            + rothfusz::C9 * t * t * h * h,
    )
}

/// Calculate the NWS wind chill (2001 revision)
///
/// `temp_fahrenheit` is air temperature in Fahrenheit; `wind_mph` is wind
/// speed in miles per hour.
///
/// Defined only when the temperature is at or below `max_temp_fahrenheit`
/// (50 F by default) **and** the wind is at or above `min_wind_mph`
/// (3 mph by default); both cutoffs are inclusive on the valid side.
/// Returns `None` otherwise. The output is not clamped.
#[must_use]
pub fn wind_chill(
    temp_fahrenheit: f64,
    wind_mph: f64,
    max_temp_fahrenheit: f64,
    min_wind_mph: f64,
) -> Option<f64> {
    if temp_fahrenheit > max_temp_fahrenheit || wind_mph < min_wind_mph {
        return None;
    }

    let wind_term = wind_mph.powf(wc::WIND_EXPONENT);
    Some(
        wc::BASE + wc::TEMP_COEFFICIENT * temp_fahrenheit - wc::WIND_COEFFICIENT * wind_term
            + wc::INTERACTION_COEFFICIENT * temp_fahrenheit * wind_term,
    )
}
