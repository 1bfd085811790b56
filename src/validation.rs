// ABOUTME: Range validation for weather observations before metric derivation
// ABOUTME: Caller-side checks; the formulas themselves assume pre-validated inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Observation validation
//!
//! The formulas do not validate ranges internally; a humidity of 140% is
//! the caller's bug, not a formula error. The orchestration layer runs
//! these checks on raw provider data before deriving metrics, so range
//! misuse is caught at the boundary with a message naming the offending
//! value.

use crate::errors::{AppError, AppResult};
use crate::models::WeatherObservation;

/// Validate an observation's ranges before metric derivation
///
/// # Errors
///
/// Returns `AppError::InvalidInput` naming the first field whose value is
/// outside its physical range
pub fn validate_observation(observation: &WeatherObservation) -> AppResult<()> {
    if !(-90.0..=60.0).contains(&observation.temperature_celsius) {
        return Err(AppError::invalid_input(format!(
            "Temperature {:.1} C is outside recorded terrestrial range (-90 to 60 C)",
            observation.temperature_celsius
        )));
    }

    if !(0.0..=100.0).contains(&observation.humidity_percentage) {
        return Err(AppError::invalid_input(format!(
            "Humidity {:.1}% is outside the 0-100% range",
            observation.humidity_percentage
        )));
    }

    if observation.wind_speed_ms < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Wind speed {:.1} m/s cannot be negative",
            observation.wind_speed_ms
        )));
    }

    if let Some(pressure) = observation.pressure_hpa {
        if !(850.0..=1100.0).contains(&pressure) {
            return Err(AppError::invalid_input(format!(
                "Pressure {pressure:.1} hPa is outside the plausible surface range (850-1100 hPa)"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            temperature_celsius: 21.0,
            humidity_percentage: 50.0,
            wind_speed_ms: 2.0,
            pressure_hpa: Some(1013.0),
            conditions: "Clear".to_owned(),
            observed_at: None,
        }
    }

    #[test]
    fn test_valid_observation_passes() {
        assert!(validate_observation(&observation()).is_ok());
    }

    #[test]
    fn test_out_of_range_humidity_is_rejected() {
        let mut obs = observation();
        obs.humidity_percentage = 140.0;
        let err = validate_observation(&obs);
        assert!(matches!(err, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_absent_pressure_is_accepted() {
        let mut obs = observation();
        obs.pressure_hpa = None;
        assert!(validate_observation(&obs).is_ok());
    }
}
