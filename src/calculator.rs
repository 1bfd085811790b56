// ABOUTME: Configured facade over the derived-metric formula set
// ABOUTME: Binds injected thresholds and bundles all five metrics per observation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Derived-metrics calculator
//!
//! Stateless apart from its injected configuration: every method is a pure
//! function of its arguments and the thresholds supplied at construction,
//! so a calculator may be shared freely across threads.

use crate::algorithms;
use crate::config::DerivedMetricsConfig;
use crate::errors::AppResult;
use crate::meteorological_constants::atmosphere::STANDARD_PRESSURE_HPA;
use crate::models::{ComfortLevel, DerivedMetrics, WeatherObservation};
use crate::units::{celsius_to_fahrenheit, ms_to_mph};
use tracing::debug;

/// Calculator for derived weather metrics
#[derive(Debug, Clone, Default)]
pub struct DerivedMetricsCalculator {
    /// Injected applicability and alert thresholds
    config: DerivedMetricsConfig,
}

impl DerivedMetricsCalculator {
    /// Create a calculator with the given threshold configuration
    #[must_use]
    pub const fn new(config: DerivedMetricsConfig) -> Self {
        Self { config }
    }

    /// Create a calculator with the default thresholds (80 F / 50 F / 3 mph)
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DerivedMetricsConfig::default())
    }

    /// Get the active threshold configuration
    #[must_use]
    pub const fn config(&self) -> &DerivedMetricsConfig {
        &self.config
    }

    /// Calculate the NWS heat index in Fahrenheit
    ///
    /// Returns `None` below the configured temperature floor; see
    /// [`algorithms::apparent_temperature::heat_index`]
    #[must_use]
    pub fn calculate_heat_index(&self, temp_fahrenheit: f64, humidity: f64) -> Option<f64> {
        algorithms::heat_index(
            temp_fahrenheit,
            humidity,
            self.config.heat_index.min_temp_fahrenheit,
        )
    }

    /// Calculate the NWS wind chill in Fahrenheit
    ///
    /// Returns `None` outside the configured cold-and-windy regime; see
    /// [`algorithms::apparent_temperature::wind_chill`]
    #[must_use]
    pub fn calculate_wind_chill(&self, temp_fahrenheit: f64, wind_mph: f64) -> Option<f64> {
        algorithms::wind_chill(
            temp_fahrenheit,
            wind_mph,
            self.config.wind_chill.max_temp_fahrenheit,
            self.config.wind_chill.min_wind_mph,
        )
    }

    /// Calculate the Magnus-formula dew point in Celsius
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when `humidity <= 0`
    #[allow(clippy::unused_self)] // calculator surface stays uniform across the five metrics
    pub fn calculate_dew_point(&self, temp_celsius: f64, humidity: f64) -> AppResult<f64> {
        algorithms::dew_point(temp_celsius, humidity)
    }

    /// Estimate precipitation probability as a 0-100 percentage
    #[allow(clippy::unused_self)] // calculator surface stays uniform across the five metrics
    #[must_use]
    pub fn calculate_precipitation_probability(
        &self,
        pressure_hpa: Option<f64>,
        humidity: f64,
        conditions: &str,
    ) -> f64 {
        algorithms::precipitation_probability(pressure_hpa, humidity, conditions)
    }

    /// Calculate the composite comfort score as a 0-100 value
    #[allow(clippy::unused_self)] // calculator surface stays uniform across the five metrics
    #[must_use]
    pub fn calculate_weather_comfort_score(
        &self,
        temp_celsius: f64,
        humidity: f64,
        wind_ms: f64,
        pressure_hpa: f64,
    ) -> f64 {
        algorithms::comfort_score(temp_celsius, humidity, wind_ms, pressure_hpa)
    }

    /// Derive the full metrics bundle for one observation
    ///
    /// Converts the metric observation to the Fahrenheit/mph inputs the
    /// apparent-temperature formulas expect, runs all five formulas, and
    /// bands the comfort score. An observation without a barometer reading
    /// contributes nothing to the precipitation estimate and is scored for
    /// comfort at the ICAO standard 1013.25 hPa.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the observation's humidity is
    /// outside the dew-point formula's domain (`humidity <= 0`); no
    /// partially populated bundle is produced
    pub fn derive(&self, observation: &WeatherObservation) -> AppResult<DerivedMetrics> {
        let temp_fahrenheit = celsius_to_fahrenheit(observation.temperature_celsius);
        let wind_mph = ms_to_mph(observation.wind_speed_ms);

        let dew_point_celsius =
            algorithms::dew_point(observation.temperature_celsius, observation.humidity_percentage)?;
        let comfort_score = algorithms::comfort_score(
            observation.temperature_celsius,
            observation.humidity_percentage,
            observation.wind_speed_ms,
            observation.pressure_hpa.unwrap_or(STANDARD_PRESSURE_HPA),
        );

        let metrics = DerivedMetrics {
            heat_index_fahrenheit: self
                .calculate_heat_index(temp_fahrenheit, observation.humidity_percentage),
            wind_chill_fahrenheit: self.calculate_wind_chill(temp_fahrenheit, wind_mph),
            dew_point_celsius,
            precipitation_probability_pct: algorithms::precipitation_probability(
                observation.pressure_hpa,
                observation.humidity_percentage,
                &observation.conditions,
            ),
            comfort_score,
            comfort_level: ComfortLevel::from_score(comfort_score),
        };

        debug!(
            temp_celsius = observation.temperature_celsius,
            comfort = metrics.comfort_score,
            precipitation = metrics.precipitation_probability_pct,
            "derived metrics for observation"
        );

        Ok(metrics)
    }
}
