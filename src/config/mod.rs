// ABOUTME: Injected threshold configuration for the derived-metrics engine
// ABOUTME: Applicability cutoffs and alert-rule thresholds with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Derived-metrics configuration
//!
//! The heat-index and wind-chill applicability cutoffs are tunable without
//! touching formula code: they are injected at calculator construction and
//! overridable through `STRATUS_*` environment variables. The comfort and
//! precipitation parameters are invariant algorithm properties and live in
//! [`crate::meteorological_constants`] instead.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Top-level configuration for the derived-metrics engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DerivedMetricsConfig {
    /// Heat-index applicability threshold
    pub heat_index: HeatIndexConfig,
    /// Wind-chill applicability thresholds
    pub wind_chill: WindChillConfig,
    /// Alert-rule thresholds for the dashboard
    pub alerts: AlertThresholdsConfig,
}

/// Heat-index applicability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatIndexConfig {
    /// Minimum air temperature (F) at which the heat index is defined;
    /// inclusive, so exactly this temperature is in regime
    pub min_temp_fahrenheit: f64,
}

/// Wind-chill applicability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindChillConfig {
    /// Maximum air temperature (F) at which wind chill is defined; inclusive
    pub max_temp_fahrenheit: f64,
    /// Minimum wind speed (mph) at which wind chill is defined; inclusive
    pub min_wind_mph: f64,
}

/// Alert-rule thresholds evaluated over a derived-metrics bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertThresholdsConfig {
    /// Heat index (F) at or above which a danger alert is raised
    pub heat_index_fahrenheit: f64,
    /// Wind chill (F) at or below which a danger alert is raised
    pub wind_chill_fahrenheit: f64,
    /// Dew point (C) at or above which a mugginess warning is raised
    pub dew_point_celsius: f64,
    /// Precipitation probability (percent) at or above which a warning is raised
    pub precipitation_probability_pct: f64,
    /// Comfort score below which an informational alert is raised
    pub min_comfort_score: f64,
}

impl Default for HeatIndexConfig {
    fn default() -> Self {
        Self {
            min_temp_fahrenheit: 80.0,
        }
    }
}

impl Default for WindChillConfig {
    fn default() -> Self {
        Self {
            max_temp_fahrenheit: 50.0,
            min_wind_mph: 3.0,
        }
    }
}

impl Default for AlertThresholdsConfig {
    fn default() -> Self {
        Self {
            heat_index_fahrenheit: 105.0,
            wind_chill_fahrenheit: -20.0,
            dew_point_celsius: 24.0,
            precipitation_probability_pct: 80.0,
            min_comfort_score: 30.0,
        }
    }
}

impl DerivedMetricsConfig {
    /// Load configuration from environment variables
    ///
    /// Every threshold falls back to its default when the corresponding
    /// `STRATUS_*` variable is unset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a set variable cannot be parsed
    /// as a number
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            heat_index: HeatIndexConfig {
                min_temp_fahrenheit: env_f64_or(
                    "STRATUS_HEAT_INDEX_MIN_TEMP_F",
                    defaults.heat_index.min_temp_fahrenheit,
                )?,
            },
            wind_chill: WindChillConfig {
                max_temp_fahrenheit: env_f64_or(
                    "STRATUS_WIND_CHILL_MAX_TEMP_F",
                    defaults.wind_chill.max_temp_fahrenheit,
                )?,
                min_wind_mph: env_f64_or(
                    "STRATUS_WIND_CHILL_MIN_WIND_MPH",
                    defaults.wind_chill.min_wind_mph,
                )?,
            },
            alerts: AlertThresholdsConfig {
                heat_index_fahrenheit: env_f64_or(
                    "STRATUS_ALERT_HEAT_INDEX_F",
                    defaults.alerts.heat_index_fahrenheit,
                )?,
                wind_chill_fahrenheit: env_f64_or(
                    "STRATUS_ALERT_WIND_CHILL_F",
                    defaults.alerts.wind_chill_fahrenheit,
                )?,
                dew_point_celsius: env_f64_or(
                    "STRATUS_ALERT_DEW_POINT_C",
                    defaults.alerts.dew_point_celsius,
                )?,
                precipitation_probability_pct: env_f64_or(
                    "STRATUS_ALERT_PRECIPITATION_PCT",
                    defaults.alerts.precipitation_probability_pct,
                )?,
                min_comfort_score: env_f64_or(
                    "STRATUS_ALERT_MIN_COMFORT_SCORE",
                    defaults.alerts.min_comfort_score,
                )?,
            },
        })
    }
}

/// Get a numeric environment variable or a default value
fn env_f64_or(key: &str, default: f64) -> AppResult<f64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key} value: {raw:?}"))),
        Err(_) => Ok(default),
    }
}
