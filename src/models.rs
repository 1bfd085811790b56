// ABOUTME: Data structures exchanged between the engine and the dashboard layer
// ABOUTME: Weather observations in, derived-metric bundles and comfort bands out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Observation and derived-metrics data model
//!
//! No persistent entities: every type here is a plain value the
//! orchestration layer hands in or reads out. Inputs arrive already
//! unit-normalized to metric (Celsius, m/s, hPa); the engine performs the
//! Fahrenheit/mph conversions the NWS formulas need internally.

use crate::meteorological_constants::comfort::{
    COMFORTABLE_MIN_SCORE, MODERATE_MIN_SCORE, UNCOMFORTABLE_MIN_SCORE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single unit-normalized weather observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity percentage (0-100)
    pub humidity_percentage: f64,
    /// Wind speed in meters per second
    pub wind_speed_ms: f64,
    /// Barometric pressure in hPa, absent when the station has no barometer
    pub pressure_hpa: Option<f64>,
    /// Free-text weather condition description (e.g. "Overcast with Showers")
    pub conditions: String,
    /// When the observation was taken, absent for synthesized data
    pub observed_at: Option<DateTime<Utc>>,
}

/// Derived metrics computed from one observation
///
/// `None` for heat index or wind chill means the formula is outside its
/// physically valid regime for this observation, not that computation
/// failed. The bounded metrics (precipitation probability, comfort score)
/// are already clamped to [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// NWS heat index in Fahrenheit, when the temperature is in regime
    pub heat_index_fahrenheit: Option<f64>,
    /// NWS wind chill in Fahrenheit, when temperature and wind are in regime
    pub wind_chill_fahrenheit: Option<f64>,
    /// Magnus-formula dew point in Celsius
    pub dew_point_celsius: f64,
    /// Estimated precipitation probability (0-100)
    pub precipitation_probability_pct: f64,
    /// Composite comfort score (0-100)
    pub comfort_score: f64,
    /// Banded classification of the comfort score
    pub comfort_level: ComfortLevel,
}

/// Comfort classification bands over the 0-100 comfort score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    /// Conditions most people find pleasant (score >= 75)
    Comfortable,
    /// Noticeable but tolerable discomfort (score >= 50)
    Moderate,
    /// Conditions that discourage outdoor plans (score >= 25)
    Uncomfortable,
    /// Oppressive or hazardous conditions (score < 25)
    Harsh,
}

impl ComfortLevel {
    /// Classify a comfort score into its display band
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= COMFORTABLE_MIN_SCORE {
            Self::Comfortable
        } else if score >= MODERATE_MIN_SCORE {
            Self::Moderate
        } else if score >= UNCOMFORTABLE_MIN_SCORE {
            Self::Uncomfortable
        } else {
            Self::Harsh
        }
    }
}
