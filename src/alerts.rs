// ABOUTME: Threshold-based alert-rule evaluation over a derived-metrics bundle
// ABOUTME: Produces typed alert payloads the dashboard layer renders as popups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Alert-rule evaluation
//!
//! The dashboard raises an alert whenever a derived metric crosses its
//! configured threshold. Rendering is the dashboard layer's job; this
//! module is the pure rule evaluation that decides which alerts fire and
//! at what severity for a given bundle.

use crate::config::AlertThresholdsConfig;
use crate::models::DerivedMetrics;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Alert severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Worth surfacing, no action needed
    Info,
    /// Conditions warrant planning around
    Warning,
    /// Potentially hazardous conditions
    Danger,
}

/// A single triggered alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    /// Which derived metric triggered the rule
    pub metric: String,
    /// Severity of the triggered rule
    pub severity: AlertSeverity,
    /// Human-readable message for the dashboard
    pub message: String,
    /// The metric value that crossed the threshold
    pub value: f64,
    /// The configured threshold it crossed
    pub threshold: f64,
}

/// Evaluate all alert rules over a derived-metrics bundle
///
/// Pure function of its arguments: the same bundle and thresholds always
/// produce the same alerts, in a fixed rule order. Inapplicable metrics
/// (heat index or wind chill out of regime) trigger nothing.
#[must_use]
pub fn evaluate_alerts(
    metrics: &DerivedMetrics,
    thresholds: &AlertThresholdsConfig,
) -> Vec<WeatherAlert> {
    let mut alerts = Vec::new();

    if let Some(heat_index) = metrics.heat_index_fahrenheit {
        if heat_index >= thresholds.heat_index_fahrenheit {
            alerts.push(WeatherAlert {
                metric: "heat_index".to_owned(),
                severity: AlertSeverity::Danger,
                message: format!("Heat index {heat_index:.0} F - limit time outdoors"),
                value: heat_index,
                threshold: thresholds.heat_index_fahrenheit,
            });
        }
    }

    if let Some(wind_chill) = metrics.wind_chill_fahrenheit {
        if wind_chill <= thresholds.wind_chill_fahrenheit {
            alerts.push(WeatherAlert {
                metric: "wind_chill".to_owned(),
                severity: AlertSeverity::Danger,
                message: format!("Wind chill {wind_chill:.0} F - frostbite risk"),
                value: wind_chill,
                threshold: thresholds.wind_chill_fahrenheit,
            });
        }
    }

    if metrics.dew_point_celsius >= thresholds.dew_point_celsius {
        alerts.push(WeatherAlert {
            metric: "dew_point".to_owned(),
            severity: AlertSeverity::Warning,
            message: format!(
                "Dew point {:.1} C - oppressive humidity",
                metrics.dew_point_celsius
            ),
            value: metrics.dew_point_celsius,
            threshold: thresholds.dew_point_celsius,
        });
    }

    if metrics.precipitation_probability_pct >= thresholds.precipitation_probability_pct {
        alerts.push(WeatherAlert {
            metric: "precipitation_probability".to_owned(),
            severity: AlertSeverity::Warning,
            message: format!(
                "Precipitation probability {:.0}%",
                metrics.precipitation_probability_pct
            ),
            value: metrics.precipitation_probability_pct,
            threshold: thresholds.precipitation_probability_pct,
        });
    }

    if metrics.comfort_score < thresholds.min_comfort_score {
        alerts.push(WeatherAlert {
            metric: "comfort_score".to_owned(),
            severity: AlertSeverity::Info,
            message: format!("Comfort score {:.0}/100", metrics.comfort_score),
            value: metrics.comfort_score,
            threshold: thresholds.min_comfort_score,
        });
    }

    if !alerts.is_empty() {
        debug!(count = alerts.len(), "alert rules triggered");
    }

    alerts
}
