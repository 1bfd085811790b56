// ABOUTME: Main library entry point for the Stratus derived-metrics engine
// ABOUTME: Exposes meteorological formulas, configuration, and alert-rule evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

#![deny(unsafe_code)]

//! # Stratus Metrics
//!
//! Derived-metrics calculation engine for the Stratus weather dashboard.
//! Takes unit-normalized weather observations (temperature, humidity, wind
//! speed, pressure, condition text) and produces the derived values the
//! dashboard displays and alerts on.
//!
//! ## Features
//!
//! - **Apparent temperature**: NWS heat index (Rothfusz regression) and
//!   wind chill, each with a defined "not applicable" regime
//! - **Dew point**: Magnus formula approximation
//! - **Precipitation probability**: additive estimate from pressure,
//!   humidity, and condition text, clamped to 0-100
//! - **Comfort score**: composite 0-100 rating with banded classification
//! - **Alert rules**: threshold-based evaluation over a derived bundle
//!
//! Every formula is a pure function of its arguments: no I/O, no shared
//! state, no internal retries. Applicability thresholds are injected via
//! [`config::DerivedMetricsConfig`] rather than baked into the formulas.
//!
//! ## Example Usage
//!
//! ```rust
//! use stratus_metrics::calculator::DerivedMetricsCalculator;
//! use stratus_metrics::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let calculator = DerivedMetricsCalculator::with_defaults();
//!
//!     // 95 F at 60% humidity is well inside heat-index territory
//!     let heat_index = calculator.calculate_heat_index(95.0, 60.0);
//!     assert!(heat_index.is_some());
//!
//!     // 70 F is below the wind-chill regime regardless of wind
//!     assert!(calculator.calculate_wind_chill(70.0, 20.0).is_none());
//!
//!     let dew_point = calculator.calculate_dew_point(25.0, 60.0)?;
//!     assert!(dew_point < 25.0);
//!     Ok(())
//! }
//! ```

/// Pure meteorological formula implementations
pub mod algorithms;

/// Threshold-based alert-rule evaluation
pub mod alerts;

/// Configured facade over the formula set
pub mod calculator;

/// Injected threshold configuration
pub mod config;

/// Unified error handling for the engine
pub mod errors;

/// Formula coefficients and invariant algorithm parameters
pub mod meteorological_constants;

/// Observation and derived-metrics data structures
pub mod models;

/// Temperature and wind-speed unit conversions
pub mod units;

/// Caller-side observation range validation
pub mod validation;

pub use alerts::{evaluate_alerts, AlertSeverity, WeatherAlert};
pub use calculator::DerivedMetricsCalculator;
pub use config::DerivedMetricsConfig;
pub use errors::{AppError, AppResult};
pub use models::{ComfortLevel, DerivedMetrics, WeatherObservation};
