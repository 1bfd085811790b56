// ABOUTME: Unit conversion helpers for temperature and wind speed
// ABOUTME: Bridges the metric observation model to the imperial-unit NWS formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Unit conversions
//!
//! The observation model is metric (Celsius, m/s, hPa) while the NWS
//! apparent-temperature formulas are defined over Fahrenheit and mph.
//! Unit alignment is a caller responsibility at the formula boundary;
//! these helpers are what [`crate::calculator::DerivedMetricsCalculator::derive`]
//! and the orchestration layer use to meet it.

#![allow(clippy::suboptimal_flops)] // conversions read as scale-then-offset

use crate::meteorological_constants::unit_conversions::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE_FACTOR, MS_TO_MPH_FACTOR,
};

/// Convert degrees Celsius to degrees Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * FAHRENHEIT_SCALE_FACTOR + FAHRENHEIT_OFFSET
}

/// Convert degrees Fahrenheit to degrees Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE_FACTOR
}

/// Convert meters per second to miles per hour
#[must_use]
pub fn ms_to_mph(meters_per_second: f64) -> f64 {
    meters_per_second * MS_TO_MPH_FACTOR
}

/// Convert miles per hour to meters per second
#[must_use]
pub fn mph_to_ms(miles_per_hour: f64) -> f64 {
    miles_per_hour / MS_TO_MPH_FACTOR
}
