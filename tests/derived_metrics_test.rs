// ABOUTME: Integration tests for the five derived-metric formulas through public interfaces
// ABOUTME: Covers applicability regimes, reference values, clamping, and purity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stratus_metrics::calculator::DerivedMetricsCalculator;

// === Heat Index ===

#[test]
fn test_heat_index_not_applicable_below_floor() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    for temp_f in [-20.0, 0.0, 50.0, 75.0, 79.9] {
        for humidity in [0.0, 25.0, 50.0, 100.0] {
            assert!(
                calculator.calculate_heat_index(temp_f, humidity).is_none(),
                "heat index should be inapplicable at {temp_f} F"
            );
        }
    }
}

#[test]
fn test_heat_index_defined_at_inclusive_floor() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let heat_index = calculator.calculate_heat_index(80.0, 50.0);
    assert!(
        heat_index.is_some(),
        "exactly 80 F is inside the heat-index regime"
    );

    // Rothfusz at 80 F / 50% lands near 81 F
    let value = heat_index.unwrap();
    assert!(
        (value - 81.0).abs() < 2.0,
        "heat index at 80 F / 50% should be ~81 F, got {value}"
    );
}

#[test]
fn test_heat_index_output_is_unclamped() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let extreme = calculator.calculate_heat_index(110.0, 90.0).unwrap();
    assert!(
        extreme > 130.0,
        "extreme conditions should exceed 130 F, got {extreme}"
    );
}

// === Wind Chill ===

#[test]
fn test_wind_chill_not_applicable_outside_regime() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    assert!(
        calculator.calculate_wind_chill(50.1, 10.0).is_none(),
        "temperature above 50 F is out of regime"
    );
    assert!(
        calculator.calculate_wind_chill(20.0, 2.9).is_none(),
        "wind below 3 mph is out of regime"
    );
    assert!(
        calculator.calculate_wind_chill(70.0, 1.0).is_none(),
        "both conditions out of regime"
    );
}

#[test]
fn test_wind_chill_defined_at_inclusive_boundaries() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    assert!(
        calculator.calculate_wind_chill(50.0, 3.0).is_some(),
        "50 F at 3 mph is exactly on the valid side of both cutoffs"
    );
}

#[test]
fn test_wind_chill_matches_nws_polynomial() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let wind_chill = calculator.calculate_wind_chill(20.0, 10.0).unwrap();

    // Direct re-derivation of the NWS 2001 formula with the same inputs
    let wind_term = 10.0_f64.powf(0.16);
    let expected = 35.74 + 0.6215 * 20.0 - 35.75 * wind_term + 0.4275 * 20.0 * wind_term;
    assert!(
        (wind_chill - expected).abs() < 1e-9,
        "wind chill must equal the literal polynomial: got {wind_chill}, expected {expected}"
    );
}

// === Dew Point ===

#[test]
fn test_dew_point_reference_values() {
    let calculator = DerivedMetricsCalculator::with_defaults();

    let dew_point = calculator.calculate_dew_point(25.0, 60.0).unwrap();
    assert!(
        (dew_point - 17.0).abs() < 2.0,
        "dew point at 25 C / 60% should be ~17 C, got {dew_point}"
    );
}

#[test]
fn test_dew_point_equals_temperature_at_saturation() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let dew_point = calculator.calculate_dew_point(15.0, 100.0).unwrap();
    assert!(
        (dew_point - 15.0).abs() < 0.1,
        "at 100% humidity dew point equals air temperature, got {dew_point}"
    );
}

#[test]
fn test_dew_point_rejects_zero_humidity() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let result = calculator.calculate_dew_point(25.0, 0.0);
    assert!(
        result.is_err(),
        "zero humidity is a singularity and must be rejected"
    );
    assert!(
        result.unwrap_err().to_string().contains("humidity"),
        "error should name the offending input"
    );
}

#[test]
fn test_dew_point_far_below_temperature_in_dry_air() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let dew_point = calculator.calculate_dew_point(30.0, 5.0).unwrap();
    assert!(
        dew_point < 0.0,
        "very dry air should push the dew point far below air temperature, got {dew_point}"
    );
}

// === Precipitation Probability ===

#[test]
fn test_precipitation_probability_clamps_to_ceiling() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let probability =
        calculator.calculate_precipitation_probability(Some(950.0), 100.0, "Heavy Rain");
    assert!(
        (probability - 100.0).abs() < f64::EPSILON,
        "saturated contributions must clamp to exactly 100, got {probability}"
    );
}

#[test]
fn test_precipitation_probability_clamps_to_floor() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let probability =
        calculator.calculate_precipitation_probability(Some(1050.0), 10.0, "Clear");
    assert!(
        probability.abs() < f64::EPSILON,
        "benign conditions must produce exactly 0, got {probability}"
    );
}

#[test]
fn test_precipitation_probability_monotonic_in_pressure() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let lower_pressure = calculator.calculate_precipitation_probability(Some(990.0), 50.0, "Clear");
    let higher_pressure =
        calculator.calculate_precipitation_probability(Some(995.0), 50.0, "Clear");
    assert!(
        lower_pressure > higher_pressure,
        "lower pressure must strictly increase the estimate: {lower_pressure} vs {higher_pressure}"
    );
}

#[test]
fn test_precipitation_probability_monotonic_in_humidity() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let humid = calculator.calculate_precipitation_probability(None, 90.0, "Clear");
    let drier = calculator.calculate_precipitation_probability(None, 80.0, "Clear");
    assert!(
        humid > drier,
        "higher humidity above 70% must strictly increase the estimate: {humid} vs {drier}"
    );
}

#[test]
fn test_precipitation_probability_absent_pressure_contributes_nothing() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let without_pressure = calculator.calculate_precipitation_probability(None, 50.0, "Clear");
    assert!(
        without_pressure.abs() < f64::EPSILON,
        "no pressure, moderate humidity, clear skies should stay at 0"
    );
}

#[test]
fn test_precipitation_condition_priority_order() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let rain = calculator.calculate_precipitation_probability(None, 50.0, "Light Drizzle");
    let overcast = calculator.calculate_precipitation_probability(None, 50.0, "Overcast");
    let cloudy = calculator.calculate_precipitation_probability(None, 50.0, "Scattered Clouds");

    assert!((rain - 40.0).abs() < f64::EPSILON, "rain family adds 40");
    assert!((overcast - 25.0).abs() < f64::EPSILON, "overcast adds 25");
    assert!((cloudy - 15.0).abs() < f64::EPSILON, "cloud adds 15");

    // Multi-category text scores only the highest-priority category
    let mixed = calculator.calculate_precipitation_probability(None, 50.0, "Overcast with Showers");
    assert!(
        (mixed - 40.0).abs() < f64::EPSILON,
        "first matching category wins, got {mixed}"
    );
}

// === Comfort Score ===

#[test]
fn test_comfort_score_ideal_conditions_hit_ceiling() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let score = calculator.calculate_weather_comfort_score(21.0, 50.0, 2.0, 1013.0);
    assert!(
        (score - 100.0).abs() < f64::EPSILON,
        "ideal conditions must score exactly 100, got {score}"
    );
}

#[test]
fn test_comfort_score_extreme_cold_hits_floor() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let score = calculator.calculate_weather_comfort_score(-50.0, 50.0, 2.0, 1013.0);
    assert!(
        score.abs() < f64::EPSILON,
        "extreme cold alone must clamp the score to 0, got {score}"
    );
}

#[test]
fn test_comfort_score_stagnant_air_flat_penalty() {
    let calculator = DerivedMetricsCalculator::with_defaults();
    let score = calculator.calculate_weather_comfort_score(21.0, 50.0, 0.0, 1013.0);
    assert!(
        (score - 90.0).abs() < f64::EPSILON,
        "stagnant air costs exactly 10 points, got {score}"
    );
}

// === Purity ===

#[test]
fn test_formulas_are_idempotent() {
    let calculator = DerivedMetricsCalculator::with_defaults();

    let first = calculator.calculate_heat_index(92.0, 65.0).unwrap();
    let second = calculator.calculate_heat_index(92.0, 65.0).unwrap();
    assert_eq!(
        first.to_bits(),
        second.to_bits(),
        "heat index must be bit-identical across calls"
    );

    let first = calculator.calculate_wind_chill(10.0, 25.0).unwrap();
    let second = calculator.calculate_wind_chill(10.0, 25.0).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let first = calculator.calculate_dew_point(18.0, 72.0).unwrap();
    let second = calculator.calculate_dew_point(18.0, 72.0).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let first = calculator.calculate_precipitation_probability(Some(998.0), 75.0, "Cloudy");
    let second = calculator.calculate_precipitation_probability(Some(998.0), 75.0, "Cloudy");
    assert_eq!(first.to_bits(), second.to_bits());

    let first = calculator.calculate_weather_comfort_score(30.0, 80.0, 10.0, 990.0);
    let second = calculator.calculate_weather_comfort_score(30.0, 80.0, 10.0, 990.0);
    assert_eq!(first.to_bits(), second.to_bits());
}
