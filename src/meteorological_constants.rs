// ABOUTME: Meteorological constants and invariant formula parameters
// ABOUTME: Regression coefficients, ideal bands, and penalty factors for derived metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! Meteorological constants based on published empirical formulas
//!
//! This module contains the coefficient sets and invariant algorithm
//! parameters used throughout the derived-metrics engine. The regression
//! coefficients come from published National Weather Service material; the
//! comfort and precipitation parameters are invariant properties of those
//! algorithms, not runtime configuration (runtime-tunable applicability
//! thresholds live in [`crate::config`] instead).

/// Rothfusz regression coefficients for the NWS heat index
///
/// References:
/// - Rothfusz, L.P. (1990). "The Heat Index Equation". NWS Technical Attachment SR 90-23
/// - https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml
pub mod rothfusz {
    /// Constant term
    pub const C1: f64 = -42.379;

    /// Temperature coefficient
    pub const C2: f64 = 2.049_015_23;

    /// Humidity coefficient
    pub const C3: f64 = 10.143_331_27;

    /// Temperature-humidity interaction coefficient
    pub const C4: f64 = -0.224_755_41;

    /// Temperature-squared coefficient
    pub const C5: f64 = -0.006_837_83;

    /// Humidity-squared coefficient
    pub const C6: f64 = -0.054_817_17;

    /// Temperature-squared by humidity coefficient
    pub const C7: f64 = 0.001_228_74;

    /// Temperature by humidity-squared coefficient
    pub const C8: f64 = 0.000_852_82;

    /// Temperature-squared by humidity-squared coefficient
    pub const C9: f64 = -0.000_001_99;
}

/// NWS wind-chill formula coefficients (2001 revision)
///
/// Reference: NWS Wind Chill Temperature Index (2001)
/// https://www.weather.gov/media/epz/wxcalc/windChill.pdf
pub mod wind_chill {
    /// Constant term (degrees F)
    pub const BASE: f64 = 35.74;

    /// Air temperature coefficient
    pub const TEMP_COEFFICIENT: f64 = 0.6215;

    /// Wind speed term coefficient
    pub const WIND_COEFFICIENT: f64 = 35.75;

    /// Temperature-wind interaction coefficient
    pub const INTERACTION_COEFFICIENT: f64 = 0.4275;

    /// Exponent applied to wind speed (mph)
    pub const WIND_EXPONENT: f64 = 0.16;
}

/// Magnus formula coefficients for dew-point approximation
///
/// Reference: Magnus-Tetens approximation over water, valid for
/// 0 C < T < 60 C and 1% < RH <= 100%
pub mod magnus {
    /// Magnus coefficient a (dimensionless)
    pub const A: f64 = 17.27;

    /// Magnus coefficient b (degrees C)
    pub const B: f64 = 237.7;
}

/// Precipitation-probability estimate parameters
pub mod precipitation {
    /// Pressure below this reference contributes to the estimate (hPa)
    pub const PRESSURE_REFERENCE_HPA: f64 = 1000.0;

    /// Contribution per hPa of pressure deficit below the reference
    pub const PRESSURE_DEFICIT_FACTOR: f64 = 2.0;

    /// Humidity above this threshold contributes to the estimate (percent)
    pub const HUMIDITY_THRESHOLD_PCT: f64 = 70.0;

    /// Contribution per percentage point of humidity excess
    pub const HUMIDITY_EXCESS_FACTOR: f64 = 1.5;

    /// Condition keywords in the rain family (highest-priority match)
    pub const RAIN_KEYWORDS: [&str; 4] = ["rain", "drizzle", "shower", "thunderstorm"];

    /// Contribution when the condition text names active precipitation
    pub const RAIN_CONTRIBUTION: f64 = 40.0;

    /// Contribution when the condition text names overcast skies
    pub const OVERCAST_CONTRIBUTION: f64 = 25.0;

    /// Contribution when the condition text names cloud cover
    pub const CLOUD_CONTRIBUTION: f64 = 15.0;
}

/// Comfort-score bands and penalty factors
pub mod comfort {
    /// Score ceiling before penalties apply
    pub const MAX_SCORE: f64 = 100.0;

    /// Minimum ideal air temperature (degrees C)
    pub const IDEAL_TEMP_MIN_CELSIUS: f64 = 18.0;

    /// Maximum ideal air temperature (degrees C)
    pub const IDEAL_TEMP_MAX_CELSIUS: f64 = 24.0;

    /// Penalty per degree outside the ideal temperature band
    pub const TEMP_PENALTY_PER_DEGREE: f64 = 3.0;

    /// Minimum ideal relative humidity (percent)
    pub const IDEAL_HUMIDITY_MIN_PCT: f64 = 40.0;

    /// Maximum ideal relative humidity (percent)
    pub const IDEAL_HUMIDITY_MAX_PCT: f64 = 60.0;

    /// Penalty per percentage point outside the ideal humidity band
    pub const HUMIDITY_PENALTY_PER_PCT: f64 = 1.5;

    /// Minimum ideal wind speed (m/s); below this the air reads as stagnant
    pub const IDEAL_WIND_MIN_MS: f64 = 0.5;

    /// Maximum ideal wind speed (m/s)
    pub const IDEAL_WIND_MAX_MS: f64 = 8.0;

    /// Penalty per m/s of wind above the ideal band
    pub const WIND_PENALTY_PER_MS: f64 = 5.0;

    /// Flat penalty for stagnant air (wind below the ideal minimum, zero included)
    pub const STAGNANT_AIR_PENALTY: f64 = 10.0;

    /// Pressure the score treats as neutral (hPa)
    pub const REFERENCE_PRESSURE_HPA: f64 = 1013.0;

    /// Pressure deviation tolerated without penalty (hPa)
    pub const PRESSURE_DEADBAND_HPA: f64 = 20.0;

    /// Penalty per hPa of deviation beyond the deadband
    pub const PRESSURE_PENALTY_PER_HPA: f64 = 0.5;

    /// Scores at or above this band are classified comfortable
    pub const COMFORTABLE_MIN_SCORE: f64 = 75.0;

    /// Scores at or above this band are classified moderate
    pub const MODERATE_MIN_SCORE: f64 = 50.0;

    /// Scores at or above this band are classified uncomfortable; below is harsh
    pub const UNCOMFORTABLE_MIN_SCORE: f64 = 25.0;
}

/// Standard atmosphere reference values
pub mod atmosphere {
    /// ICAO standard sea-level pressure (hPa), used when an observation
    /// carries no barometer reading
    pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;
}

/// Unit conversion factors
pub mod unit_conversions {
    /// Scale factor between Celsius and Fahrenheit degrees
    pub const FAHRENHEIT_SCALE_FACTOR: f64 = 9.0 / 5.0;

    /// Offset between the Celsius and Fahrenheit zero points
    pub const FAHRENHEIT_OFFSET: f64 = 32.0;

    /// Conversion factor from meters per second to miles per hour
    pub const MS_TO_MPH_FACTOR: f64 = 2.236_936_29;
}
