// ABOUTME: Unified error handling for the derived-metrics engine
// ABOUTME: Defines the engine error enum, constructor helpers, and result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stratus Weather Intelligence

//! # Unified Error Handling
//!
//! All engine errors are local and synchronous: the formulas have no
//! transient failure modes, so there is nothing to retry. An error from
//! this module means the caller handed the engine an input outside its
//! documented contract (for example zero humidity to the dew-point
//! formula) or an unparseable configuration override.
//!
//! Conditional inapplicability (heat index below its temperature floor,
//! wind chill outside its regime) is **not** an error; those operations
//! return `None` so the dashboard can render "not applicable" distinctly
//! from a failure.

use thiserror::Error;

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;

/// Engine errors
#[derive(Debug, Error)]
pub enum AppError {
    /// The provided input violates a formula's documented contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value could not be loaded or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}
