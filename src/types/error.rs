// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for population vector operations
//!
//! Only boundary validation can fail. Numerical edge cases inside the
//! simulation (log of zero, atan2 of the zero vector) are floored to finite
//! values rather than surfaced as errors.

use thiserror::Error;

/// Error types for population vector operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopvecError {
    /// A population must contain at least one neuron.
    #[error("population size must be at least 1")]
    EmptyPopulation,

    /// Trial duration must be strictly positive (seconds).
    #[error("trial duration must be positive, got {0}")]
    InvalidDuration(f64),

    /// Noise level is a [0, 1] scale factor on the Gaussian rate perturbation.
    #[error("noise level must be within [0, 1], got {0}")]
    InvalidNoiseLevel(f64),
}

pub type Result<T> = core::result::Result<T, PopvecError>;
