// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Population Vector Simulation & Decoding
//!
//! Simulates directionally tuned neural populations and decodes movement
//! direction from their spike trains via the population vector algorithm
//! (Georgopoulos et al., 1986):
//! - **Types**: Core type definitions (NeuronId, Neuron, Population, Trial, ...)
//! - **Rng**: Seedable, fully deterministic PRNG + Gaussian transform
//! - **Population**: Population construction with evenly spaced preferred directions
//! - **Tuning**: Cosine tuning curve (direction → firing rate)
//! - **SpikeGenerator**: Poisson spike train generation per trial
//! - **Decoder**: Population vector decode + angular error metric
//!
//! The whole crate is synchronous, allocation-light, and free of global
//! state: every stochastic operation takes an explicit seed, so identical
//! inputs always reproduce identical outputs.
//!
//! ## Pipeline
//! ```text
//! Population ──► generate_trial ──► Trial ──► population_vector_decode
//!                                                      │
//!                            angular_error ◄── DecodedResult
//! ```
//!
//! ## Example
//! ```
//! use popvec::{create_population, generate_trial, population_vector_decode,
//!              angular_error, TrialParameters};
//!
//! let population = create_population(50).unwrap();
//! let direction = std::f64::consts::FRAC_PI_4;
//!
//! let trial = generate_trial(&population, direction, &TrialParameters::default()).unwrap();
//! let decoded = population_vector_decode(&population, &trial);
//!
//! assert!(angular_error(decoded.angle, direction) < 15.0);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core type definitions
pub mod types;

// Deterministic randomness
pub mod rng;

// Simulation and decoding algorithms
pub mod decoder;
pub mod population;
pub mod spike_generator;
pub mod tuning;

// Re-export the full public API at the crate root
pub use decoder::{angular_error, population_vector_decode};
pub use population::{create_population, DEFAULT_POPULATION_SIZE, POPULATION_SEED};
pub use rng::Mulberry32;
pub use spike_generator::{generate_trial, TrialParameters};
pub use tuning::firing_rate;

pub use types::{
    DecodedResult,
    Neuron,
    NeuronContribution,
    NeuronId,
    PopvecError,
    Population,
    Result,
    SpikeTimes,
    Trial,
};
