// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Population construction
//!
//! Preferred directions are spaced evenly over the full circle; baseline and
//! peak rates are drawn from a PRNG seeded with a fixed constant, so the
//! same population comes back on every run and population randomness stays
//! decoupled from per-trial randomness.

use crate::rng::Mulberry32;
use crate::types::{Neuron, NeuronId, PopvecError, Population, Result};

/// Fixed seed for population construction, independent of any trial seed.
pub const POPULATION_SEED: u32 = 42;

/// Default population size used by visualization front-ends.
pub const DEFAULT_POPULATION_SIZE: usize = 50;

/// Build a population of `size` neurons with preferred directions
/// `2π·i/size`, baseline rates uniform in `[5, 10)` Hz and max rates uniform
/// in `[40, 80)` Hz, drawn in neuron-id order from [`POPULATION_SEED`].
///
/// # Errors
/// Returns [`PopvecError::EmptyPopulation`] when `size == 0`; an empty
/// population is rejected rather than silently produced.
pub fn create_population(size: usize) -> Result<Population> {
    if size == 0 {
        return Err(PopvecError::EmptyPopulation);
    }

    let mut rng = Mulberry32::new(POPULATION_SEED);
    let mut neurons = Vec::with_capacity(size);

    for i in 0..size {
        neurons.push(Neuron {
            id: NeuronId(i as u32),
            preferred_direction: core::f64::consts::TAU * i as f64 / size as f64,
            baseline_rate: 5.0 + rng.next_f64() * 5.0,
            max_rate: 40.0 + rng.next_f64() * 40.0,
        });
    }

    Ok(Population::from_neurons(neurons))
}

impl Default for Population {
    /// The standard 50-neuron population.
    fn default() -> Self {
        create_population(DEFAULT_POPULATION_SIZE)
            .expect("default population size is non-zero")
    }
}
