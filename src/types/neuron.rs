// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neuron and population types
//!
//! A [`Population`] is built once (see [`crate::population::create_population`])
//! and shared read-only across trials; neurons are never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::ids::NeuronId;

/// A single directionally tuned neuron.
///
/// Rates are in Hz; `preferred_direction` is in radians on `[0, 2π)`.
/// Invariant: `baseline_rate > 0` and `max_rate > baseline_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub id: NeuronId,
    pub preferred_direction: f64,
    pub baseline_rate: f64,
    pub max_rate: f64,
}

/// An ordered, fixed-size collection of neurons.
///
/// Invariants (upheld at construction):
/// - at least one neuron
/// - ids contiguous and unique, `0..size`
/// - preferred directions uniformly spaced over `[0, 2π)`, increasing with id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    neurons: Vec<Neuron>,
}

impl Population {
    /// Wrap an already-validated neuron list. Callers go through
    /// `create_population`, which enforces the invariants above.
    pub(crate) fn from_neurons(neurons: Vec<Neuron>) -> Self {
        debug_assert!(!neurons.is_empty());
        Self { neurons }
    }

    /// Neurons in id order.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of neurons in the population.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Look up a neuron by id.
    pub fn get(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.0 as usize)
    }
}
