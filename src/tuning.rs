// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cosine tuning curve
//!
//! Pure function mapping (neuron, movement direction) to an expected firing
//! rate. Deterministic and side-effect free; all stochasticity lives in the
//! spike generator.

use crate::types::Neuron;

/// Cosine tuning: expected firing rate for a movement direction.
///
/// # Formula
/// `rate(θ) = baseline + (max − baseline) · max(0, cos(θ − PD))`
///
/// The rate peaks at `max_rate` when `θ` equals the preferred direction and
/// falls back to `baseline_rate` for any angular difference of 90° or more
/// (the cosine is clamped at zero, not allowed to suppress the baseline).
///
/// # Example
/// ```
/// use popvec::{firing_rate, Neuron, NeuronId};
///
/// let neuron = Neuron {
///     id: NeuronId(0),
///     preferred_direction: 0.0,
///     baseline_rate: 5.0,
///     max_rate: 60.0,
/// };
/// assert!((firing_rate(&neuron, 0.0) - 60.0).abs() < 1e-9);
/// assert!((firing_rate(&neuron, std::f64::consts::PI) - 5.0).abs() < 1e-9);
/// ```
#[inline]
pub fn firing_rate(neuron: &Neuron, direction: f64) -> f64 {
    let cosine = (direction - neuron.preferred_direction).cos();
    neuron.baseline_rate + (neuron.max_rate - neuron.baseline_rate) * cosine.max(0.0)
}
