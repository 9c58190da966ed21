// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Trial and decode result types
//!
//! Trials and decoded results are disposable values: they carry no reference
//! back to the population that produced them and are matched to neurons only
//! through [`NeuronId`] lookups.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::ids::NeuronId;

/// Spike timestamps per neuron, in seconds from trial onset.
pub type SpikeTimes = AHashMap<NeuronId, Vec<f64>>;

/// One stochastic simulation run over a population.
///
/// Every neuron of the source population has an entry in `spike_times`
/// (possibly empty); per-neuron timestamps are strictly increasing and lie
/// in `[0, duration)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Ground-truth movement direction (radians).
    pub direction: f64,
    /// Trial length in seconds.
    pub duration: f64,
    /// Gaussian rate-noise scale used for this trial, `[0, 1]`.
    pub noise_level: f64,
    pub spike_times: SpikeTimes,
}

impl Trial {
    /// Spike timestamps for one neuron. A neuron missing from the map is
    /// treated as silent.
    pub fn spikes_for(&self, id: NeuronId) -> &[f64] {
        self.spike_times.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Spike count for one neuron.
    pub fn spike_count(&self, id: NeuronId) -> usize {
        self.spikes_for(id).len()
    }
}

/// Per-neuron share of the decoded population vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronContribution {
    pub neuron_id: NeuronId,
    /// `(x, y)` = empirical rate projected onto the preferred direction.
    pub vector: (f64, f64),
    /// Empirical firing rate, spike count / duration (Hz).
    pub rate: f64,
}

/// Result of decoding one trial.
///
/// When `magnitude` is near zero the `angle` carries no information
/// (`atan2(0, 0)` yields 0); confidence thresholds are caller policy and the
/// raw magnitude is exposed for that purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedResult {
    /// Decoded movement direction (radians, `atan2` of the summed vector).
    pub angle: f64,
    /// Length of the summed population vector, always ≥ 0.
    pub magnitude: f64,
    /// One entry per neuron, in population order.
    pub contributions: Vec<NeuronContribution>,
}
