// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Population vector decoding
//!
//! ## Algorithm (Georgopoulos et al., 1986)
//! ```text
//! PV = Σ rate_i · [cos(PD_i), sin(PD_i)]
//!
//! Where:
//! - rate_i = empirical rate (spike count / duration) of neuron i
//! - PD_i   = preferred direction of neuron i
//!
//! decoded angle = atan2(PV_y, PV_x)
//! magnitude     = |PV|
//! ```
//!
//! The magnitude is returned raw; what counts as "confident" is a
//! presentation-layer policy, not a model property.

use tracing::debug;

use crate::types::{DecodedResult, NeuronContribution, Population, Trial};

/// Decode the movement direction encoded in a trial's spike trains.
///
/// Contributions come back in population order, one per neuron, including
/// vanishingly small ones. Neurons missing from the trial's spike map count
/// as silent. When no neuron spiked at all, the summed vector is zero and
/// the result is `angle = 0` (from `atan2(0, 0)`) with `magnitude = 0`;
/// callers must treat near-zero magnitude as low confidence rather than
/// trusting the angle.
pub fn population_vector_decode(population: &Population, trial: &Trial) -> DecodedResult {
    let mut pv_x = 0.0;
    let mut pv_y = 0.0;
    let mut contributions = Vec::with_capacity(population.size());

    for neuron in population.neurons() {
        let rate = trial.spike_count(neuron.id) as f64 / trial.duration;
        let cx = rate * neuron.preferred_direction.cos();
        let cy = rate * neuron.preferred_direction.sin();
        pv_x += cx;
        pv_y += cy;

        contributions.push(NeuronContribution {
            neuron_id: neuron.id,
            vector: (cx, cy),
            rate,
        });
    }

    let angle = pv_y.atan2(pv_x);
    let magnitude = (pv_x * pv_x + pv_y * pv_y).sqrt();
    debug!(angle, magnitude, neurons = population.size(), "decoded population vector");

    DecodedResult {
        angle,
        magnitude,
        contributions,
    }
}

/// Angular error in degrees between a decoded and a true direction.
///
/// Always the shortest arc: the difference is normalized into `[-π, π]`
/// before conversion, so the result lies in `[0, 180]` and angles equal
/// modulo 2π are 0° apart.
pub fn angular_error(decoded: f64, truth: f64) -> f64 {
    let mut diff = decoded - truth;
    while diff > core::f64::consts::PI {
        diff -= core::f64::consts::TAU;
    }
    while diff < -core::f64::consts::PI {
        diff += core::f64::consts::TAU;
    }
    diff.abs().to_degrees()
}
