// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! Poisson spike train generation
//!
//! One trial simulates every neuron of a population responding to a single
//! movement direction:
//! 1. Expected rate from the cosine tuning curve.
//! 2. Optional multiplicative Gaussian rate noise, clamped at 0.
//! 3. Poisson realization over `[0, duration)` via exponential
//!    inter-spike intervals.
//!
//! One PRNG seeded from [`TrialParameters::seed`] is consumed sequentially
//! across all neurons in population order. The full trial is therefore
//! order-sensitive within itself but exactly reproducible, and separate
//! trials never share generator state.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::rng::{Mulberry32, UNIFORM_LOG_FLOOR};
use crate::tuning::firing_rate;
use crate::types::{PopvecError, Population, Result, SpikeTimes, Trial};

/// Parameters for one simulated trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialParameters {
    /// Gaussian rate-noise scale, `[0, 1]`.
    pub noise_level: f64,
    /// Trial length in seconds, finite and > 0.
    pub duration: f64,
    /// PRNG seed for the whole trial.
    pub seed: u32,
}

impl TrialParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(noise_level: f64, duration: f64, seed: u32) -> Self {
        Self {
            noise_level,
            duration,
            seed,
        }
    }

    /// Boundary validation; see [`PopvecError`].
    pub fn validate(&self) -> Result<()> {
        // Non-finite durations would keep the spike cursor advancing forever.
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(PopvecError::InvalidDuration(self.duration));
        }
        if !(0.0..=1.0).contains(&self.noise_level) || self.noise_level.is_nan() {
            return Err(PopvecError::InvalidNoiseLevel(self.noise_level));
        }
        Ok(())
    }
}

impl Default for TrialParameters {
    fn default() -> Self {
        Self {
            noise_level: 0.0,
            duration: 1.0,
            seed: 123,
        }
    }
}

/// Poisson spike times for a single neuron at a fixed rate.
///
/// Exponential inter-spike intervals: the cursor advances by
/// `-ln(u) / rate` per draw and every position short of `duration` is a
/// spike. Times come out strictly increasing in `[0, duration)`. A rate of
/// zero (or below, after noise clamping) yields no spikes.
fn poisson_spike_times(rate: f64, duration: f64, rng: &mut Mulberry32) -> Vec<f64> {
    if rate <= 0.0 {
        return Vec::new();
    }

    let mut spikes = Vec::new();
    let mut t = 0.0;
    loop {
        let interval = -rng.next_f64().max(UNIFORM_LOG_FLOOR).ln() / rate;
        t += interval;
        if t >= duration {
            break;
        }
        spikes.push(t);
    }
    spikes
}

/// Simulate one trial: spike trains for every neuron in the population.
///
/// Deterministic: identical `(population, direction, params)` always yield
/// identical spike sequences for every neuron.
///
/// # Errors
/// Returns an error when `params` fail [`TrialParameters::validate`].
pub fn generate_trial(
    population: &Population,
    direction: f64,
    params: &TrialParameters,
) -> Result<Trial> {
    params.validate()?;

    let mut rng = Mulberry32::new(params.seed);
    let mut spike_times = SpikeTimes::with_capacity(population.size());

    for neuron in population.neurons() {
        let mut rate = firing_rate(neuron, direction);

        if params.noise_level > 0.0 {
            rate = (rate * (1.0 + params.noise_level * rng.next_gaussian())).max(0.0);
        }

        let spikes = poisson_spike_times(rate, params.duration, &mut rng);
        trace!(neuron = %neuron.id, rate, spike_count = spikes.len(), "simulated neuron");
        spike_times.insert(neuron.id, spikes);
    }

    debug!(
        direction,
        noise_level = params.noise_level,
        duration = params.duration,
        seed = params.seed,
        neurons = population.size(),
        "generated trial"
    );

    Ok(Trial {
        direction,
        duration: params.duration,
        noise_level: params.noise_level,
        spike_times,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::create_population;
    use core::f64::consts::PI;

    #[test]
    fn test_every_neuron_has_an_entry() {
        let pop = create_population(10).unwrap();
        let trial = generate_trial(&pop, 0.0, &TrialParameters::default()).unwrap();
        assert_eq!(trial.spike_times.len(), 10);
        for neuron in pop.neurons() {
            assert!(trial.spike_times.contains_key(&neuron.id));
        }
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let pop = create_population(10).unwrap();
        let params = TrialParameters::with_values(0.5, 1.0, 42);
        let a = generate_trial(&pop, 0.0, &params).unwrap();
        let b = generate_trial(&pop, 0.0, &params).unwrap();
        for neuron in pop.neurons() {
            assert_eq!(a.spikes_for(neuron.id), b.spikes_for(neuron.id));
        }
    }

    #[test]
    fn test_seeds_change_spike_trains() {
        let pop = create_population(10).unwrap();
        let a = generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, 1.0, 1)).unwrap();
        let b = generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, 1.0, 2)).unwrap();
        assert_ne!(a.spike_times, b.spike_times);
    }

    #[test]
    fn test_spike_times_within_duration_and_sorted() {
        let pop = create_population(10).unwrap();
        let params = TrialParameters::with_values(0.0, 0.5, 123);
        let trial = generate_trial(&pop, 0.0, &params).unwrap();
        for neuron in pop.neurons() {
            let spikes = trial.spikes_for(neuron.id);
            for window in spikes.windows(2) {
                assert!(window[0] < window[1]);
            }
            for &t in spikes {
                assert!(t >= 0.0 && t < 0.5, "spike outside trial window: {}", t);
            }
        }
    }

    #[test]
    fn test_aligned_neuron_outfires_opposite() {
        // Neuron 0 has PD = 0, neuron 5 has PD = π.
        let pop = create_population(10).unwrap();
        let params = TrialParameters::with_values(0.0, 1.0, 99);
        let trial = generate_trial(&pop, 0.0, &params).unwrap();
        let near = trial.spike_count(crate::types::NeuronId(0));
        let far = trial.spike_count(crate::types::NeuronId(5));
        assert!(near > far, "aligned {} vs opposite {}", near, far);
    }

    #[test]
    fn test_zero_rate_produces_no_spikes() {
        let mut rng = Mulberry32::new(1);
        assert!(poisson_spike_times(0.0, 1.0, &mut rng).is_empty());
        assert!(poisson_spike_times(-3.0, 1.0, &mut rng).is_empty());
    }

    #[test]
    fn test_spike_count_tracks_rate() {
        // At 100 Hz over 1 s the realization stays in a wide Poisson band.
        let mut rng = Mulberry32::new(7);
        let n = poisson_spike_times(100.0, 1.0, &mut rng).len();
        assert!(n > 60 && n < 140, "implausible spike count: {}", n);
    }

    #[test]
    fn test_trial_carries_its_parameters() {
        let pop = create_population(5).unwrap();
        let params = TrialParameters::with_values(0.3, 2.0, 7);
        let trial = generate_trial(&pop, PI, &params).unwrap();
        assert_eq!(trial.direction, PI);
        assert_eq!(trial.duration, 2.0);
        assert_eq!(trial.noise_level, 0.3);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let pop = create_population(5).unwrap();
        assert_eq!(
            generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, 0.0, 1)),
            Err(PopvecError::InvalidDuration(0.0))
        );
        assert_eq!(
            generate_trial(&pop, 0.0, &TrialParameters::with_values(1.5, 1.0, 1)),
            Err(PopvecError::InvalidNoiseLevel(1.5))
        );
        assert!(generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, -1.0, 1)).is_err());
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        // An unbounded trial window would never terminate the spike loop.
        let pop = create_population(5).unwrap();
        assert_eq!(
            generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, f64::INFINITY, 1)),
            Err(PopvecError::InvalidDuration(f64::INFINITY))
        );
        assert!(generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, f64::NAN, 1)).is_err());
    }

    #[test]
    fn test_noise_perturbs_spike_trains() {
        let pop = create_population(10).unwrap();
        let clean = generate_trial(&pop, 0.0, &TrialParameters::with_values(0.0, 1.0, 42)).unwrap();
        let noisy = generate_trial(&pop, 0.0, &TrialParameters::with_values(0.8, 1.0, 42)).unwrap();
        assert_ne!(clean.spike_times, noisy.spike_times);
    }
}
