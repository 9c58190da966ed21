// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Core type definitions for population vector simulation

pub mod error;
pub mod ids;
pub mod neuron;
pub mod trial;

pub use error::{PopvecError, Result};
pub use ids::NeuronId;
pub use neuron::{Neuron, Population};
pub use trial::{DecodedResult, NeuronContribution, SpikeTimes, Trial};
