// msrcfg - multiscale-run configuration generator
//
// Copyright (c) 2026 The msrcfg contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Circuit access and GID selection for multiscale-run configuration.
//!
//! This crate implements the data side of the `msrcfg` pipeline:
//!
//! - **Circuit access**: a JSON manifest maps population names to node
//!   and edge table files ([`Circuit`], [`CircuitConfig`]).
//! - **Selection**: astrocytes with valid endfeet are derived from the
//!   gliovascular edge table, and neurons are either the full population
//!   domain or the subset contacted by those astrocytes
//!   ([`select::extract`]).
//! - **Partitioning**: the selected neurons are split into GID lists by
//!   synapse class and cortical layer ([`partition::partition`]).
//!
//! Serialization of the resulting lists is handled by the `msrcfg-export`
//! crate; this crate never writes files.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use msrcfg_core::{select, partition, Circuit};
//!
//! # fn main() -> msrcfg_core::Result<()> {
//! let circuit = Circuit::open(Path::new("ngv_config.json"))?;
//! let selection = select::extract(&circuit, "All", false, None)?;
//! let gids = partition::partition(&selection.neurons);
//! assert_eq!(gids.all.len(), selection.neuron_ids.len());
//! # Ok(())
//! # }
//! ```

pub mod circuit;
pub mod error;
pub mod partition;
pub mod select;
pub mod tables;

pub use circuit::{Circuit, CircuitConfig};
pub use error::{CircuitError, Result};
pub use partition::{partition, GidPartition};
pub use select::{extract, NeuronRow, Selection};
pub use tables::{EdgeRecord, EdgeTable, NodeRecord, NodeTable};

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
