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

//! Deterministic serialization of the multiscale-run artifacts.
//!
//! Writes ten files into the output directory: nine newline-delimited
//! GID lists (all, EXC, INH, layers 1 through 6) and the
//! `node_sets.json` descriptor. For identical inputs the output bytes
//! are identical; integer formatting is plain decimal and the JSON uses
//! a fixed key order with 4-space indentation.

pub mod error;
pub mod gids;
pub mod node_sets;

pub use error::{ExportError, Result};
pub use gids::{
    write_gid_file, write_partition, ALL_GIDS_FILE, EXC_GIDS_FILE, INH_GIDS_FILE,
    LAYER_GIDS_FILES,
};
pub use node_sets::{write_node_sets, NodeSets, PopulationSet, NODE_SETS_FILE};

use msrcfg_core::GidPartition;
use std::fs;
use std::path::Path;

/// Write every artifact into `output_dir`.
///
/// Creates the directory first if it does not exist; a pre-existing
/// directory is not an error. A killed run may leave some but not all
/// files written; there is no cleanup pass.
///
/// # Errors
///
/// Any filesystem failure other than "directory already exists" is an
/// [`ExportError::Io`].
pub fn export(
    output_dir: &Path,
    gids: &GidPartition,
    neuron_ids: &[u64],
    astrocyte_ids: &[u64],
) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| ExportError::io(output_dir, e))?;
    write_partition(output_dir, gids)?;
    write_node_sets(output_dir, neuron_ids, astrocyte_ids)?;
    Ok(())
}
