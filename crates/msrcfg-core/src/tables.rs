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

//! Edge and node table loading.
//!
//! Tables are CSV files with a header row. Rows are kept in file order:
//! the edge index is the 0-based record position, and the node id is the
//! 0-based row index of the node table. Columns beyond the ones named in
//! [`EdgeRecord`] and [`NodeRecord`] are ignored.

use crate::error::{CircuitError, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One directed edge.
///
/// Gliovascular edges carry an `endfoot_compartment_length`; neuroglial
/// edges do not, and the field deserializes to `None` when the column is
/// absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeRecord {
    /// Source node id (an astrocyte for neuroglial edges).
    pub source_node: u64,
    /// Target node id.
    pub target_node: u64,
    /// Astrocyte-vasculature contact extent; zero marks an invalid or
    /// absent contact.
    #[serde(default)]
    pub endfoot_compartment_length: Option<f64>,
}

/// An ordered edge table, one record per edge index.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    records: Vec<EdgeRecord>,
}

impl EdgeTable {
    /// Load an edge table from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let records = read_csv(path)?;
        Ok(EdgeTable { records })
    }

    /// Number of edges.
    pub fn size(&self) -> u64 {
        self.records.len() as u64
    }

    /// All edges in edge-index order.
    pub fn records(&self) -> &[EdgeRecord] {
        &self.records
    }

    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<EdgeRecord>) -> Self {
        EdgeTable { records }
    }
}

/// One node row. The node id is implicit: the 0-based row index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeRecord {
    /// Population the node belongs to.
    pub population: String,
    /// Synapse class: `EXC`, `INH`, or another label.
    pub synapse_class: String,
    /// Cortical layer. Values outside 1..=6 are legal and simply fall
    /// outside every layer partition.
    pub layer: i64,
}

/// A node table for one population.
#[derive(Debug, Clone)]
pub struct NodeTable {
    name: String,
    records: Vec<NodeRecord>,
}

impl NodeTable {
    /// Load a node table from a CSV file.
    pub fn load(name: &str, path: &Path) -> Result<Self> {
        let records = read_csv(path)?;
        Ok(NodeTable {
            name: name.to_string(),
            records,
        })
    }

    /// Population name this table was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes in the population.
    pub fn size(&self) -> u64 {
        self.records.len() as u64
    }

    /// Look up a node row by id.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::NodeIdOutOfRange`] when `id` has no row.
    pub fn get(&self, id: u64) -> Result<&NodeRecord> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.records.get(idx))
            .ok_or_else(|| CircuitError::NodeIdOutOfRange {
                id,
                population: self.name.clone(),
                size: self.size(),
            })
    }

    #[cfg(test)]
    pub(crate) fn from_records(name: &str, records: Vec<NodeRecord>) -> Self {
        NodeTable {
            name: name.to_string(),
            records,
        }
    }
}

fn read_csv<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| CircuitError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T = row.map_err(|e| CircuitError::table(path, &e))?;
        records.push(record);
    }
    Ok(records)
}
