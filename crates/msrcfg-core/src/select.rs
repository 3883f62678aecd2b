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

//! Astrocyte and neuron selection.
//!
//! Astrocytes are selected from the gliovascular edge table: an astrocyte
//! qualifies when it has at least one endfoot with a positive compartment
//! length and no endfoot with a zero-length compartment. An astrocyte
//! whose endfeet are all zero-length never enters the candidate set, so
//! the exclusion step only ever removes mixed-edge astrocytes.
//!
//! Neurons are either the full id domain of the requested population, or
//! (when filtering is on) the unique targets of neuroglial edges whose
//! source astrocyte was selected.
//!
//! All "unique" extractions preserve first-appearance order; nothing here
//! sorts. Downstream file content depends on that order, so it is part of
//! the contract.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::tables::EdgeTable;
use std::collections::HashSet;

/// Edge population linking astrocyte endfeet to vascular compartments.
pub const GLIOVASCULAR_EDGES: &str = "gliovascular";

/// Edge population linking astrocytes (source) to contacted neurons
/// (target).
pub const NEUROGLIAL_EDGES: &str = "neuroglial";

/// Attributes of one selected neuron.
///
/// Field names follow the downstream artifact vocabulary: the node table's
/// `population` column is surfaced as `population_name`, and the implicit
/// row index becomes the explicit `node_ids` column.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronRow {
    /// The neuron's node id.
    pub node_ids: u64,
    /// Population the neuron belongs to.
    pub population_name: String,
    /// Synapse class label (`EXC`, `INH`, or other).
    pub synapse_class: String,
    /// Cortical layer.
    pub layer: i64,
}

/// The result of a selection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Attribute rows for the selected neurons, in selection order.
    pub neurons: Vec<NeuronRow>,
    /// Selected neuron ids, each at most once, in selection order.
    pub neuron_ids: Vec<u64>,
    /// Selected astrocyte ids, each at most once, in selection order.
    pub astrocyte_ids: Vec<u64>,
}

/// Derive the astrocytes with valid endfeet from a gliovascular table.
///
/// Candidates are the unique targets of positive-length edges, in first
/// appearance order. Any candidate that also appears on a zero-length
/// edge is removed; the remaining order is untouched.
pub fn select_astrocytes(gliovascular: &EdgeTable) -> Vec<u64> {
    let mut candidates = Vec::new();
    let mut seen = HashSet::new();
    for edge in gliovascular.records() {
        if matches!(edge.endfoot_compartment_length, Some(len) if len > 0.0)
            && seen.insert(edge.target_node)
        {
            candidates.push(edge.target_node);
        }
    }

    let excluded: HashSet<u64> = gliovascular
        .records()
        .iter()
        .filter(|edge| matches!(edge.endfoot_compartment_length, Some(len) if len == 0.0))
        .map(|edge| edge.target_node)
        .collect();

    candidates.retain(|id| !excluded.contains(id));
    candidates
}

/// Unique neuroglial targets whose source astrocyte is in `astrocyte_ids`,
/// in first-appearance order.
pub fn select_connected_neurons(neuroglial: &EdgeTable, astrocyte_ids: &[u64]) -> Vec<u64> {
    let sources: HashSet<u64> = astrocyte_ids.iter().copied().collect();
    let mut selected = Vec::new();
    let mut seen = HashSet::new();
    for edge in neuroglial.records() {
        if sources.contains(&edge.source_node) && seen.insert(edge.target_node) {
            selected.push(edge.target_node);
        }
    }
    selected
}

/// Run the full selection pass over a circuit.
///
/// When `astrocyte_override` is given it is used verbatim as the
/// astrocyte set: no derivation, no validation against the gliovascular
/// table, which is then never read. Otherwise the set comes from
/// [`select_astrocytes`].
///
/// With `filter_neurons` off, the neuron set is the full id domain
/// `0..population_size` of `population_name`; with it on, the set comes
/// from [`select_connected_neurons`] over the neuroglial table.
///
/// # Errors
///
/// Missing populations and malformed tables propagate from the circuit
/// access layer, as does [`crate::CircuitError::NodeIdOutOfRange`] when a
/// neuroglial edge targets an id beyond the node table.
pub fn extract(
    circuit: &Circuit,
    population_name: &str,
    filter_neurons: bool,
    astrocyte_override: Option<Vec<u64>>,
) -> Result<Selection> {
    let astrocyte_ids = match astrocyte_override {
        Some(ids) => ids,
        None => select_astrocytes(&circuit.edges(GLIOVASCULAR_EDGES)?),
    };

    let nodes = circuit.nodes(population_name)?;
    let neuron_ids = if filter_neurons {
        select_connected_neurons(&circuit.edges(NEUROGLIAL_EDGES)?, &astrocyte_ids)
    } else {
        (0..nodes.size()).collect()
    };

    let mut neurons = Vec::with_capacity(neuron_ids.len());
    for &id in &neuron_ids {
        let record = nodes.get(id)?;
        neurons.push(NeuronRow {
            node_ids: id,
            population_name: record.population.clone(),
            synapse_class: record.synapse_class.clone(),
            layer: record.layer,
        });
    }

    Ok(Selection {
        neurons,
        neuron_ids,
        astrocyte_ids,
    })
}
