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

//! GID partitioning by synapse class and cortical layer.

use crate::select::NeuronRow;

/// Number of cortical layers with a dedicated GID list.
pub const LAYER_COUNT: usize = 6;

/// The nine GID lists derived from a selection.
///
/// `excitatory`/`inhibitory` hold the rows whose `synapse_class` is
/// exactly `EXC`/`INH`. `layers[i]` holds the rows in layer `i + 1`; rows
/// with a layer outside 1..=6 appear in no layer list. Every list keeps
/// selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GidPartition {
    /// All selected neuron ids.
    pub all: Vec<u64>,
    /// Ids with synapse class `EXC`.
    pub excitatory: Vec<u64>,
    /// Ids with synapse class `INH`.
    pub inhibitory: Vec<u64>,
    /// Ids per cortical layer, index 0 = layer 1.
    pub layers: [Vec<u64>; LAYER_COUNT],
}

/// Split neuron rows into the nine GID lists.
pub fn partition(rows: &[NeuronRow]) -> GidPartition {
    let mut gids = GidPartition::default();
    for row in rows {
        gids.all.push(row.node_ids);
        match row.synapse_class.as_str() {
            "EXC" => gids.excitatory.push(row.node_ids),
            "INH" => gids.inhibitory.push(row.node_ids),
            _ => {}
        }
        if (1..=LAYER_COUNT as i64).contains(&row.layer) {
            gids.layers[(row.layer - 1) as usize].push(row.node_ids);
        }
    }
    gids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, class: &str, layer: i64) -> NeuronRow {
        NeuronRow {
            node_ids: id,
            population_name: "All".to_string(),
            synapse_class: class.to_string(),
            layer,
        }
    }

    #[test]
    fn classes_and_layers_are_assigned() {
        let rows = vec![
            row(0, "EXC", 1),
            row(1, "INH", 1),
            row(2, "EXC", 6),
            row(3, "INH", 4),
        ];
        let gids = partition(&rows);
        assert_eq!(gids.all, vec![0, 1, 2, 3]);
        assert_eq!(gids.excitatory, vec![0, 2]);
        assert_eq!(gids.inhibitory, vec![1, 3]);
        assert_eq!(gids.layers[0], vec![0, 1]);
        assert_eq!(gids.layers[3], vec![3]);
        assert_eq!(gids.layers[5], vec![2]);
        assert!(gids.layers[1].is_empty());
    }

    #[test]
    fn unknown_class_rows_stay_out_of_class_lists() {
        let gids = partition(&[row(7, "OTHER", 2)]);
        assert_eq!(gids.all, vec![7]);
        assert!(gids.excitatory.is_empty());
        assert!(gids.inhibitory.is_empty());
        assert_eq!(gids.layers[1], vec![7]);
    }

    #[test]
    fn out_of_range_layers_are_silently_dropped() {
        let gids = partition(&[row(1, "EXC", 0), row(2, "EXC", 7), row(3, "EXC", -1)]);
        assert_eq!(gids.all, vec![1, 2, 3]);
        assert_eq!(gids.excitatory, vec![1, 2, 3]);
        assert!(gids.layers.iter().all(Vec::is_empty));
    }

    #[test]
    fn empty_selection_yields_empty_lists() {
        let gids = partition(&[]);
        assert!(gids.all.is_empty());
        assert!(gids.layers.iter().all(Vec::is_empty));
    }
}
