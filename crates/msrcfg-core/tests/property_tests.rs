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

//! Property tests for the GID partition invariants.

use msrcfg_core::{partition, NeuronRow};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_rows() -> impl Strategy<Value = Vec<NeuronRow>> {
    let class = prop_oneof![
        Just("EXC".to_string()),
        Just("INH".to_string()),
        Just("OTHER".to_string()),
    ];
    prop::collection::vec((class, -2i64..9), 0..200).prop_map(|cells| {
        cells
            .into_iter()
            .enumerate()
            .map(|(id, (synapse_class, layer))| NeuronRow {
                node_ids: id as u64,
                population_name: "All".to_string(),
                synapse_class,
                layer,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn class_lists_partition_a_subset_of_all(rows in arb_rows()) {
        let gids = partition(&rows);
        let all: HashSet<u64> = gids.all.iter().copied().collect();
        let exc: HashSet<u64> = gids.excitatory.iter().copied().collect();
        let inh: HashSet<u64> = gids.inhibitory.iter().copied().collect();

        prop_assert!(exc.is_subset(&all));
        prop_assert!(inh.is_subset(&all));
        prop_assert!(exc.is_disjoint(&inh));
    }

    #[test]
    fn layer_lists_are_pairwise_disjoint_subsets(rows in arb_rows()) {
        let gids = partition(&rows);
        let all: HashSet<u64> = gids.all.iter().copied().collect();

        let mut seen: HashSet<u64> = HashSet::new();
        for layer in &gids.layers {
            for id in layer {
                prop_assert!(all.contains(id));
                // Any repeat across layer lists breaks disjointness.
                prop_assert!(seen.insert(*id));
            }
        }
    }

    #[test]
    fn out_of_range_layers_never_reach_a_layer_list(rows in arb_rows()) {
        let gids = partition(&rows);
        let in_range = rows.iter().filter(|r| (1..=6).contains(&r.layer)).count();
        let bucketed: usize = gids.layers.iter().map(Vec::len).sum();
        prop_assert_eq!(in_range, bucketed);
    }

    #[test]
    fn all_list_keeps_every_row_in_order(rows in arb_rows()) {
        let gids = partition(&rows);
        let expected: Vec<u64> = rows.iter().map(|r| r.node_ids).collect();
        prop_assert_eq!(gids.all, expected);
    }
}
