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

//! The `node_sets.json` descriptor.
//!
//! The downstream simulator addresses sub-populations through four named
//! node sets. The key order is part of the byte-determinism contract, so
//! the descriptor is a struct (serde emits fields in declaration order)
//! rather than a map.

use crate::error::{ExportError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Descriptor filename.
pub const NODE_SETS_FILE: &str = "node_sets.json";

/// A population label plus the node ids addressed under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationSet {
    /// Population name.
    pub population: String,
    /// Node ids, in selection order.
    pub node_id: Vec<u64>,
}

/// The four node sets consumed by the multiscale simulation.
///
/// # Examples
///
/// ```
/// use msrcfg_export::NodeSets;
///
/// let sets = NodeSets::new(&[0, 1, 2], &[7]);
/// assert_eq!(sets.astro_mini, ["testNGVSSCX", "Astrocytes"]);
/// assert_eq!(sets.src_cells.node_id, vec![0, 1, 2]);
/// assert_eq!(sets.astrocytes.population, "astrocytes");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSets {
    /// Compound set naming the two groups below.
    #[serde(rename = "testNGVSSCX_AstroMini")]
    pub astro_mini: [&'static str; 2],
    /// Selected neurons, under the `All` population.
    pub src_cells: PopulationSet,
    /// Selected neurons again, under the simulator's target-set name.
    #[serde(rename = "testNGVSSCX")]
    pub test_ngv_sscx: PopulationSet,
    /// Selected astrocytes.
    #[serde(rename = "Astrocytes")]
    pub astrocytes: PopulationSet,
}

impl NodeSets {
    /// Build the descriptor for a selection.
    pub fn new(neuron_ids: &[u64], astrocyte_ids: &[u64]) -> Self {
        let neurons = |name: &str| PopulationSet {
            population: name.to_string(),
            node_id: neuron_ids.to_vec(),
        };
        NodeSets {
            astro_mini: ["testNGVSSCX", "Astrocytes"],
            src_cells: neurons("All"),
            test_ngv_sscx: neurons("All"),
            astrocytes: PopulationSet {
                population: "astrocytes".to_string(),
                node_id: astrocyte_ids.to_vec(),
            },
        }
    }

    /// Render the descriptor with 4-space indentation and a trailing
    /// newline.
    pub fn to_json(&self) -> Result<String> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| ExportError::Json(e.to_string()))?;
        buf.push(b'\n');
        String::from_utf8(buf).map_err(|e| ExportError::Json(e.to_string()))
    }
}

/// Write `node_sets.json` into `dir`.
pub fn write_node_sets(dir: &Path, neuron_ids: &[u64], astrocyte_ids: &[u64]) -> Result<()> {
    let path = dir.join(NODE_SETS_FILE);
    let json = NodeSets::new(neuron_ids, astrocyte_ids).to_json()?;
    fs::write(&path, json).map_err(|e| ExportError::io(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_appear_in_fixed_order() {
        let json = NodeSets::new(&[0], &[1]).to_json().unwrap();
        let positions: Vec<usize> = [
            "\"testNGVSSCX_AstroMini\"",
            "\"src_cells\"",
            "\"testNGVSSCX\"",
            "\"Astrocytes\"",
        ]
        .iter()
        .map(|key| json.find(key).expect("key present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn uses_four_space_indent_and_trailing_newline() {
        let json = NodeSets::new(&[0, 1], &[]).to_json().unwrap();
        assert!(json.starts_with("{\n    \"testNGVSSCX_AstroMini\": [\n        \"testNGVSSCX\",\n        \"Astrocytes\"\n    ],"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn descriptor_shape_matches_the_simulator_contract() {
        let json = NodeSets::new(&[3, 1], &[9, 4]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(
            value["testNGVSSCX_AstroMini"],
            serde_json::json!(["testNGVSSCX", "Astrocytes"])
        );
        assert_eq!(value["src_cells"]["population"], "All");
        assert_eq!(value["src_cells"]["node_id"], serde_json::json!([3, 1]));
        assert_eq!(value["testNGVSSCX"]["node_id"], serde_json::json!([3, 1]));
        assert_eq!(value["Astrocytes"]["population"], "astrocytes");
        assert_eq!(value["Astrocytes"]["node_id"], serde_json::json!([9, 4]));
    }

    #[test]
    fn write_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        write_node_sets(dir.path(), &[0, 1, 2], &[5]).unwrap();
        let first = fs::read(dir.path().join(NODE_SETS_FILE)).unwrap();
        write_node_sets(dir.path(), &[0, 1, 2], &[5]).unwrap();
        let second = fs::read(dir.path().join(NODE_SETS_FILE)).unwrap();
        assert_eq!(first, second);
    }
}
