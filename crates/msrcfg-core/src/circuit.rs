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

//! Circuit manifest loading and population lookup.
//!
//! A circuit is described by a JSON manifest mapping population names to
//! table files:
//!
//! ```json
//! {
//!     "edges": {
//!         "gliovascular": "edges/gliovascular.csv",
//!         "neuroglial": "edges/neuroglial.csv"
//!     },
//!     "nodes": {
//!         "All": "nodes/neurons.csv",
//!         "astrocytes": "nodes/astrocytes.csv"
//!     }
//! }
//! ```
//!
//! Relative table paths resolve against the manifest's directory. Tables
//! are loaded on demand, one fresh read per lookup; there is no caching
//! because the pipeline reads each table at most once per run.

use crate::error::{CircuitError, Result};
use crate::tables::{EdgeTable, NodeTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The deserialized circuit manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CircuitConfig {
    /// Edge population name to table path.
    #[serde(default)]
    pub edges: BTreeMap<String, PathBuf>,
    /// Node population name to table path.
    #[serde(default)]
    pub nodes: BTreeMap<String, PathBuf>,
}

/// An opened circuit: a parsed manifest plus its base directory.
#[derive(Debug, Clone)]
pub struct Circuit {
    config: CircuitConfig,
    base_dir: PathBuf,
}

impl Circuit {
    /// Open a circuit from its manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::Io`] if the manifest cannot be read and
    /// [`CircuitError::Config`] if it is not valid JSON of the expected
    /// shape.
    pub fn open(config_path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(config_path).map_err(|e| CircuitError::io(config_path, e))?;
        let config: CircuitConfig =
            serde_json::from_str(&content).map_err(|e| CircuitError::Config {
                path: config_path.to_path_buf(),
                message: e.to_string(),
            })?;
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Circuit { config, base_dir })
    }

    /// The parsed manifest.
    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    /// Load the edge table for `population`.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::EdgePopulationNotFound`] when the manifest
    /// has no entry for `population`; table I/O and parse failures
    /// propagate from [`EdgeTable::load`].
    pub fn edges(&self, population: &str) -> Result<EdgeTable> {
        let path = self
            .config
            .edges
            .get(population)
            .ok_or_else(|| CircuitError::EdgePopulationNotFound(population.to_string()))?;
        EdgeTable::load(&self.resolve(path))
    }

    /// Load the node table for `population`.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::NodePopulationNotFound`] when the manifest
    /// has no entry for `population`; table I/O and parse failures
    /// propagate from [`NodeTable::load`].
    pub fn nodes(&self, population: &str) -> Result<NodeTable> {
        let path = self
            .config
            .nodes
            .get(population)
            .ok_or_else(|| CircuitError::NodePopulationNotFound(population.to_string()))?;
        NodeTable::load(population, &self.resolve(path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture_circuit(dir: &Path) -> PathBuf {
        fs::create_dir_all(dir.join("edges")).unwrap();
        fs::write(
            dir.join("edges/gliovascular.csv"),
            "source_node,target_node,endfoot_compartment_length\n0,1,2.0\n",
        )
        .unwrap();
        fs::write(
            dir.join("neurons.csv"),
            "population,synapse_class,layer\nAll,EXC,2\nAll,INH,5\n",
        )
        .unwrap();
        let config_path = dir.join("circuit_config.json");
        fs::write(
            &config_path,
            r#"{
    "edges": {"gliovascular": "edges/gliovascular.csv"},
    "nodes": {"All": "neurons.csv"}
}"#,
        )
        .unwrap();
        config_path
    }

    #[test]
    fn open_resolves_relative_table_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture_circuit(dir.path());
        let circuit = Circuit::open(&config_path).unwrap();

        let edges = circuit.edges("gliovascular").unwrap();
        assert_eq!(edges.size(), 1);

        let nodes = circuit.nodes("All").unwrap();
        assert_eq!(nodes.size(), 2);
        assert_eq!(nodes.name(), "All");
    }

    #[test]
    fn missing_populations_are_lookup_failures() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_fixture_circuit(dir.path());
        let circuit = Circuit::open(&config_path).unwrap();

        assert!(matches!(
            circuit.edges("neuroglial").unwrap_err(),
            CircuitError::EdgePopulationNotFound(name) if name == "neuroglial"
        ));
        assert!(matches!(
            circuit.nodes("Excitatory").unwrap_err(),
            CircuitError::NodePopulationNotFound(name) if name == "Excitatory"
        ));
    }

    #[test]
    fn bad_manifest_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("broken.json");
        fs::write(&config_path, "{ not json").unwrap();
        assert!(matches!(
            Circuit::open(&config_path).unwrap_err(),
            CircuitError::Config { .. }
        ));
    }

    #[test]
    fn missing_manifest_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Circuit::open(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CircuitError::Io { .. }));
    }
}
