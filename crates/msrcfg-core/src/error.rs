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

//! Error types for circuit access and selection.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience result alias for circuit operations.
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Errors raised while opening a circuit or resolving its populations.
///
/// Selection itself is infallible once the tables are in memory; every
/// variant here comes from the data-access layer (manifest parsing, table
/// loading, id lookup) and propagates unchanged to the caller.
///
/// # Examples
///
/// ```
/// use msrcfg_core::CircuitError;
///
/// let err = CircuitError::NodePopulationNotFound("All".to_string());
/// assert_eq!(
///     err.to_string(),
///     "node population 'All' not found in circuit config"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CircuitError {
    /// I/O failure while reading the manifest or a table file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// The circuit manifest is not valid JSON or has the wrong shape.
    #[error("malformed circuit config '{path}': {message}")]
    Config {
        /// Path to the manifest file.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// The manifest has no edge population with the requested name.
    #[error("edge population '{0}' not found in circuit config")]
    EdgePopulationNotFound(String),

    /// The manifest has no node population with the requested name.
    #[error("node population '{0}' not found in circuit config")]
    NodePopulationNotFound(String),

    /// A table file could not be deserialized.
    ///
    /// `record` is the 1-based data record number reported by the CSV
    /// reader, 0 when the failure is not tied to a record.
    #[error("table error in '{path}' at record {record}: {message}")]
    Table {
        /// Path to the table file.
        path: PathBuf,
        /// 1-based record number, or 0.
        record: u64,
        /// Deserialization error message.
        message: String,
    },

    /// A selected node id has no row in the node table.
    #[error("node id {id} out of range for population '{population}' (size {size})")]
    NodeIdOutOfRange {
        /// The offending node id.
        id: u64,
        /// The population that was queried.
        population: String,
        /// Number of rows in the population.
        size: u64,
    },
}

impl CircuitError {
    /// Build an [`CircuitError::Io`] from a path and a `std::io::Error`.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        CircuitError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Build a [`CircuitError::Table`] from a path and a `csv::Error`.
    pub fn table(path: impl Into<PathBuf>, err: &csv::Error) -> Self {
        let record = err
            .position()
            .map(|pos| pos.record())
            .unwrap_or(0);
        CircuitError::Table {
            path: path.into(),
            record,
            message: err.to_string(),
        }
    }
}
