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

//! Error types for artifact serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience result alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while writing output artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure (directory creation or file write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path being written.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// `node_sets.json` serialization failure.
    #[error("node_sets serialization error: {0}")]
    Json(String),
}

impl ExportError {
    /// Build an [`ExportError::Io`] from a path and a `std::io::Error`.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
