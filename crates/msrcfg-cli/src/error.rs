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

//! Structured error type for CLI command execution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `msrcfg` binary.
///
/// Argument-parsing problems never reach this type; they are handled in
/// `main` before a command runs. Everything here terminates the process
/// with a nonzero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failure reading the astrocyte override file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// A line of the astrocyte override file is not a decimal id.
    #[error("invalid astrocyte id in '{path}' at line {line}: {message}")]
    InvalidIdList {
        /// The override file path.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Parse error message.
        message: String,
    },

    /// Circuit access or selection failure.
    #[error(transparent)]
    Circuit(#[from] msrcfg_core::CircuitError),

    /// Artifact serialization failure.
    #[error(transparent)]
    Export(#[from] msrcfg_export::ExportError),
}
