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

//! CLI command definitions and argument parsing.
//!
//! Long option names keep the underscore spelling the downstream tooling
//! already scripts against (`--circuit_file`, not `--circuit-file`).

use crate::commands;
use crate::error::CliError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// msrcfg - multiscale-run configuration generator.
///
/// Extracts neuron and astrocyte id subsets from a brain-circuit dataset
/// and writes the GID list files and `node_sets.json` descriptor consumed
/// by the multiscale simulation.
#[derive(Parser)]
#[command(name = "msrcfg")]
#[command(version, about = "msrcfg - multiscale-run configuration generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the GID lists and node-set descriptor for a circuit.
    Generate(GenerateArgs),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Generate(args) => commands::generate(&args),
        }
    }
}

/// Arguments of the `generate` command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the circuit configuration describing node and edge
    /// datasets.
    #[arg(short = 'c', long = "circuit_file")]
    pub circuit_file: PathBuf,

    /// Destination directory for the generated files (created if
    /// absent).
    #[arg(short = 'o', long = "output_path")]
    pub output_path: PathBuf,

    /// Restrict neurons to those connected to the selected astrocytes.
    #[arg(short = 'f', long = "filter_neuron")]
    pub filter_neuron: bool,

    /// Node population to draw neurons from.
    #[arg(short = 'n', long = "neuron_population_name", default_value = "All")]
    pub neuron_population_name: String,

    /// Path to a newline-delimited id list overriding astrocyte
    /// selection.
    #[arg(short = 'a', long = "astrocyte_id_path")]
    pub astrocyte_id_path: Option<PathBuf>,
}
