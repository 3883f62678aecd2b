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

//! Generate command - run the selection pipeline and export artifacts.

use crate::cli::GenerateArgs;
use crate::error::CliError;
use colored::Colorize;
use msrcfg_core::{partition, select, Circuit};
use std::fs;
use std::path::Path;

/// Run the full pipeline: open the circuit, select astrocytes and
/// neurons, partition the GIDs, and write every artifact into the output
/// directory.
///
/// Progress is reported on stdout; the override file, when given, is
/// read and echoed before the circuit is opened, so a malformed list
/// aborts the run with no files written.
///
/// # Errors
///
/// Returns `Err` if:
/// - The override id list cannot be read or parsed
/// - The circuit manifest or one of its tables cannot be loaded
/// - The requested populations do not exist
/// - Writing an output file fails
pub fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    println!(
        "{} generate(circuit_path: {}, output_path: {}, neuron_population_name: {}, filter_neuron: {})",
        "INFO:".green().bold(),
        args.circuit_file.display(),
        args.output_path.display(),
        args.neuron_population_name,
        args.filter_neuron,
    );

    let astrocyte_override = match &args.astrocyte_id_path {
        Some(path) => {
            let ids = read_id_list(path)?;
            println!("{} User input astrocyte ids: {:?}", "INFO:".green().bold(), ids);
            Some(ids)
        }
        None => None,
    };

    let circuit = Circuit::open(&args.circuit_file)?;
    let selection = select::extract(
        &circuit,
        &args.neuron_population_name,
        args.filter_neuron,
        astrocyte_override,
    )?;
    println!(
        "{} There are {} astrocytes with valid endfeet",
        "INFO:".green().bold(),
        selection.astrocyte_ids.len()
    );
    println!(
        "{} There are {} selected neurons",
        "INFO:".green().bold(),
        selection.neuron_ids.len()
    );

    let gids = partition(&selection.neurons);
    msrcfg_export::export(
        &args.output_path,
        &gids,
        &selection.neuron_ids,
        &selection.astrocyte_ids,
    )?;

    println!(
        "{} Done: configuration files were exported to {}",
        "INFO:".green().bold(),
        args.output_path.display()
    );
    Ok(())
}

/// Read a newline-delimited astrocyte id list.
///
/// Blank lines are skipped; anything else must parse as an unsigned
/// decimal id. Order is preserved and duplicates are kept, the override
/// is used exactly as supplied.
pub fn read_id_list(path: &Path) -> Result<Vec<u64>, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut ids = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id = trimmed
            .parse::<u64>()
            .map_err(|e| CliError::InvalidIdList {
                path: path.to_path_buf(),
                line: idx + 1,
                message: e.to_string(),
            })?;
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn id_list_preserves_order_and_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"9\n3\n\n9\n").unwrap();
        assert_eq!(read_id_list(file.path()).unwrap(), vec![9, 3, 9]);
    }

    #[test]
    fn non_numeric_line_is_rejected_with_its_line_number() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1\nastro\n").unwrap();
        let err = read_id_list(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidIdList { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_id_list(Path::new("/nonexistent/ids.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
