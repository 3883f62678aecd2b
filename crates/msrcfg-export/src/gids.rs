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

//! GID list files: one decimal id per line, trailing newline, no header.

use crate::error::{ExportError, Result};
use msrcfg_core::GidPartition;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// All selected neuron ids.
pub const ALL_GIDS_FILE: &str = "mrci_gids.txt";

/// Excitatory neuron ids.
pub const EXC_GIDS_FILE: &str = "mrci_exc_gids.txt";

/// Inhibitory neuron ids.
pub const INH_GIDS_FILE: &str = "mrci_inh_gids.txt";

/// Per-layer neuron ids, index 0 = layer 1.
pub const LAYER_GIDS_FILES: [&str; 6] = [
    "mrci_L1_gids.txt",
    "mrci_L2_gids.txt",
    "mrci_L3_gids.txt",
    "mrci_L4_gids.txt",
    "mrci_L5_gids.txt",
    "mrci_L6_gids.txt",
];

/// Write one id list to `path`. An empty list produces an empty file.
pub fn write_gid_file(path: &Path, ids: &[u64]) -> Result<()> {
    let mut content = String::with_capacity(ids.len() * 8);
    for id in ids {
        // Infallible for String targets.
        let _ = writeln!(content, "{id}");
    }
    fs::write(path, content).map_err(|e| ExportError::io(path, e))
}

/// Write the nine GID list files into `dir`.
pub fn write_partition(dir: &Path, gids: &GidPartition) -> Result<()> {
    write_gid_file(&dir.join(ALL_GIDS_FILE), &gids.all)?;
    write_gid_file(&dir.join(EXC_GIDS_FILE), &gids.excitatory)?;
    write_gid_file(&dir.join(INH_GIDS_FILE), &gids.inhibitory)?;
    for (name, ids) in LAYER_GIDS_FILES.iter().zip(&gids.layers) {
        write_gid_file(&dir.join(name), ids)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_id_per_line_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gids.txt");
        write_gid_file(&path, &[3, 1, 12]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3\n1\n12\n");
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gids.txt");
        write_gid_file(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn partition_writes_all_nine_files() {
        let dir = tempfile::tempdir().unwrap();
        let gids = GidPartition {
            all: vec![0, 1],
            excitatory: vec![0],
            inhibitory: vec![1],
            ..GidPartition::default()
        };
        write_partition(dir.path(), &gids).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(ALL_GIDS_FILE)).unwrap(),
            "0\n1\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(EXC_GIDS_FILE)).unwrap(),
            "0\n"
        );
        for name in LAYER_GIDS_FILES {
            assert_eq!(fs::read_to_string(dir.path().join(name)).unwrap(), "");
        }
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("gids.txt");
        let err = write_gid_file(&path, &[1]).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
