// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Persistence for entries and axis labels, plus the managed image directory.
//!
//! Responsibilities:
//! - Read and write the pretty-printed `entries.json` state file.
//! - Copy user-picked images into the managed directory under an id prefix.
//! - Drop (and count) entries whose backing image has gone missing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::axis::AxisConfig;
use crate::models::entry::Entry;

/// Filesystem layout of the managed data directory.
#[derive(Clone, Debug)]
pub struct StorePaths {
    pub data_dir: PathBuf,
    pub images_dir: PathBuf,
    pub entries_file: PathBuf,
}

impl StorePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let data_dir = root.into();
        Self {
            images_dir: data_dir.join("images"),
            entries_file: data_dir.join("entries.json"),
            data_dir,
        }
    }

    /// Create the data and image directories when missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.images_dir).with_context(|| {
            format!("Failed to create image directory: {:?}", self.images_dir)
        })
    }
}

/// On-disk shape of the state file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default = "default_next_id")]
    pub next_id: u64,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub axis: AxisConfig,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            next_id: default_next_id(),
            entries: Vec::new(),
            axis: AxisConfig::default(),
        }
    }
}

fn default_next_id() -> u64 {
    1
}

/// State file contents after load-time cleanup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedState {
    pub state: PersistedState,
    /// Entries discarded because their backing image no longer exists.
    pub dropped_missing_images: usize,
}

/// Write the full application state as pretty-printed JSON.
///
/// There is no atomic-write or backup step; a crash mid-write can corrupt the
/// file.
pub fn save_state(path: &Path, state: &PersistedState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    fs::write(path, json).with_context(|| format!("Failed to write state file: {path:?}"))
}

/// Load the state file, tolerating a missing file (empty state) and missing
/// axis keys (per-field defaults). Entries whose image file is gone are
/// dropped from the working set and counted.
pub fn load_state(path: &Path) -> Result<LoadedState> {
    if !path.exists() {
        return Ok(LoadedState::default());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {path:?}"))?;
    let mut state: PersistedState = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse state file: {path:?}"))?;

    let before = state.entries.len();
    state.entries.retain(|e| e.image_path.exists());
    let dropped_missing_images = before - state.entries.len();

    Ok(LoadedState {
        state,
        dropped_missing_images,
    })
}

/// Copy a picked image into the managed directory as `{id}_{fileName}`.
///
/// Returns the destination path and the default entry name (source file stem).
pub fn import_image(paths: &StorePaths, id: u64, source: &Path) -> Result<(PathBuf, String)> {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("Image path has no file name: {source:?}"))?;
    let dest = paths.images_dir.join(format!("{id}_{file_name}"));

    fs::copy(source, &dest)
        .with_context(|| format!("Failed to copy image {source:?} to {dest:?}"))?;

    let default_name = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(file_name);
    Ok((dest, default_name))
}

/// Remove an entry's backing image. Failures are deliberately swallowed.
pub fn delete_image(path: &Path) {
    let _ = fs::remove_file(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_image(tmp: &TempDir, id: u64, name: &str) -> (StorePaths, Entry) {
        let paths = StorePaths::new(tmp.path().join("data"));
        paths.ensure_dirs().unwrap();
        let image = paths.images_dir.join(format!("{id}_{name}.png"));
        fs::write(&image, b"png-bytes").unwrap();
        let mut entry = Entry::new(id, name.to_string(), image);
        entry.x = 50;
        entry.y = -30;
        (paths, entry)
    }

    #[test]
    fn missing_file_loads_as_empty_state() {
        let tmp = TempDir::new().unwrap();
        let paths = StorePaths::new(tmp.path().join("data"));

        let loaded = load_state(&paths.entries_file).unwrap();

        assert_eq!(loaded.state.next_id, 1);
        assert!(loaded.state.entries.is_empty());
        assert_eq!(loaded.state.axis, AxisConfig::default());
        assert_eq!(loaded.dropped_missing_images, 0);
    }

    #[test]
    fn save_then_load_round_trips_state() {
        let tmp = TempDir::new().unwrap();
        let (paths, entry) = store_with_image(&tmp, 1, "alpha");
        let state = PersistedState {
            next_id: 2,
            entries: vec![entry],
            axis: AxisConfig {
                x_name: "Effort".into(),
                ..AxisConfig::default()
            },
        };

        save_state(&paths.entries_file, &state).unwrap();
        let loaded = load_state(&paths.entries_file).unwrap();

        assert_eq!(loaded.state, state);
        assert_eq!(loaded.dropped_missing_images, 0);
    }

    #[test]
    fn save_writes_pretty_utf8_json_with_expected_keys() {
        let tmp = TempDir::new().unwrap();
        let (paths, entry) = store_with_image(&tmp, 1, "alpha");
        let state = PersistedState {
            next_id: 2,
            entries: vec![entry],
            axis: AxisConfig::default(),
        };

        save_state(&paths.entries_file, &state).unwrap();
        let text = fs::read_to_string(&paths.entries_file).unwrap();

        assert!(text.contains('\n'), "state file should be pretty-printed");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["next_id"], 2);
        assert_eq!(value["entries"][0]["id"], 1);
        assert_eq!(value["axis"]["x_left"], "Left");
    }

    #[test]
    fn entries_with_missing_images_are_dropped_and_counted() {
        let tmp = TempDir::new().unwrap();
        let (paths, kept) = store_with_image(&tmp, 1, "kept");
        let gone = Entry::new(2, "gone".into(), paths.images_dir.join("2_gone.png"));
        let state = PersistedState {
            next_id: 3,
            entries: vec![kept.clone(), gone],
            axis: AxisConfig::default(),
        };
        save_state(&paths.entries_file, &state).unwrap();

        let loaded = load_state(&paths.entries_file).unwrap();

        assert_eq!(loaded.state.entries, vec![kept]);
        assert_eq!(loaded.dropped_missing_images, 1);
        // The id counter is untouched by the drop.
        assert_eq!(loaded.state.next_id, 3);
    }

    #[test]
    fn load_applies_axis_defaults_per_missing_field() {
        let tmp = TempDir::new().unwrap();
        let paths = StorePaths::new(tmp.path().join("data"));
        paths.ensure_dirs().unwrap();
        fs::write(
            &paths.entries_file,
            r#"{"next_id": 5, "entries": [], "axis": {"y_name": "Impact"}}"#,
        )
        .unwrap();

        let loaded = load_state(&paths.entries_file).unwrap();

        assert_eq!(loaded.state.next_id, 5);
        assert_eq!(loaded.state.axis.y_name, "Impact");
        assert_eq!(loaded.state.axis.x_name, "X Axis");
    }

    #[test]
    fn load_reports_parse_errors() {
        let tmp = TempDir::new().unwrap();
        let paths = StorePaths::new(tmp.path().join("data"));
        paths.ensure_dirs().unwrap();
        fs::write(&paths.entries_file, "not json").unwrap();

        assert!(load_state(&paths.entries_file).is_err());
    }

    #[test]
    fn import_image_copies_under_id_prefix() {
        let tmp = TempDir::new().unwrap();
        let paths = StorePaths::new(tmp.path().join("data"));
        paths.ensure_dirs().unwrap();
        let source = tmp.path().join("Holiday Photo.png");
        fs::write(&source, b"image-bytes").unwrap();

        let (dest, default_name) = import_image(&paths, 7, &source).unwrap();

        assert_eq!(dest, paths.images_dir.join("7_Holiday Photo.png"));
        assert_eq!(fs::read(&dest).unwrap(), b"image-bytes");
        assert_eq!(default_name, "Holiday Photo");
    }

    #[test]
    fn import_image_fails_for_missing_source() {
        let tmp = TempDir::new().unwrap();
        let paths = StorePaths::new(tmp.path().join("data"));
        paths.ensure_dirs().unwrap();

        let result = import_image(&paths, 1, &tmp.path().join("nope.png"));

        assert!(result.is_err());
    }

    #[test]
    fn delete_image_swallows_missing_file() {
        let tmp = TempDir::new().unwrap();
        delete_image(&tmp.path().join("never-existed.png"));
    }
}
