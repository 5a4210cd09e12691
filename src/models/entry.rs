// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Alexander Minges

//! Entry domain model and the insertion-ordered entry collection (UI-agnostic).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logical coordinate bounds of the quadrant plane.
pub const COORD_MIN: i32 = -100;
/// Logical coordinate bounds of the quadrant plane.
pub const COORD_MAX: i32 = 100;

/// Clamp a logical coordinate into the plane bounds.
pub fn clamp_coord(value: i32) -> i32 {
    value.clamp(COORD_MIN, COORD_MAX)
}

/// One plotted item: identity, display name, managed image copy, and logical position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, monotonically assigned id. Never reused within a session.
    pub id: u64,
    /// User-facing display name.
    pub name: String,
    /// Path to the locally managed copy of the source image.
    pub image_path: PathBuf,
    /// Logical x in [-100, 100].
    #[serde(default)]
    pub x: i32,
    /// Logical y in [-100, 100].
    #[serde(default)]
    pub y: i32,
}

impl Entry {
    pub fn new(id: u64, name: String, image_path: PathBuf) -> Self {
        Self {
            id,
            name,
            image_path,
            x: 0,
            y: 0,
        }
    }
}

/// Entry collection with explicit insertion order.
///
/// List display and canvas iteration both go through this store, so the order
/// shown to the user never depends on map iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Append a new entry, keeping insertion order.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove an entry by id, returning it when present.
    pub fn remove(&mut self, id: u64) -> Option<Entry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the entries for persistence.
    pub fn to_vec(&self) -> Vec<Entry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(id: u64, name: &str) -> Entry {
        Entry::new(id, name.to_string(), PathBuf::from(format!("{id}.png")))
    }

    #[test]
    fn store_preserves_insertion_order() {
        let mut store = EntryStore::default();
        store.push(entry(3, "c"));
        store.push(entry(1, "a"));
        store.push(entry(2, "b"));

        let ids: Vec<u64> = store.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn remove_returns_entry_and_keeps_order() {
        let mut store = EntryStore::default();
        store.push(entry(1, "a"));
        store.push(entry(2, "b"));
        store.push(entry(3, "c"));

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "b");
        let ids: Vec<u64> = store.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.remove(2).is_none());
    }

    #[test]
    fn get_mut_targets_exactly_one_entry() {
        let mut store = EntryStore::default();
        store.push(entry(1, "a"));
        store.push(entry(2, "b"));

        store.get_mut(2).unwrap().x = 50;

        assert_eq!(store.get(1).unwrap().x, 0);
        assert_eq!(store.get(2).unwrap().x, 50);
    }

    #[test]
    fn entry_deserializes_with_default_position() {
        let json = r#"{"id": 4, "name": "thing", "image_path": "img/4_thing.png"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!((entry.x, entry.y), (0, 0));
    }

    #[test]
    fn clamp_coord_bounds_values() {
        assert_eq!(clamp_coord(250), 100);
        assert_eq!(clamp_coord(-250), -100);
        assert_eq!(clamp_coord(42), 42);
    }
}
