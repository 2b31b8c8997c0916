// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Persistence seam for saved combinations. The browser build keeps data in
// localStorage on the JS side; native builds use a directory of JSON files.

use super::{count_by_id, find_matching_combination, SavedCombination};
use crate::error::Result;
use crate::materials::Material;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const STORAGE_KEY: &str = "saved_combinations";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Saved-combination list kept under [`STORAGE_KEY`].
///
/// Read-modify-write is not atomic; one writer at a time is assumed.
pub struct CombinationStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CombinationStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Stored combinations, oldest first. Unreadable data reads as empty.
    pub fn list(&self) -> Vec<SavedCombination> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read saved combinations");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "discarding unparseable saved combinations");
            Vec::new()
        })
    }

    pub fn save(&mut self, label: &str, materials: &[&Material]) -> Result<SavedCombination> {
        self.save_at(label, materials, Utc::now())
    }

    /// Append a combination stamped with `at`; id is its Unix time in ms.
    pub fn save_at(
        &mut self,
        label: &str,
        materials: &[&Material],
        at: DateTime<Utc>,
    ) -> Result<SavedCombination> {
        let combination = SavedCombination {
            id: at.timestamp_millis().to_string(),
            label: label.to_string(),
            materials: count_by_id(materials),
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut all = self.list();
        all.push(combination.clone());
        self.write(&all)?;
        Ok(combination)
    }

    /// Remove every combination with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let remaining: Vec<SavedCombination> =
            self.list().into_iter().filter(|c| c.id != id).collect();
        self.write(&remaining)
    }

    pub fn find_matching(&self, materials: &[&Material]) -> Option<SavedCombination> {
        let all = self.list();
        find_matching_combination(materials, &all).cloned()
    }

    fn write(&mut self, combinations: &[SavedCombination]) -> Result<()> {
        let raw = serde_json::to_string(combinations)?;
        self.store.set(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{RICE_KOJI, SOYBEAN};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = CombinationStore::new(MemoryStore::new());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_assigns_id_and_timestamp() {
        let mut store = CombinationStore::new(MemoryStore::new());
        let saved = store
            .save_at("朝の味噌", &[&SOYBEAN, &RICE_KOJI, &RICE_KOJI], at(1_700_000_000))
            .unwrap();

        assert_eq!(saved.id, "1700000000000");
        assert_eq!(saved.created_at, "2023-11-14T22:13:20.000Z");
        assert_eq!(saved.materials.len(), 2);
        assert_eq!(saved.materials[1].material_id, "rice-koji");
        assert_eq!(saved.materials[1].count, 2);
        assert_eq!(store.list(), vec![saved]);
    }

    #[test]
    fn test_save_appends_and_delete_removes() {
        let mut store = CombinationStore::new(MemoryStore::new());
        let first = store.save_at("a", &[&SOYBEAN], at(1)).unwrap();
        let second = store.save_at("b", &[&RICE_KOJI], at(2)).unwrap();
        assert_eq!(store.list().len(), 2);

        store.delete(&first.id).unwrap();
        assert_eq!(store.list(), vec![second]);

        store.delete("missing").unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let mut raw = MemoryStore::new();
        raw.set(STORAGE_KEY, "{not json").unwrap();
        let mut store = CombinationStore::new(raw);
        assert!(store.list().is_empty());

        // Saving overwrites the corrupt value.
        store.save_at("fresh", &[&SOYBEAN], at(5)).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_find_matching_through_store() {
        let mut store = CombinationStore::new(MemoryStore::new());
        store.save_at("kaga", &[&SOYBEAN, &RICE_KOJI], at(10)).unwrap();
        let found = store.find_matching(&[&RICE_KOJI, &SOYBEAN]);
        assert_eq!(found.map(|c| c.label), Some("kaga".to_string()));
        assert!(store.find_matching(&[&SOYBEAN]).is_none());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CombinationStore::new(FileStore::new(dir.path().join("state")));
        store.save_at("a", &[&SOYBEAN], at(1)).unwrap();

        let reopened = CombinationStore::new(FileStore::new(dir.path().join("state")));
        let list = reopened.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].label, "a");
        assert!(dir.path().join("state").join("saved_combinations.json").exists());
    }

    #[test]
    fn test_file_store_missing_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert_eq!(store.get("absent").unwrap(), None);
        store.delete("absent").unwrap();
        store.set("k", "[]").unwrap();
        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
