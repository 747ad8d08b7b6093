//! Persistent identifier registry.
//!
//! Every derived key (for example `"TR and CT's AK-47"`) receives the index
//! of its position in an ordered list that is saved between runs. Keys are
//! only ever appended, so an id is never reassigned to a different key.

use crate::error::Result;
use crate::file_utils::{read_utf8_file, write_json};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct IdRegistry {
    keys: Vec<String>,
    index: HashMap<String, u32>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a previously saved key list.
    ///
    /// A key listed twice resolves to its first position.
    pub fn from_keys(keys: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(keys.len());
        for (position, key) in keys.iter().enumerate() {
            index.entry(key.clone()).or_insert(position as u32);
        }
        Self { keys, index }
    }

    /// Load the registry from a JSON array file. A missing file yields an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No identifier registry at {:?}, starting empty", path);
            return Ok(Self::new());
        }
        let text = read_utf8_file(path)?;
        let keys: Vec<String> = serde_json::from_str(&text)?;
        tracing::debug!("Loaded {} identifier keys from {:?}", keys.len(), path);
        Ok(Self::from_keys(keys))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, &self.keys)
    }

    /// Return the id for `key`, appending it when unseen.
    pub fn assign(&mut self, key: &str) -> u32 {
        if let Some(&id) = self.index.get(key) {
            return id;
        }
        let id = self.keys.len() as u32;
        self.keys.push(key.to_string());
        self.index.insert(key.to_string(), id);
        id
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.index.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Serialize for IdRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.keys.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_new_key_returns_previous_length() {
        let mut registry = IdRegistry::from_keys(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(registry.assign("c"), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut registry = IdRegistry::new();
        let first = registry.assign("TR and CT's AK-47");
        let second = registry.assign("TR and CT's AK-47");
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_existing_key_keeps_position() {
        let mut registry =
            IdRegistry::from_keys(vec!["x".to_string(), "y".to_string(), "z".to_string()]);
        assert_eq!(registry.assign("y"), 1);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_saved_keys_resolve_to_first() {
        let registry =
            IdRegistry::from_keys(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(registry.get("a"), Some(0));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = IdRegistry::load(&dir.path().join("ids.json")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_save_and_load_keep_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.json");

        let mut registry = IdRegistry::new();
        registry.assign("CT's M4A4");
        registry.assign("TR's Glock-18");
        registry.save(&path).unwrap();

        let mut reloaded = IdRegistry::load(&path).unwrap();
        assert_eq!(reloaded.assign("TR's Glock-18"), 1);
        assert_eq!(reloaded.assign("Flight Plan"), 2);
        assert_eq!(reloaded.keys()[0], "CT's M4A4");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.json");
        std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        assert!(IdRegistry::load(&path).is_err());
    }
}
