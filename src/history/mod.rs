use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::context::Context;

/// Most entries a store keeps. Older entries are evicted on append.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub original: String,
    pub enhanced: String,
    pub context: Context,
    pub timestamp: DateTime<Utc>,
}

/// Narrow persistence interface the rest of the binary talks to. The core
/// pipeline never touches storage; only `main` drives a store.
pub trait HistoryStore {
    /// Entries most-recent-first, bounded to `HISTORY_LIMIT`.
    fn load(&self) -> anyhow::Result<Vec<HistoryEntry>>;
    fn append(&mut self, original: &str, enhanced: &str, context: &Context) -> anyhow::Result<()>;
    fn clear(&mut self) -> anyhow::Result<()>;
}

fn push_bounded(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
}

fn new_entry(original: &str, enhanced: &str, context: &Context) -> HistoryEntry {
    HistoryEntry {
        id: Uuid::new_v4(),
        original: original.to_string(),
        enhanced: enhanced.to_string(),
        context: context.clone(),
        timestamp: Utc::now(),
    }
}

/// JSON-file store under the artifact directory.
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        // A corrupt file degrades to an empty history instead of wedging the CLI.
        Ok(serde_json::from_str(&data).unwrap_or_default())
    }

    fn write(&self, entries: &[HistoryEntry]) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl HistoryStore for FileHistory {
    fn load(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        self.read()
    }

    fn append(&mut self, original: &str, enhanced: &str, context: &Context) -> anyhow::Result<()> {
        let mut entries = self.read()?;
        push_bounded(&mut entries, new_entry(original, enhanced, context));
        self.write(&entries)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory stand-in used by tests.
#[derive(Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore for MemoryHistory {
    fn load(&self) -> anyhow::Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, original: &str, enhanced: &str, context: &Context) -> anyhow::Result<()> {
        push_bounded(&mut self.entries, new_entry(original, enhanced, context));
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_is_most_recent_first_and_bounded() {
        let mut store = MemoryHistory::default();
        let ctx = Context::default();
        for i in 0..(HISTORY_LIMIT + 5) {
            store.append(&format!("prompt {i}"), "enhanced", &ctx).unwrap();
        }
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), HISTORY_LIMIT);
        assert_eq!(entries[0].original, format!("prompt {}", HISTORY_LIMIT + 4));
        assert_eq!(entries.last().unwrap().original, "prompt 5");
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = MemoryHistory::default();
        store.append("a", "b", &Context::default()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut store = FileHistory::new(path.clone());

        store.append("first", "enhanced first", &Context::default()).unwrap();
        store.append("second", "enhanced second", &Context::default()).unwrap();

        let entries = FileHistory::new(path).load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].original, "second");
        assert_eq!(entries[1].original, "first");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs_err::write(&path, "not json at all").unwrap();
        assert!(FileHistory::new(path).load().unwrap().is_empty());
    }
}
