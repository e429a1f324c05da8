//! Persistence store — owns the in-memory snapshot on behalf of the
//! integration layer.
//!
//! `replace` persists the document before notifying subscribers, so a
//! score or layout derived inside a notification is never computed from
//! a snapshot older than the one on disk. Scoring and rendering never
//! touch storage; they only ever see the snapshot handed to them.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::errors::StoreError;
use crate::schema::migrate::migrate_raw;
use crate::schema::ResumeSnapshot;

/// Synchronous storage seam. Implementations hold one document under a
/// single named key; every read goes through the migrator.
pub trait StorageBackend {
    /// Returns the persisted document, or `None` when nothing was ever written.
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, raw: &str) -> Result<(), StoreError>;
}

/// File-backed storage: one JSON document at a fixed path.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn write(&self, raw: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions. Clones share the
/// same cell, so a test can inspect what the store persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    cell: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, raw: &str) -> Result<(), StoreError> {
        *self.cell.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

type Subscriber = Box<dyn FnMut(&ResumeSnapshot)>;

/// The explicit store object from the integration layer's point of view:
/// `get`, `replace`, and a change-notification observer list.
pub struct ResumeStore<B: StorageBackend> {
    backend: B,
    current: ResumeSnapshot,
    subscribers: Vec<Subscriber>,
}

impl<B: StorageBackend> ResumeStore<B> {
    /// Opens the store: reads the persisted document (if any) and runs it
    /// through the migrator. A backend read failure degrades to the empty
    /// snapshot rather than failing startup.
    pub fn open(backend: B) -> Self {
        let current = match backend.read() {
            Ok(raw) => migrate_raw(raw.as_deref()),
            Err(err) => {
                warn!("failed to read persisted resume, starting empty: {err}");
                ResumeSnapshot::empty()
            }
        };
        ResumeStore {
            backend,
            current,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &ResumeSnapshot {
        &self.current
    }

    /// Replaces the snapshot wholesale: persist first, then swap the
    /// in-memory value, then notify subscribers with the new snapshot.
    pub fn replace(&mut self, snapshot: ResumeSnapshot) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&snapshot)?;
        self.backend.write(&raw)?;
        self.current = snapshot;
        debug!("persisted resume snapshot ({} bytes)", raw.len());
        for subscriber in &mut self.subscribers {
            subscriber(&self.current);
        }
        Ok(())
    }

    /// Registers a change callback, invoked after every successful replace.
    pub fn subscribe(&mut self, callback: impl FnMut(&ResumeSnapshot) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn load_sample(&mut self) -> Result<(), StoreError> {
        self.replace(ResumeSnapshot::sample())
    }

    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.replace(ResumeSnapshot::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TemplateId;

    #[test]
    fn test_open_on_empty_storage_yields_empty_snapshot() {
        let store = ResumeStore::open(MemoryStorage::new());
        assert_eq!(store.get(), &ResumeSnapshot::empty());
    }

    #[test]
    fn test_replace_persists_and_survives_reopen() {
        let storage = MemoryStorage::new();
        let mut store = ResumeStore::open(storage.clone());
        let mut snapshot = ResumeSnapshot::sample();
        snapshot.template = TemplateId::Modern;
        store.replace(snapshot.clone()).unwrap();

        let reopened = ResumeStore::open(storage);
        assert_eq!(reopened.get(), &snapshot);
    }

    #[test]
    fn test_corrupt_storage_degrades_to_empty_snapshot() {
        let storage = MemoryStorage::new();
        storage.write("{definitely not json").unwrap();
        let store = ResumeStore::open(storage);
        assert_eq!(store.get(), &ResumeSnapshot::empty());
    }

    #[test]
    fn test_legacy_document_is_migrated_on_open() {
        let storage = MemoryStorage::new();
        storage.write(r#"{"skills": "React, Node, SQL"}"#).unwrap();
        let store = ResumeStore::open(storage);
        assert_eq!(store.get().skills.technical, vec!["React", "Node", "SQL"]);
    }

    #[test]
    fn test_subscriber_sees_persisted_state_on_notify() {
        let storage = MemoryStorage::new();
        let mut store = ResumeStore::open(storage.clone());

        // The backend must already hold the new snapshot by the time a
        // subscriber runs, so derived views can never trail persistence.
        let observed: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let observed_handle = Rc::clone(&observed);
        store.subscribe(move |snapshot| {
            let persisted = storage.read().unwrap().expect("persisted before notify");
            let on_disk: ResumeSnapshot = serde_json::from_str(&persisted).unwrap();
            assert_eq!(&on_disk, snapshot);
            observed_handle.borrow_mut().push(snapshot.personal.name.clone());
        });

        store.load_sample().unwrap();
        store.reset().unwrap();
        assert_eq!(*observed.borrow(), vec!["Anika Sharma".to_string(), String::new()]);
    }

    #[test]
    fn test_reset_clears_to_empty() {
        let mut store = ResumeStore::open(MemoryStorage::new());
        store.load_sample().unwrap();
        assert!(!store.get().personal.name.is_empty());
        store.reset().unwrap();
        assert_eq!(store.get(), &ResumeSnapshot::empty());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume_snapshot.json");
        let storage = FileStorage::new(&path);

        assert!(storage.read().unwrap().is_none());

        let mut store = ResumeStore::open(FileStorage::new(&path));
        store.load_sample().unwrap();

        let reopened = ResumeStore::open(FileStorage::new(&path));
        assert_eq!(reopened.get(), &ResumeSnapshot::sample());
    }

    #[test]
    fn test_file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("resume.json");
        let storage = FileStorage::new(&path);
        storage.write("{}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{}"));
    }
}
