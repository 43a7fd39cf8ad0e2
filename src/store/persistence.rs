//! Persistence backends for the quick action store
//!
//! [`ActionPersistence::update`] is the write path the store uses: load the
//! latest collection, apply one change, save. The JSON backend runs all three
//! under one exclusive file lock, so the GUI and CLI can share a store file
//! without losing each other's changes. A file that cannot be read is never
//! written over.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use crate::atomic_file::{self, FileLock};
use crate::domain::QuickAction;

/// Current on-disk format version
pub const STORE_FILE_VERSION: u32 = 1;

/// Change applied by [`ActionPersistence::update`]: receives the latest
/// persisted actions (`None` if nothing was persisted yet) and returns the
/// collection to save, or `None` to leave storage untouched
pub type ActionChange<'a> = dyn FnMut(Option<Vec<QuickAction>>) -> Option<Vec<QuickAction>> + 'a;

/// Where a store loads from and saves to
pub trait ActionPersistence {
    /// Load the persisted actions; `Ok(None)` when nothing was persisted yet
    fn load(&self) -> Result<Option<Vec<QuickAction>>, StoreError>;

    /// Replace the persisted actions
    fn save(&self, actions: &[QuickAction]) -> Result<(), StoreError>;

    /// Read-modify-write. `change` is not called when loading fails.
    fn update(&self, change: &mut ActionChange<'_>) -> Result<(), StoreError> {
        let latest = self.load()?;
        match change(latest) {
            Some(actions) => self.save(&actions),
            None => Ok(()),
        }
    }

    /// Human readable location for logs and status lines
    fn describe(&self) -> String;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    actions: Vec<QuickAction>,
}

/// Pretty-printed JSON file backend
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<FileLock, StoreError> {
        atomic_file::ensure_parent(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        FileLock::acquire(&self.path).map_err(|source| StoreError::Lock {
            path: atomic_file::sibling(&self.path, "lock"),
            source,
        })
    }

    fn write(&self, lock: &FileLock, actions: &[QuickAction]) -> Result<(), StoreError> {
        let file = StoreFile {
            version: STORE_FILE_VERSION,
            actions: actions.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        atomic_file::replace(lock, &self.path, content.as_bytes())
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

impl ActionPersistence for JsonFileBackend {
    fn load(&self) -> Result<Option<Vec<QuickAction>>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let file: StoreFile = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if file.version > STORE_FILE_VERSION {
            return Err(StoreError::UnsupportedVersion(file.version));
        }

        Ok(Some(file.actions))
    }

    fn save(&self, actions: &[QuickAction]) -> Result<(), StoreError> {
        let lock = self.lock()?;
        self.write(&lock, actions)
    }

    fn update(&self, change: &mut ActionChange<'_>) -> Result<(), StoreError> {
        let lock = self.lock()?;
        let latest = self.load()?;
        match change(latest) {
            Some(actions) => self.write(&lock, &actions),
            None => Ok(()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    saved: RefCell<Option<Vec<QuickAction>>>,
    save_count: RefCell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds persisted actions
    pub fn with_actions(actions: Vec<QuickAction>) -> Self {
        Self {
            saved: RefCell::new(Some(actions)),
            save_count: RefCell::new(0),
        }
    }

    pub fn saved(&self) -> Option<Vec<QuickAction>> {
        self.saved.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }
}

impl ActionPersistence for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<QuickAction>>, StoreError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, actions: &[QuickAction]) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(actions.to_vec());
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl<P: ActionPersistence + ?Sized> ActionPersistence for std::rc::Rc<P> {
    fn load(&self) -> Result<Option<Vec<QuickAction>>, StoreError> {
        (**self).load()
    }

    fn save(&self, actions: &[QuickAction]) -> Result<(), StoreError> {
        (**self).save(actions)
    }

    fn update(&self, change: &mut ActionChange<'_>) -> Result<(), StoreError> {
        (**self).update(change)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
