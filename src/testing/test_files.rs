//! Shared in-memory file backing store for test doubles.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file storage shared between a test and the double it seeds.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub(crate) unreadable: Arc<Mutex<HashSet<PathBuf>>>,
    pub(crate) read_only: Arc<Mutex<HashSet<PathBuf>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: impl AsRef<Path>, content: &str) {
        self.files.lock().unwrap().insert(path.as_ref().to_path_buf(), content.to_string());
    }

    /// Make a present file fail on read.
    pub fn add_unreadable(&self, path: impl AsRef<Path>) {
        self.add(path.as_ref(), "");
        self.unreadable.lock().unwrap().insert(path.as_ref().to_path_buf());
    }

    /// Make writes to `path` fail.
    pub fn deny_write(&self, path: impl AsRef<Path>) {
        self.read_only.lock().unwrap().insert(path.as_ref().to_path_buf());
    }

    /// Current content of a file, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}
