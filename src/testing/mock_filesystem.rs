//! Test double for `ProgramFilesystem`.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::ports::ProgramFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `ProgramFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockFilesystem {
    files: TestFiles,
    calls: Arc<AtomicUsize>,
}

impl MockFilesystem {
    pub fn new(files: TestFiles) -> Self {
        Self { files, calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Number of filesystem calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl ProgramFilesystem for MockFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.record_call();
        let display = path.display().to_string();
        if self.files.unreadable.lock().unwrap().contains(path) {
            return Err(AppError::read_failed(
                display,
                io::Error::new(io::ErrorKind::PermissionDenied, "Mock file unreadable"),
            ));
        }
        self.files.get(path).ok_or_else(|| {
            AppError::read_failed(
                display,
                io::Error::new(io::ErrorKind::NotFound, "Mock file not found"),
            )
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.record_call();
        if self.files.read_only.lock().unwrap().contains(path) {
            return Err(AppError::write_failed(
                path.display().to_string(),
                io::Error::new(io::ErrorKind::PermissionDenied, "Mock file read-only"),
            ));
        }
        self.files.add(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.record_call();
        self.files.files.lock().unwrap().contains_key(path)
    }
}
