//! Filesystem operations used by a compile run.
//!
//! A run touches three kinds of files: the program it reads, the module
//! files it reads, and the prompt it writes. Each call opens, fully reads or
//! writes, and closes its file before returning.

use std::path::Path;

use crate::domain::AppError;

/// Port for whole-file text I/O.
pub trait ProgramFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, replacing any existing content.
    ///
    /// Parent directories are not created.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &Path) -> bool;
}
