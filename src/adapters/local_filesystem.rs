//! `ProgramFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ProgramFilesystem;

/// Local disk, paths resolved against the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl ProgramFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path)
            .map_err(|err| AppError::read_failed(path.display().to_string(), err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)
            .map_err(|err| AppError::write_failed(path.display().to_string(), err))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
