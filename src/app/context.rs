use crate::ports::ProgramFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProgramFilesystem> {
    filesystem: F,
}

impl<F: ProgramFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
