//! API Facade for the application.
//!
//! Glues together context creation and command execution.

use crate::adapters::LocalFilesystem;
use crate::app::{AppContext, commands::compile};

pub use crate::app::commands::compile::{CompileOptions, CompileOutcome};
pub use crate::domain::AppError;

/// Create an `AppContext` on the local filesystem.
fn create_context() -> AppContext<LocalFilesystem> {
    AppContext::new(LocalFilesystem)
}

/// Compile a ProcessLang program into a prompt file.
///
/// Relative paths in `options` resolve against the current working directory.
pub fn compile(options: &CompileOptions) -> Result<CompileOutcome, AppError> {
    let ctx = create_context();
    compile::execute(&ctx, options)
}
