//! Prompt assembly: module texts, separator, then the command section.

use crate::domain::AppError;
use crate::domain::text::normalize_newlines;

/// Separator part placed between the module texts and the commands.
///
/// Parts are newline-joined, so this renders as a `---` line wrapped in
/// blank lines.
pub const SEPARATOR: &str = "\n---\n";

/// Abstraction for module text lookup.
pub trait ModuleSource {
    /// Whether the named module file is present.
    fn module_exists(&self, module: &str) -> bool;

    /// Read the full text of a module that is present.
    fn read_module(&self, module: &str) -> Result<String, AppError>;
}

/// Per-module outcome reported while assembling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus<'a> {
    Loaded(&'a str),
    Missing(&'a str),
}

/// Result of prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    /// The fully assembled prompt text.
    pub content: String,

    /// Modules whose text was included, in order.
    pub included_modules: Vec<String>,

    /// Modules skipped because they were not found.
    pub skipped_modules: Vec<String>,
}

/// Assemble the prompt for the given modules and commands.
///
/// Module text is included as-is apart from line endings, which are
/// normalized to `\n`. A missing module is skipped without a placeholder and
/// reported through `report`; a module that exists but cannot be read aborts
/// assembly.
pub fn assemble_prompt<S, F>(
    required_modules: &[String],
    commands: &[String],
    source: &S,
    mut report: F,
) -> Result<AssembledPrompt, AppError>
where
    S: ModuleSource + ?Sized,
    F: FnMut(ModuleStatus<'_>),
{
    let mut parts = Vec::with_capacity(required_modules.len() + 2);
    let mut included_modules = Vec::new();
    let mut skipped_modules = Vec::new();

    for module in required_modules {
        if !source.module_exists(module) {
            report(ModuleStatus::Missing(module.as_str()));
            skipped_modules.push(module.clone());
            continue;
        }

        let text = source.read_module(module)?;
        parts.push(normalize_newlines(&text).into_owned());
        report(ModuleStatus::Loaded(module.as_str()));
        included_modules.push(module.clone());
    }

    parts.push(SEPARATOR.to_string());
    parts.push(commands.join("\n"));

    Ok(AssembledPrompt { content: parts.join("\n"), included_modules, skipped_modules })
}
