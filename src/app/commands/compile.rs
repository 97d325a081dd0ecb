//! Compile a ProcessLang program into a prompt file.
//!
//! Linear pipeline: read source, parse, assemble, write. Any I/O failure
//! aborts the run and nothing is written.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{
    AppError, COMPILER_VERSION, DEFAULT_MODULES_DIR, DEFAULT_OUTPUT_FILE, ModuleSource,
    ModuleStatus, assemble_prompt, parse_commands,
};
use crate::ports::ProgramFilesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub program: PathBuf,
    pub output: PathBuf,
    pub modules_dir: PathBuf,
}

impl CompileOptions {
    /// Options for `program` with the default output file and module directory.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            modules_dir: PathBuf::from(DEFAULT_MODULES_DIR),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_modules_dir(mut self, modules_dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = modules_dir.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    /// Path the prompt was written to.
    pub output: PathBuf,
    pub commands: usize,
    pub required_modules: Vec<String>,
    pub included_modules: Vec<String>,
    pub skipped_modules: Vec<String>,
    /// Prompt length in characters, not bytes.
    pub characters: usize,
}

/// Module files resolved against a directory through the filesystem port.
struct ModuleDirectory<'a, F: ProgramFilesystem> {
    filesystem: &'a F,
    dir: &'a Path,
}

impl<F: ProgramFilesystem> ModuleSource for ModuleDirectory<'_, F> {
    fn module_exists(&self, module: &str) -> bool {
        self.filesystem.file_exists(&self.dir.join(module))
    }

    fn read_module(&self, module: &str) -> Result<String, AppError> {
        self.filesystem.read_file(&self.dir.join(module))
    }
}

pub fn execute<F: ProgramFilesystem>(
    ctx: &AppContext<F>,
    options: &CompileOptions,
) -> Result<CompileOutcome, AppError> {
    let fs = ctx.filesystem();

    if !fs.file_exists(&options.program) {
        return Err(AppError::ProgramNotFound(options.program.display().to_string()));
    }

    println!("🔧 ProcessLang Compiler v{}", COMPILER_VERSION);
    println!("📄 Compiling: {}", options.program.display());
    println!("📂 Modules from: {}", options.modules_dir.display());
    println!();

    let source = fs.read_file(&options.program)?;
    let parsed = parse_commands(&source);

    println!("✅ Commands found: {}", parsed.commands.len());
    println!("✅ Modules required: {}", parsed.required_modules.len());
    println!();

    println!("📦 Loading modules:");
    let modules = ModuleDirectory { filesystem: fs, dir: &options.modules_dir };
    let prompt =
        assemble_prompt(&parsed.required_modules, &parsed.commands, &modules, |status| {
            match status {
                ModuleStatus::Loaded(module) => println!("   ✓ {}", module),
                ModuleStatus::Missing(module) => println!("   ⚠️  Module not found: {}", module),
            }
        })?;
    println!();

    fs.write_file(&options.output, &prompt.content)?;
    let characters = prompt.content.chars().count();

    println!("💾 Saved: {}", options.output.display());
    println!("📊 Size: {} characters", characters);
    println!();
    println!("✨ Compilation complete!");

    Ok(CompileOutcome {
        output: options.output.clone(),
        commands: parsed.commands.len(),
        required_modules: parsed.required_modules,
        included_modules: prompt.included_modules,
        skipped_modules: prompt.skipped_modules,
        characters,
    })
}
