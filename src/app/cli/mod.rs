//! CLI Adapter.

use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, CompileOptions};
use crate::domain::{
    AppError, COMMAND_TABLE, COMPILER_VERSION, DEFAULT_MODULES_DIR, DEFAULT_OUTPUT_FILE,
};

#[derive(Parser)]
#[command(name = "processlang")]
#[command(version)]
#[command(
    about = "Assemble a ProcessLang program and its modules into a single AI prompt",
    long_about = None
)]
struct Cli {
    /// ProcessLang program file
    program: Option<PathBuf>,
    /// Output file for the compiled prompt [default: compiled_prompt.txt]
    output: Option<PathBuf>,
    /// Anything after the output file is ignored
    #[arg(trailing_var_arg = true, hide = true)]
    _extra: Vec<OsString>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let Some(program) = cli.program else {
        print_usage();
        std::process::exit(1);
    };

    let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
    let options = CompileOptions::new(program).with_output(output);

    match api::compile(&options) {
        Ok(_) => {}
        Err(AppError::ProgramNotFound(path)) => {
            println!("❌ File not found: {}", path);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Compilation error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("   Caused by: {}", cause);
                source = cause.source();
            }
            eprintln!("   Details: {:?}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("🔧 ProcessLang Compiler v{}", COMPILER_VERSION);
    println!();
    println!("Usage:");
    println!("  processlang <program.txt> [output.txt]");
    println!();
    println!("Example:");
    println!("  processlang programs/karma.txt compiled_karma.txt");
    println!();
    println!("Directory structure:");
    println!("  project/");
    println!("  ├── {}/", DEFAULT_MODULES_DIR);
    for (i, entry) in COMMAND_TABLE.iter().enumerate() {
        let branch = if i + 1 == COMMAND_TABLE.len() { "└──" } else { "├──" };
        println!("  │   {} {}", branch, entry.module);
    }
    println!("  └── programs/");
    println!("      └── karma.txt");
}
