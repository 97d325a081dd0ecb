//! processlang: assemble ProcessLang programs and their modules into a single AI prompt.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{CompileOptions, CompileOutcome, compile};
pub use domain::{AppError, AssembledPrompt, ParsedProgram, assemble_prompt, parse_commands};
