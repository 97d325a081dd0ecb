pub mod assembly;
pub mod command_table;
pub mod config;
pub mod error;
pub mod program;
pub mod text;

pub use assembly::{AssembledPrompt, ModuleSource, ModuleStatus, SEPARATOR, assemble_prompt};
pub use command_table::{
    COMMAND_TABLE, COMMENT_MARKER, CommandKeyword, QUERY_MARKER, match_keyword,
};
pub use config::{COMPILER_VERSION, DEFAULT_MODULES_DIR, DEFAULT_OUTPUT_FILE};
pub use error::AppError;
pub use program::{ParsedProgram, parse_commands};
pub use text::{normalize_newlines, trim_line};
