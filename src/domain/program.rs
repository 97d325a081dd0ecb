//! Line scan of a ProcessLang program.

use super::command_table::{
    COMMAND_TABLE, COMMENT_MARKER, CommandKeyword, QUERY_MARKER, find_keyword,
};
use super::text::{normalize_newlines, trim_line};

/// Result of scanning a program: the modules it needs and the lines it keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedProgram {
    /// Module files in first-occurrence order, without duplicates.
    pub required_modules: Vec<String>,
    /// Retained command lines, trimmed, in source order.
    pub commands: Vec<String>,
}

impl ParsedProgram {
    fn require(&mut self, module: &str) {
        if !self.required_modules.iter().any(|m| m == module) {
            self.required_modules.push(module.to_string());
        }
    }
}

/// Scan program text line by line.
///
/// Total over any input. `\r\n` and lone `\r` count as line breaks.
/// Blank and `#` lines are skipped. A line starting with
/// a known keyword requires that keyword's module and is kept as a command.
/// A line starting with `QUERY:` is kept as a command as well, independently of
/// the keyword check, so a line matching both is kept twice. Every other line
/// is dropped.
pub fn parse_commands(source: &str) -> ParsedProgram {
    parse_with_table(source, COMMAND_TABLE)
}

pub(crate) fn parse_with_table(source: &str, table: &[CommandKeyword]) -> ParsedProgram {
    let mut parsed = ParsedProgram::default();
    let source = normalize_newlines(source);

    for raw in source.split('\n') {
        let line = trim_line(raw);
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        if let Some(entry) = find_keyword(table, line) {
            parsed.require(entry.module);
            parsed.commands.push(line.to_string());
        }

        if line.starts_with(QUERY_MARKER) {
            parsed.commands.push(line.to_string());
        }
    }

    parsed
}
