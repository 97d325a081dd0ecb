//! Keyword-to-module table for ProcessLang commands.
//!
//! Each command keyword pulls exactly one module file into the assembled
//! prompt. Table order is match order: a line is tested against the entries
//! top to bottom and the first prefix match wins.

/// Line prefix that marks a comment.
pub const COMMENT_MARKER: char = '#';

/// Line prefix of a free-form query, kept as a command without a module.
pub const QUERY_MARKER: &str = "QUERY:";

/// A command keyword and the module file it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandKeyword {
    pub keyword: &'static str,
    pub module: &'static str,
}

impl CommandKeyword {
    pub(crate) const fn new(keyword: &'static str, module: &'static str) -> Self {
        Self { keyword, module }
    }
}

/// Known commands in match order.
pub const COMMAND_TABLE: &[CommandKeyword] = &[
    CommandKeyword::new("FLOW", "FluidCore.txt"),
    CommandKeyword::new("CONNECT", "EmergentConnection.txt"),
    CommandKeyword::new("DISSOLVE", "FormDissolution.txt"),
    CommandKeyword::new("OBSERVE", "SelfObservation.txt"),
    CommandKeyword::new("CYCLE", "EternalCycle.txt"),
    CommandKeyword::new("MANIFEST", "ManifestationEngine.txt"),
    CommandKeyword::new("ENCODE", "EncodingSystem.txt"),
    CommandKeyword::new("COLLAPSE", "ChoiceMechanism.txt"),
    CommandKeyword::new("RULE", "LogicSimulator.txt"),
    CommandKeyword::new("HABIT", "SubconsciousRuntime.txt"),
];

/// First table entry whose keyword prefixes `line`.
///
/// This is a raw prefix test, so `FLOWING` matches `FLOW`.
pub fn match_keyword(line: &str) -> Option<&'static CommandKeyword> {
    find_keyword(COMMAND_TABLE, line)
}

pub(crate) fn find_keyword<'t>(
    table: &'t [CommandKeyword],
    line: &str,
) -> Option<&'t CommandKeyword> {
    table.iter().find(|entry| line.starts_with(entry.keyword))
}
