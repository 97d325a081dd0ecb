//! Text normalization shared by the program scan and module loading.

use std::borrow::Cow;

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// Applied to program text and to module text, so files saved with Windows or
/// classic Mac line endings assemble the same as Unix ones.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Trim surrounding whitespace from a program line.
///
/// Besides Unicode whitespace this also strips the ASCII file, group, record
/// and unit separators (`\x1c`..=`\x1f`).
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
