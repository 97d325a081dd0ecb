//! Fixed defaults for a compile run.
//!
//! There is no configuration file and no environment lookup; callers that need
//! other locations pass them through `CompileOptions`.

/// Module directory, resolved against the working directory.
pub const DEFAULT_MODULES_DIR: &str = "modules";

/// Output file written when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "compiled_prompt.txt";

/// Version shown in the compiler banner, `major.minor`.
pub const COMPILER_VERSION: &str =
    concat!(env!("CARGO_PKG_VERSION_MAJOR"), ".", env!("CARGO_PKG_VERSION_MINOR"));
