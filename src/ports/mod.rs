mod program_filesystem;

pub use program_filesystem::ProgramFilesystem;
