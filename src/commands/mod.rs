//! Command implementations

mod validate_directory;
mod validate_file;

pub use validate_directory::validate_directory;
pub use validate_file::validate_file;
