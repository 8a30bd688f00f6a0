pub mod check;
pub mod config_loader;
pub mod langs;
pub mod scalars;
pub mod transform;

#[cfg(test)]
mod transform_tests;

use std::path::PathBuf;

/// Failures a command reports before exiting.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize source map: {0}")]
    SourceMap(serde_json::Error),
}

/// Print an error and exit with status 1.
pub fn fail(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

/// Read a source file as UTF-8.
pub fn read_source(path: &std::path::Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Module id passed to the transform: the path as given, with `/` separators.
pub fn module_id(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
