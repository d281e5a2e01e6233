//! Error types for modsize

use std::io;
use std::path::PathBuf;

/// Everything that can stop a size report from being produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dependency root to scan does not exist.
    #[error("The folder \"{}\" does not exist.", .0.display())]
    MissingRoot(PathBuf),

    /// The project manifest is absent.
    #[error("package.json not found in the current directory.")]
    MissingManifest(PathBuf),

    /// The threshold flag did not parse as a number in [0, 100].
    #[error("Invalid value for --min-percentage. It should be a number between 0 and 100.")]
    InvalidThreshold(String),

    /// Listing a directory or reading an entry failed mid-walk.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the report failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    /// A package.json could not be parsed.
    #[error("invalid manifest '{}': {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_message_names_folder() {
        let err = Error::MissingRoot(PathBuf::from("/tmp/project/node_modules"));
        assert_eq!(
            err.to_string(),
            "The folder \"/tmp/project/node_modules\" does not exist."
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io(
            "node_modules/broken",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("node_modules/broken"), "got: {}", msg);
        assert!(msg.contains("denied"), "got: {}", msg);
        assert!(std::error::Error::source(&err).is_some());
    }
}
