//! Domain-specific errors.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration problems detected before any file is touched.
///
/// Each variant maps onto a distinct process exit code.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Source file not found: {}", .0.display())]
    SourceMissing(PathBuf),
    #[error("Could not find an Assemblies directory. Use --assemblies <path>.")]
    NoAssemblies,
    #[error("No Proffix version folders found under Assemblies.")]
    NoVersions,
}

impl DeployError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SourceMissing(_) => 2,
            Self::NoAssemblies => 3,
            Self::NoVersions => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(DeployError::SourceMissing(PathBuf::from("index.html")).exit_code(), 2);
        assert_eq!(DeployError::NoAssemblies.exit_code(), 3);
        assert_eq!(DeployError::NoVersions.exit_code(), 4);
    }

    #[test]
    fn source_missing_names_the_path() {
        let err = DeployError::SourceMissing(PathBuf::from("/tmp/index.html"));
        assert!(err.to_string().contains("index.html"));
        assert!(err.to_string().starts_with("Source file not found: "));
    }
}
