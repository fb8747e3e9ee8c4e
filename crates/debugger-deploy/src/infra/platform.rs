//! Default install locations of the Proffix REST API per operating system.

use std::env;
use std::path::PathBuf;

const PRODUCT_DIR: &str = "Proffix REST API";
const ASSEMBLIES_DIR: &str = "Assemblies";

/// Operating system family that decides where installations live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Environment inputs consulted when building default locations.
#[derive(Debug, Default, Clone)]
pub struct PlatformEnv {
    pub program_files: Option<PathBuf>,
}

impl PlatformEnv {
    pub fn from_env() -> Self {
        Self {
            program_files: env::var_os("ProgramFiles")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Default Assemblies candidates for `platform`, in probing order.
///
/// Entries may start with `~` and still need home expansion.
pub fn default_assemblies_dirs(platform: Platform, env: &PlatformEnv) -> Vec<PathBuf> {
    match platform {
        Platform::Windows => env
            .program_files
            .iter()
            .map(|base| base.join(PRODUCT_DIR).join(PRODUCT_DIR).join(ASSEMBLIES_DIR))
            .collect(),
        Platform::MacOs => vec![
            PathBuf::from("/Applications")
                .join(PRODUCT_DIR)
                .join(PRODUCT_DIR)
                .join(ASSEMBLIES_DIR),
            PathBuf::from("~/Applications")
                .join(PRODUCT_DIR)
                .join(PRODUCT_DIR)
                .join(ASSEMBLIES_DIR),
        ],
        Platform::Other => vec![
            PathBuf::from("/opt/proffix-rest-api/Assemblies"),
            PathBuf::from("/usr/local/proffix-rest-api/Assemblies"),
        ],
    }
}
