//! Destination selection for a version folder.

use crate::domain::model::{DebuggerLayout, Destination, VersionDir};

const DEBUGGER_DIR: &str = "debugger";
const DEBUGGER_INDEX: &str = "index.html";
const DEBUGGER_FILE: &str = "debugger.html";

/// Newer versions ship `debugger/index.html`; older ones a flat `debugger.html`.
pub fn destination_for(version: &VersionDir) -> Destination {
    let folder = version.path.join(DEBUGGER_DIR);
    if folder.is_dir() {
        Destination {
            path: folder.join(DEBUGGER_INDEX),
            layout: DebuggerLayout::Folder,
        }
    } else {
        Destination {
            path: version.path.join(DEBUGGER_FILE),
            layout: DebuggerLayout::SingleFile,
        }
    }
}
