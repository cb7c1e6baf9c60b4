//! Output file naming for generated diagrams.

use std::path::{Path, PathBuf};

/// Diagram file name for an application: the application name with `/`
/// replaced by `-`, suffixed `-no-ports` when labeling was disabled.
pub fn file_name(app_name: &str, include_ports: bool) -> String {
    let base = app_name.replace('/', "-");
    if include_ports {
        format!("{base}.dot")
    } else {
        format!("{base}-no-ports.dot")
    }
}

/// Full output path for an application's diagram.
pub fn output_path(dir: &str, app_name: &str, include_ports: bool) -> PathBuf {
    Path::new(dir).join(file_name(app_name, include_ports))
}
