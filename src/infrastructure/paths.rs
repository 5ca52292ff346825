//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`,
//! which usually corresponds to the directory Zellij was started from (most
//! often the user's home directory).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// File name of the OTLP trace export.
const TRACE_FILE_NAME: &str = "draftboard-otlp.json";

/// Returns the data directory for Draftboard files.
///
/// Resolves to `/host/.local/share/zellij/draftboard` in the sandbox, i.e.
/// `~/.local/share/zellij/draftboard` on the host.
///
/// # Examples
///
/// ```
/// use draftboard::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/draftboard"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("draftboard")
}

/// Path of the trace file inside [`data_dir`].
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to the `/host` prefix of the sandbox.
///
/// # Examples
///
/// ```
/// use draftboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
