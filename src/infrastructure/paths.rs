//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which maps
//! to the directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox path of the host directory.
const HOST_ROOT: &str = "/host";

/// Directory holding the trace file: `/host/.local/share/zellij/stargazer`.
///
/// ```
/// use stargazer::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/stargazer"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/stargazer")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// ```
/// use stargazer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/dusk.toml"), "/etc/dusk.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
