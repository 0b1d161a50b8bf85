//! Helper functions for test setup and common operations

use std::path::Path;
use std::process::Command;

/// Check if the git executable is available on the system
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Assert two paths are equal after canonicalization.
///
/// This is necessary on macOS where `/var` is a symlink to `/private/var`,
/// causing path comparisons to fail unexpectedly.
pub fn assert_paths_eq(left: &Path, right: &Path, msg: &str) {
    let left_canonical = left.canonicalize().unwrap_or_else(|_| left.to_path_buf());
    let right_canonical = right.canonicalize().unwrap_or_else(|_| right.to_path_buf());
    assert_eq!(left_canonical, right_canonical, "{msg}");
}
