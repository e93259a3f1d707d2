//! Path expansion helpers.

use std::path::{Component, Path, PathBuf};

/// Expand a user-supplied path to an absolute path.
///
/// A leading `~` or `~/` is replaced with `home` when one is known. Relative
/// paths are joined onto `cwd`. `.` and `..` components are resolved
/// lexically, without touching the filesystem.
pub fn expand(path: &str, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    };
    normalize(&cwd.join(expanded))
}

/// Resolve `.` and `..` components of an absolute path lexically.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
