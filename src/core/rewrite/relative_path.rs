//! Lexical path relativization.
//!
//! Paths are never touched on disk: symlinks are not followed and the files
//! do not need to exist. This matches what a bundler sees when it hands the
//! plugin an absolute filename.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, so `/../a` normalizes to `/a`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                let after_parent =
                    matches!(normalized.components().next_back(), Some(Component::ParentDir));
                if after_parent || (normalized.as_os_str().is_empty() && !path.has_root()) {
                    normalized.push("..");
                } else if !at_root {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Compute the path of `file` relative to `root`.
///
/// Returns `None` when no relative path exists: either input is not absolute,
/// or the two live under different prefixes (e.g. `C:\` and `D:\`).
/// An empty path is returned when `file` and `root` are the same.
pub fn relative_path(root: &Path, file: &Path) -> Option<PathBuf> {
    if !root.is_absolute() || !file.is_absolute() {
        return None;
    }

    let root = normalize(root);
    let file = normalize(file);
    let root_components: Vec<Component> = root.components().collect();
    let file_components: Vec<Component> = file.components().collect();

    // The root-most component is the prefix on Windows and `/` elsewhere
    if root_components.first() != file_components.first() {
        return None;
    }

    let common = root_components
        .iter()
        .zip(file_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..root_components.len() {
        relative.push("..");
    }
    for component in &file_components[common..] {
        relative.push(component.as_os_str());
    }

    Some(relative)
}
