//! Lexical path resolution
//!
//! Paths from the build configuration (`webDir`) and the command line are
//! joined onto a base directory and normalized without touching the disk,
//! so `..` segments collapse the same way whether or not the directories
//! exist yet.

use std::path::{Component, Path, PathBuf};

/// Join `path` onto `base` and normalize `.` and `..` lexically.
///
/// An absolute `path` replaces `base`. `..` never climbs above the root.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// The directory `levels` steps above `dir`, stopping at the root.
pub fn ancestor(dir: &Path, levels: usize) -> PathBuf {
    let dir = normalize(dir);
    let mut current = dir.as_path();
    for _ in 0..levels {
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    if current.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        current.to_path_buf()
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_with_parent =
                    matches!(out.components().next_back(), Some(Component::ParentDir));
                if ends_with_parent || (!out.pop() && !out.has_root()) {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative_web_dir() {
        assert_eq!(
            resolve(Path::new("/proj"), Path::new("www")),
            PathBuf::from("/proj/www")
        );
    }

    #[test]
    fn resolve_collapses_parent_segments() {
        assert_eq!(
            resolve(Path::new("/proj/app"), Path::new("../dist/./www")),
            PathBuf::from("/proj/dist/www")
        );
    }

    #[test]
    fn resolve_absolute_replaces_base() {
        assert_eq!(
            resolve(Path::new("/proj"), Path::new("/srv/www")),
            PathBuf::from("/srv/www")
        );
    }

    #[test]
    fn resolve_never_climbs_above_root() {
        assert_eq!(
            resolve(Path::new("/"), Path::new("../../www")),
            PathBuf::from("/www")
        );
    }

    #[test]
    fn ancestor_two_levels_up() {
        assert_eq!(
            ancestor(Path::new("/proj/node_modules/capacitor-pwa-firebase-msg"), 2),
            PathBuf::from("/proj")
        );
    }

    #[test]
    fn ancestor_stops_at_root() {
        assert_eq!(ancestor(Path::new("/a"), 2), PathBuf::from("/"));
        assert_eq!(ancestor(Path::new("/"), 2), PathBuf::from("/"));
    }
}
