//! Dependency locator
//!
//! Node-style lookup of a file shipped by an npm package: probe
//! `<dir>/node_modules/<dependency>/<file>` for `dir` = start directory and
//! then every ancestor, up to and including the filesystem root.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

/// Find `node_modules/<dependency>/<file>` starting at `start`.
///
/// `start` should be absolute; a relative start only walks its own lexical
/// ancestors. The walk ends when `Path::parent` runs out, so the root is
/// probed exactly once.
pub fn find_dependency_file<F: FileSystem + ?Sized>(
    fs: &F,
    start: &Path,
    dependency: &str,
    file: &str,
) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        let candidate = dir.join("node_modules").join(dependency).join(file);
        fs.exists(&candidate).then_some(candidate)
    })
}
