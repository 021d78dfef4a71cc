//! Recursive font discovery with symlink-cycle protection.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, warn};

/// File extensions (lowercase, no dot) accepted as font candidates.
pub const FONT_EXTENSIONS: [&str; 7] = ["ttf", "otf", "woff", "woff2", "fon", "pfb", "fnt"];

/// Collect every font file reachable from `root`, following symlinks.
///
/// The walk is depth-first and visits each real directory at most once:
/// directories are canonicalized before descent and remembered in a visited
/// set, so symlink cycles terminate. Per-entry failures (permissions, broken
/// links) are logged and skipped; a failure to read `root` itself yields an
/// empty list. Results follow filesystem enumeration order.
pub fn locate(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut visited = HashSet::new();
    locate_in(root.as_ref(), &mut visited)
}

/// One level of the walk, sharing the visited set across the call tree.
/// A directory that cannot be resolved or read contributes nothing.
fn locate_in(dir: &Path, visited: &mut HashSet<PathBuf>) -> Vec<PathBuf> {
    match walk(dir, visited) {
        Ok(found) => found,
        Err(err) => {
            error!("error scanning fonts under {}: {err:#}", dir.display());
            Vec::new()
        }
    }
}

fn walk(dir: &Path, visited: &mut HashSet<PathBuf>) -> Result<Vec<PathBuf>> {
    let real_dir =
        fs::canonicalize(dir).with_context(|| format!("resolving directory {}", dir.display()))?;

    // Insert before descending: each real directory is entered at most once,
    // which bounds the walk even when symlinks form cycles.
    if !visited.insert(real_dir.clone()) {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&real_dir)
        .with_context(|| format!("reading directory {}", real_dir.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping entry in {}: {err}", real_dir.display());
                continue;
            }
        };

        let path = entry.path();
        if let Err(err) = visit(&path, visited, &mut found) {
            warn!("Skipping {}: {err:#}", path.display());
        }
    }

    Ok(found)
}

fn visit(path: &Path, visited: &mut HashSet<PathBuf>, found: &mut Vec<PathBuf>) -> Result<()> {
    let meta =
        fs::symlink_metadata(path).with_context(|| format!("stat {}", path.display()))?;

    if meta.file_type().is_symlink() {
        let target = fs::canonicalize(path)
            .with_context(|| format!("resolving symlink {}", path.display()))?;
        let target_meta = fs::symlink_metadata(&target)
            .with_context(|| format!("stat {}", target.display()))?;

        if target_meta.is_dir() {
            found.extend(locate_in(&target, visited));
        } else if target_meta.is_file() && is_font(path) {
            // Extension check uses the link's name; the recorded path is the
            // resolved target.
            found.push(target);
        }
    } else if meta.is_dir() {
        found.extend(locate_in(path, visited));
    } else if meta.is_file() && is_font(path) {
        found.push(path.to_path_buf());
    }

    Ok(())
}

/// Case-insensitive extension check against [`FONT_EXTENSIONS`].
pub fn is_font(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    FONT_EXTENSIONS.contains(&ext.as_str())
}
