use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// How deep below the root the walker descends by default.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Collects every regular file reachable from `root`, at most `max_depth`
/// levels down, in depth-first listing order.
///
/// A depth of zero yields nothing, whatever `root` is. Hidden files and
/// `.gitignore` rules are not honoured: every entry is visited. When `sort`
/// is set each directory is listed by file name, otherwise the order is
/// whatever the filesystem returns.
pub fn find_files(root: &Path, max_depth: usize, sort: bool) -> Result<Vec<PathBuf>> {
    if max_depth == 0 {
        return Ok(Vec::new());
    }

    if !root.is_dir() {
        bail!("Source root is not a directory: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(max_depth));

    if sort {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut files = Vec::new();

    for result in builder.build() {
        let entry =
            result.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

        // depth 0 is the root itself
        if entry.depth() == 0 {
            continue;
        }

        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            debug!("Found file: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
