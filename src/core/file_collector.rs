use crate::config::{DEFAULT_CSV_INCLUDE_PATTERNS, SKIPPED_DIRECTORIES};
use crate::core::pattern_matcher::PatternMatcher;
use crate::error::{FileIoError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

fn should_skip_directory(entry: &DirEntry, root: &Path, exclude_matcher: &PatternMatcher) -> bool {
    // The walk root is always entered.
    if entry.depth() == 0 {
        return false;
    }

    let skipped_name = entry
        .file_name()
        .to_str()
        .is_some_and(|name| SKIPPED_DIRECTORIES.contains(&name));

    skipped_name || exclude_matcher.matches_path(relative_to(entry.path(), root))
}

/// Patterns are matched below the walk root, never against its ancestors.
fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn should_include_file(
    path: &Path,
    exclude_matcher: &PatternMatcher,
    include_matcher: &PatternMatcher,
) -> bool {
    include_matcher.matches_path(path) && !exclude_matcher.matches_path(path)
}

/// Expands `paths` into the ordered list of input files.
///
/// Paths that are not directories are kept as given, in order, so a missing
/// file is reported by whatever reads it. Directories are walked recursively
/// in file-name order and contribute the files matching `include` (the
/// default CSV patterns when empty) and not matching `exclude`.
#[instrument(skip(include, exclude))]
pub fn collect_input_files(
    paths: &[PathBuf],
    include: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>> {
    let include_patterns: Vec<String> = if include.is_empty() {
        DEFAULT_CSV_INCLUDE_PATTERNS
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        include.to_vec()
    };

    let include_matcher = PatternMatcher::new(&include_patterns);
    let exclude_matcher = PatternMatcher::new(exclude);

    debug!("Using {} include patterns", include_patterns.len());
    debug!("Using {} exclude patterns", exclude.len());

    let mut all_files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            if !path.exists() {
                warn!("Input not found: {}", path.display());
            }
            all_files.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !(e.file_type().is_dir() && should_skip_directory(e, path, &exclude_matcher))
            });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let failed = e.path().unwrap_or(path.as_path()).to_path_buf();
                match e.into_io_error() {
                    Some(source) => FileIoError::from_io(&failed, source),
                    None => FileIoError::InvalidArgument(format!(
                        "filesystem loop while walking {}",
                        failed.display()
                    )),
                }
            })?;

            if entry.file_type().is_file()
                && should_include_file(
                    relative_to(entry.path(), path),
                    &exclude_matcher,
                    &include_matcher,
                )
            {
                all_files.push(entry.into_path());
            }
        }
    }

    info!("Collected {} input files", all_files.len());
    Ok(all_files)
}

/// Drops every entry that resolves to the same file as `target`.
///
/// Keeps a previous output from being read back as an input when it sits
/// inside a walked directory. Nothing is dropped when `target` does not exist.
pub fn without_file(files: Vec<PathBuf>, target: &Path) -> Vec<PathBuf> {
    let Ok(target) = fs::canonicalize(target) else {
        return files;
    };

    files
        .into_iter()
        .filter(|file| {
            let same = fs::canonicalize(file).is_ok_and(|resolved| resolved == target);
            if same {
                warn!("Skipping {} because it is the output file", file.display());
            }
            !same
        })
        .collect()
}
