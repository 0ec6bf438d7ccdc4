use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::{
    classify::SourceExtension,
    error::Error,
    utils::{is_target_file::source_extension, slash_path::slash_path},
};

/// A file selected for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub extension: SourceExtension,
}

/// Whether any ignore token excludes `path`.
///
/// Plain substring checks on the `/`-separated path string: `/p/`, `p/`,
/// a trailing `/p`, or the whole path equal to `p`. A token that is only part
/// of a directory name (`dist` in `redist/`) still excludes the path.
pub fn is_ignored(path: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns.iter().any(|p| {
        path.contains(&format!("/{p}/"))
            || path.contains(&format!("{p}/"))
            || path.ends_with(&format!("/{p}"))
            || path == p
    })
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), Error> {
    let meta = match std::fs::metadata(root) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(root.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Recursively collect every file under `root` that ends with one of
/// `extensions` and is not excluded by `ignore_patterns`.
///
/// Fails before walking if `root` is not a directory. Hidden entries are
/// skipped and symlinks are not followed. The result is sorted by path.
pub fn discover(
    root: &Path,
    extensions: &[SourceExtension],
    ignore_patterns: &[String],
) -> Result<Vec<Candidate>, Error> {
    validate_root(root)?;

    let mut builder = WalkBuilder::new(root);
    builder.hidden(true);
    builder.ignore(false);
    builder.git_ignore(false);
    builder.git_global(false);
    builder.git_exclude(false);
    builder.parents(false);
    builder.follow_links(false);

    let mut candidates = Vec::new();
    for result in builder.build() {
        let dent = result?;
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = dent.path();
        let Some(extension) = source_extension(path, extensions) else {
            continue;
        };
        if is_ignored(&slash_path(path), ignore_patterns) {
            debug!(path = %path.display(), "ignored");
            continue;
        }
        debug!(path = %path.display(), %extension, "candidate");
        candidates.push(Candidate {
            path: path.to_path_buf(),
            extension,
        });
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}
