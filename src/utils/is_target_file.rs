use std::path::Path;

use crate::classify::SourceExtension;

/// Source extension of `path` if its file name ends with one of `extensions`.
///
/// Longer suffixes are tried first so `.jsx` is never mistaken for `.js`.
/// Matching is case-sensitive and a bare `.js` file name does not count.
pub fn source_extension(path: &Path, extensions: &[SourceExtension]) -> Option<SourceExtension> {
    let name = path.file_name()?.to_str()?;
    let mut candidates = extensions.to_vec();
    candidates.sort_by_key(|ext| std::cmp::Reverse(ext.suffix().len()));
    candidates
        .into_iter()
        .find(|ext| name.len() > ext.suffix().len() && name.ends_with(ext.suffix()))
}
