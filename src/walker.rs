use crate::error::SpacetabError;
use crate::options::SpacetabOptions;
use crate::paths::normalize_separators;
use crate::types::{EntryKind, FileEntry};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::Path;
/// Enumerates the regular files under a root directory.
///
/// Only direct children are visited unless the conversion is recursive.
/// Hidden files and ignore files are not special unless asked for; every
/// regular file is a candidate.
pub(crate) struct Walker {
    inner: ignore::Walk,
    forward_slashes: bool,
}
impl Walker {
    pub(crate) fn new(root: &Path, options: &SpacetabOptions) -> Result<Self, SpacetabError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .max_depth(if options.conversion.recursive {
                None
            } else {
                Some(1)
            })
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if let Some(matcher) = build_matcher(&options.ignore_patterns)? {
            builder.filter_entry(move |entry| {
                entry.depth() == 0
                    || !(matcher.is_match(entry.path())
                        || matcher.is_match(Path::new(entry.file_name())))
            });
        }
        Ok(Self {
            inner: builder.build(),
            forward_slashes: options.forward_slashes,
        })
    }
    /// Yields every regular file, or the error that kept an entry from being resolved.
    pub(crate) fn into_iter(self) -> impl Iterator<Item = Result<FileEntry, SpacetabError>> {
        let forward_slashes = self.forward_slashes;
        self.inner.filter_map(move |result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => {
                match FileEntry::resolve(normalize_separators(entry.path(), forward_slashes)) {
                    Ok(file) if file.kind == EntryKind::File => Some(Ok(file)),
                    Ok(_) => None,
                    Err(e) => Some(Err(e)),
                }
            }
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk error: {}", e);
                Some(Err(SpacetabError::Walk(e.to_string())))
            }
        })
    }
    pub(crate) fn collect_entries(self) -> Vec<Result<FileEntry, SpacetabError>> {
        self.into_iter().collect()
    }
}
fn build_matcher(patterns: &[String]) -> Result<Option<GlobSet>, SpacetabError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| SpacetabError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| SpacetabError::InvalidPattern(format!("Failed to build glob set: {}", e)))
}
