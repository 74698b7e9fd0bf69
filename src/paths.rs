//! Path resolution for the starting directory and enumerated entries.

use std::env;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Resolves `input` against the current working directory.
///
/// Paths starting with `/` or `\`, or carrying a drive letter (`C:`), count as
/// absolute and are returned verbatim. Everything else is joined onto the
/// working directory and its separators normalized with [`normalize_separators`].
/// Returns `None` for an empty path or an unreadable working directory.
pub fn absolute_path(input: &Path, forward_slashes: bool) -> Option<PathBuf> {
    let raw = input.to_string_lossy();
    if raw.is_empty() {
        return None;
    }
    if is_absolute_like(&raw) {
        return Some(input.to_path_buf());
    }
    let cwd = env::current_dir().ok()?;
    Some(normalize_separators(&cwd.join(input), forward_slashes))
}

/// Rewrites separators to `/` when `forward_slashes` is set, otherwise to the
/// platform's own separator. Paths that are not valid UTF-8 are returned as is.
pub fn normalize_separators(path: &Path, forward_slashes: bool) -> PathBuf {
    let (from, to) = if forward_slashes {
        ('\\', '/')
    } else {
        ('/', MAIN_SEPARATOR)
    };
    match path.to_str() {
        Some(raw) if from != to && raw.contains(from) => {
            PathBuf::from(raw.replace(from, &to.to_string()))
        }
        _ => path.to_path_buf(),
    }
}

fn is_absolute_like(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    matches!(bytes.first(), Some(b'/' | b'\\')) || bytes.get(1) == Some(&b':')
}
