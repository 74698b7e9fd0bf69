use crate::error::SpacetabError;
use crate::options::{ConversionConfig, SpacetabOptions};
use crate::paths::{absolute_path, normalize_separators};
use crate::transform::transform;
use crate::types::{ConversionReport, EntryKind, FileEntry, FileFailure, FileReport, FileStatus};
use crate::walker::Walker;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
/// Lists the entries a run would convert, in the order they would be converted.
///
/// With [`SpacetabOptions::file`] set this resolves exactly that one name inside
/// the root and ignores recursion. Otherwise the root is walked. Entries that
/// could not be resolved are returned as errors in place.
///
/// # Errors
///
/// Fails only if the root path is empty or an ignore pattern does not parse.
pub fn enumerate_entries(
    options: &SpacetabOptions,
) -> Result<Vec<Result<FileEntry, SpacetabError>>, SpacetabError> {
    let root = absolute_path(&options.root, options.forward_slashes)
        .ok_or_else(|| SpacetabError::InvalidPath(options.root.display().to_string()))?;
    match &options.file {
        Some(name) => {
            let path = normalize_separators(&root.join(name), options.forward_slashes);
            Ok(vec![FileEntry::resolve(path)])
        }
        None => Ok(Walker::new(&root, options)?.collect_entries()),
    }
}
/// Converts one file in place.
///
/// Directories, other non-regular entries and zero-byte files are left
/// untouched and reported as [`FileStatus::Empty`]. A file whose bytes would
/// not change is not rewritten. Otherwise the result is written to a temporary
/// file next to the original and renamed over it, so a failed write never
/// truncates the original.
pub fn convert_file(
    entry: &FileEntry,
    config: &ConversionConfig,
) -> Result<FileReport, SpacetabError> {
    let path = &entry.full_path;
    if entry.kind != EntryKind::File || entry.size == 0 {
        return Ok(report(path, FileStatus::Empty, 0, 0));
    }
    let input = fs::read(path).map_err(|e| SpacetabError::read(path, e))?;
    let output = transform(&input, config).map_err(|source| SpacetabError::Transform {
        path: path.clone(),
        source,
    })?;
    if output == input {
        return Ok(report(
            path,
            FileStatus::Unchanged,
            input.len() as u64,
            0,
        ));
    }
    write_atomic(path, &output).map_err(|e| SpacetabError::write(path, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Converted {} ({} -> {} bytes)",
        path.display(),
        input.len(),
        output.len()
    );
    Ok(report(
        path,
        FileStatus::Converted,
        input.len() as u64,
        output.len() as u64,
    ))
}
fn report(path: &Path, status: FileStatus, bytes_read: u64, bytes_written: u64) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        status,
        bytes_read,
        bytes_written,
    }
}
fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    // Symlinks are written through, not replaced.
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let permissions = fs::metadata(&target)?.permissions();
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(data)?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
/// Runs a whole conversion: enumerate, then convert every entry.
///
/// Per-file failures never stop the run; they are collected in
/// [`ConversionReport::failures`].
///
/// # Errors
///
/// Returns [`SpacetabError::NoConversion`] when neither a space mode nor a line
/// mode is selected, before touching the filesystem. Also fails on an invalid
/// root, an invalid ignore pattern, or a thread pool that cannot be built.
pub fn spacetab(options: SpacetabOptions) -> Result<ConversionReport, SpacetabError> {
    if !options.conversion.has_conversion() {
        return Err(SpacetabError::NoConversion);
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting spacetab with root: {}", options.root.display());
    let entries = enumerate_entries(&options)?;
    #[cfg(not(feature = "parallel"))]
    let outcomes = process_entries(entries, &options.conversion);
    #[cfg(feature = "parallel")]
    let outcomes = process_entries_parallel(entries, &options.conversion, options.jobs)?;
    collect_report(outcomes)
}
fn process_entry(
    entry: Result<FileEntry, SpacetabError>,
    config: &ConversionConfig,
) -> Result<FileReport, SpacetabError> {
    convert_file(&entry?, config)
}
#[cfg(not(feature = "parallel"))]
fn process_entries(
    entries: Vec<Result<FileEntry, SpacetabError>>,
    config: &ConversionConfig,
) -> Vec<Result<FileReport, SpacetabError>> {
    entries
        .into_iter()
        .map(|entry| process_entry(entry, config))
        .collect()
}
#[cfg(feature = "parallel")]
fn process_entries_parallel(
    entries: Vec<Result<FileEntry, SpacetabError>>,
    config: &ConversionConfig,
    jobs: Option<usize>,
) -> Result<Vec<Result<FileReport, SpacetabError>>, SpacetabError> {
    let run = move || -> Vec<Result<FileReport, SpacetabError>> {
        entries
            .into_par_iter()
            .map(|entry| process_entry(entry, config))
            .collect()
    };
    match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SpacetabError::ThreadPool(e.to_string()))?;
            Ok(pool.install(run))
        }
        None => Ok(run()),
    }
}
fn collect_report(
    outcomes: Vec<Result<FileReport, SpacetabError>>,
) -> Result<ConversionReport, SpacetabError> {
    let mut report = ConversionReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(file) => report.files.push(file),
            Err(e) => {
                let failure = FileFailure::from_error(&e).ok_or(e)?;
                #[cfg(feature = "logging")]
                tracing::warn!("Skipped: {}", failure.message);
                report.failures.push(failure);
            }
        }
    }
    Ok(report)
}
