use spacetab::{
    ConversionConfig, EntryKind, FailureKind, FileEntry, FileStatus, LineMode, SpaceMode,
    SpacetabBuilder, SpacetabError, convert_file, enumerate_entries, output, spacetab,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn tabs_builder(root: &Path) -> SpacetabBuilder {
    SpacetabBuilder::new(root)
        .space_mode(SpaceMode::SpacesToTabs)
        .spaces_per_tab(4)
}
#[test]
fn integration_top_level_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "    a\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "    b\n").unwrap();
    let report = spacetab(tabs_builder(dir.path()).build()).unwrap();
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"\ta\n");
    assert_eq!(fs::read(dir.path().join("sub/b.txt")).unwrap(), b"    b\n");
    assert_eq!(report.count(FileStatus::Converted), 1);
    assert!(!report.has_failures());
}
#[test]
fn integration_recursive() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
    fs::write(dir.path().join("a.txt"), "a\n").unwrap();
    fs::write(dir.path().join("sub/b.txt"), "b\n").unwrap();
    fs::write(dir.path().join("sub/deeper/c.txt"), "c\r\n").unwrap();
    let options = SpacetabBuilder::new(dir.path())
        .recursive(true)
        .line_mode(LineMode::ToDos)
        .build();
    let report = spacetab(options).unwrap();
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"a\r\n");
    assert_eq!(fs::read(dir.path().join("sub/b.txt")).unwrap(), b"b\r\n");
    assert_eq!(fs::read(dir.path().join("sub/deeper/c.txt")).unwrap(), b"c\r\n");
    assert_eq!(report.count(FileStatus::Converted), 2);
    assert_eq!(report.count(FileStatus::Unchanged), 1);
}
#[test]
fn integration_single_file_ignores_recursion() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "\tone\n").unwrap();
    fs::write(dir.path().join("two.txt"), "\ttwo\n").unwrap();
    let options = SpacetabBuilder::new(dir.path())
        .file(Some("one.txt".into()))
        .recursive(true)
        .space_mode(SpaceMode::TabsToSpaces)
        .spaces_per_tab(2)
        .build();
    let report = spacetab(options).unwrap();
    assert_eq!(fs::read(dir.path().join("one.txt")).unwrap(), b"  one\n");
    assert_eq!(fs::read(dir.path().join("two.txt")).unwrap(), b"\ttwo\n");
    assert_eq!(report.files.len(), 1);
}
#[test]
fn integration_missing_single_file_is_skipped() {
    let dir = tempdir().unwrap();
    let options = tabs_builder(dir.path())
        .file(Some("absent.txt".into()))
        .build();
    let report = spacetab(options).unwrap();
    assert!(report.files.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::PathResolution);
    assert!(report.failures[0].path.as_ref().unwrap().ends_with("absent.txt"));
}
#[test]
fn integration_single_directory_is_noop() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    let options = tabs_builder(dir.path())
        .file(Some("nested".into()))
        .build();
    let report = spacetab(options).unwrap();
    assert_eq!(report.count(FileStatus::Empty), 1);
}
#[test]
fn integration_missing_root_does_not_abort() {
    let dir = tempdir().unwrap();
    let options = tabs_builder(&dir.path().join("nowhere")).build();
    let report = spacetab(options).unwrap();
    assert!(report.files.is_empty());
}
#[test]
fn integration_empty_file_untouched() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    let report = spacetab(tabs_builder(dir.path()).build()).unwrap();
    assert_eq!(report.count(FileStatus::Empty), 1);
    assert!(fs::read(dir.path().join("empty.txt")).unwrap().is_empty());
}
#[test]
fn integration_hidden_files_included() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden"), "    h").unwrap();
    spacetab(tabs_builder(dir.path()).build()).unwrap();
    assert_eq!(fs::read(dir.path().join(".hidden")).unwrap(), b"\th");
}
#[test]
fn integration_ignore_patterns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "    a").unwrap();
    fs::write(dir.path().join("b.log"), "    b").unwrap();
    let options = tabs_builder(dir.path())
        .ignore_patterns(vec!["*.log".into()])
        .build();
    let report = spacetab(options).unwrap();
    assert_eq!(report.files.len(), 1);
    assert!(report.files[0].path.ends_with("a.txt"));
    assert_eq!(fs::read(dir.path().join("b.log")).unwrap(), b"    b");
}
#[test]
fn integration_invalid_pattern_is_fatal() {
    let dir = tempdir().unwrap();
    let options = tabs_builder(dir.path())
        .ignore_patterns(vec!["[".into()])
        .build();
    assert!(matches!(
        spacetab(options),
        Err(SpacetabError::InvalidPattern(_))
    ));
}
#[test]
fn integration_no_conversion_selected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "    a").unwrap();
    let options = SpacetabBuilder::new(dir.path()).build();
    assert!(matches!(spacetab(options), Err(SpacetabError::NoConversion)));
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"    a");
}
#[test]
fn integration_enumeration_sorted_files_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("c.txt"), "c").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/inner.txt"), "inner").unwrap();
    let entries = enumerate_entries(&tabs_builder(dir.path()).build()).unwrap();
    let names: Vec<_> = entries
        .into_iter()
        .map(|e| e.unwrap())
        .inspect(|e| assert_eq!(e.kind, EntryKind::File))
        .map(|e| (e.name, e.size))
        .collect();
    assert_eq!(names, vec![("a.txt".to_string(), 1), ("c.txt".to_string(), 1)]);
}
#[test]
fn integration_parallel_jobs() {
    let dir = tempdir().unwrap();
    for i in 0..16 {
        fs::write(dir.path().join(format!("f{:02}.txt", i)), "\tx\n").unwrap();
    }
    let options = SpacetabBuilder::new(dir.path())
        .space_mode(SpaceMode::TabsToSpaces)
        .line_mode(LineMode::ToDos)
        .jobs(Some(2))
        .build();
    let report = spacetab(options).unwrap();
    assert_eq!(report.count(FileStatus::Converted), 16);
    assert!(report.files[0].path.ends_with("f00.txt"));
    assert!(report.files[15].path.ends_with("f15.txt"));
    assert_eq!(fs::read(dir.path().join("f07.txt")).unwrap(), b"    x\r\n");
}
#[test]
fn integration_report_formats() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "    a\n").unwrap();
    fs::write(dir.path().join("b.txt"), "b\n").unwrap();
    let report = spacetab(tabs_builder(dir.path()).build()).unwrap();
    let text = output::format_report(&report, output::OutputFormat::Text, false);
    assert!(text.contains("a.txt"));
    assert!(text.contains("1 converted, 1 unchanged, 0 empty, 0 failed"));
    let json = output::format_report(&report, output::OutputFormat::Json, true);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["files"].as_array().unwrap().len(), 2);
    assert_eq!(value["files"][0]["status"], "converted");
    assert_eq!(value["files"][0]["bytes_written"], 3);
}
#[cfg(unix)]
#[test]
fn integration_permissions_preserved() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sh");
    fs::write(&path, "    echo hi\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o750)).unwrap();
    spacetab(tabs_builder(dir.path()).build()).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"\techo hi\n");
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o750);
}
#[cfg(unix)]
#[test]
fn integration_symlink_written_through() {
    let dir = tempdir().unwrap();
    let target_dir = tempdir().unwrap();
    let target = target_dir.path().join("real.txt");
    fs::write(&target, "    r").unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();
    spacetab(tabs_builder(dir.path()).build()).unwrap();
    assert!(
        fs::symlink_metadata(dir.path().join("link.txt"))
            .unwrap()
            .file_type()
            .is_symlink()
    );
    assert_eq!(fs::read(&target).unwrap(), b"\tr");
}
#[test]
fn integration_read_failure_is_per_file() {
    let dir = tempdir().unwrap();
    let entry = FileEntry {
        name: "gone.txt".into(),
        full_path: dir.path().join("gone.txt"),
        kind: EntryKind::File,
        size: 1,
    };
    let config = ConversionConfig {
        space_mode: SpaceMode::SpacesToTabs,
        ..Default::default()
    };
    let err = convert_file(&entry, &config).unwrap_err();
    assert!(matches!(err, SpacetabError::Read { .. }));
    assert_eq!(err.failure_kind(), Some(FailureKind::Read));
}
#[test]
fn integration_oversized_expansion_is_per_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "\ta\n").unwrap();
    fs::write(dir.path().join("b.txt"), "b\n").unwrap();
    let options = SpacetabBuilder::new(dir.path())
        .space_mode(SpaceMode::TabsToSpaces)
        .spaces_per_tab(usize::MAX)
        .line_mode(LineMode::ToDos)
        .build();
    let report = spacetab(options).unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Transform);
    assert_eq!(fs::read(dir.path().join("a.txt")).unwrap(), b"\ta\n");
    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"b\r\n");
}
#[cfg(unix)]
#[test]
fn integration_write_failure_keeps_original() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("a.txt"), "    a\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();
    // Permission bits do not bind a privileged user.
    if fs::write(locked.join("write-check"), "").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let report = spacetab(tabs_builder(&locked).build());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();
    assert!(report.files.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Write);
    assert_eq!(fs::read(locked.join("a.txt")).unwrap(), b"    a\n");
}
