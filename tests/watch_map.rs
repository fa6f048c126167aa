use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::tempdir;

use unglue::fs::mock::MockFileSystem;
use unglue::fs::RealFileSystem;
use unglue::watch::{build_initial_map, detect_changes, DiscoveryOptions, SourceFilter};
use unglue_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn no_exclude() -> Vec<PathBuf> {
    Vec::new()
}

fn site_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("site/main.scss", "@import 'vars';");
    fs.add_file("site/partials/_vars.scss", "$c: red;");
    fs.add_file("site/app.js", "console.log(1);");
    fs.add_file("site/layout.js", "/* compiled */");
    fs.add_file("site/readme.md", "# site");
    fs
}

#[test]
fn initial_map_collects_matching_extension_recursively() -> TestResult {
    init_tracing();
    let fs = site_fs();

    let set = build_initial_map(&fs, Path::new("site"), "scss", no_exclude(), DiscoveryOptions::default())?;

    let paths: Vec<&Path> = set.paths().collect();
    assert_eq!(
        paths,
        vec![Path::new("site/main.scss"), Path::new("site/partials/_vars.scss")]
    );
    Ok(())
}

#[test]
fn excluded_paths_are_never_tracked() -> TestResult {
    let fs = site_fs();

    let set = build_initial_map(
        &fs,
        Path::new("site"),
        "js",
        [PathBuf::from("site/layout.js")],
        DiscoveryOptions::default(),
    )?;

    assert_eq!(set.len(), 1);
    assert!(set.contains(Path::new("site/app.js")));
    assert!(!set.contains(Path::new("site/layout.js")));
    Ok(())
}

#[test]
fn missing_root_is_an_error() {
    let fs = MockFileSystem::new();
    let result = build_initial_map(&fs, Path::new("nowhere"), "scss", no_exclude(), DiscoveryOptions::default());
    assert!(result.is_err());
}

#[test]
fn source_filter_rejects_bad_extensions() {
    assert!(SourceFilter::new("sc*ss", no_exclude()).is_err());
    assert!(SourceFilter::new("", no_exclude()).is_err());
    assert!(SourceFilter::new(".scss", no_exclude()).is_ok());
}

#[test]
fn detect_changes_is_a_noop_without_modifications() -> TestResult {
    let fs = site_fs();
    let set = build_initial_map(&fs, Path::new("site"), "scss", no_exclude(), DiscoveryOptions::default())?;

    let report = detect_changes(&fs, &set);

    assert!(!report.has_changes());
    assert!(report.changed.is_empty());
    assert!(report.removed.is_empty());
    assert_eq!(report.set, set);
    Ok(())
}

#[test]
fn detect_changes_refreshes_only_the_touched_entry() -> TestResult {
    let fs = site_fs();
    let set = build_initial_map(&fs, Path::new("site"), "scss", no_exclude(), DiscoveryOptions::default())?;
    let vars = Path::new("site/partials/_vars.scss");
    let main = Path::new("site/main.scss");

    let t1 = fs.touch(vars);
    let report = detect_changes(&fs, &set);

    assert!(report.has_changes());
    assert_eq!(report.changed, vec![vars.to_path_buf()]);
    assert_eq!(report.set.get(vars), Some(t1));
    assert_eq!(report.set.get(main), set.get(main));
    // The input set is left untouched.
    assert_ne!(set.get(vars), Some(t1));
    Ok(())
}

#[test]
fn second_detection_after_commit_reports_nothing() -> TestResult {
    let fs = site_fs();
    let set = build_initial_map(&fs, Path::new("site"), "scss", no_exclude(), DiscoveryOptions::default())?;

    fs.touch("site/main.scss");
    let first = detect_changes(&fs, &set);
    let second = detect_changes(&fs, &first.set);

    assert!(first.has_changes());
    assert!(!second.has_changes());
    assert_eq!(second.set, first.set);
    Ok(())
}

#[test]
fn equal_or_older_timestamps_are_not_changes() -> TestResult {
    let fs = site_fs();
    let set = build_initial_map(&fs, Path::new("site"), "scss", no_exclude(), DiscoveryOptions::default())?;
    let main = Path::new("site/main.scss");
    let stored = set.get(main).ok_or("main.scss not tracked")?;

    fs.set_modified(main, stored);
    assert!(!detect_changes(&fs, &set).has_changes());

    fs.set_modified(main, stored - Duration::from_secs(60));
    let report = detect_changes(&fs, &set);
    assert!(!report.has_changes());
    assert_eq!(report.set.get(main), Some(stored));
    Ok(())
}

#[test]
fn vanished_files_are_dropped_without_marking_a_change() -> TestResult {
    let fs = site_fs();
    let set = build_initial_map(&fs, Path::new("site"), "scss", no_exclude(), DiscoveryOptions::default())?;
    let vars = Path::new("site/partials/_vars.scss");

    unglue::fs::FileSystem::remove_file(&fs, vars)?;
    let report = detect_changes(&fs, &set);

    assert!(!report.has_changes());
    assert_eq!(report.removed, vec![vars.to_path_buf()]);
    assert!(!report.set.contains(vars));
    assert_eq!(report.set.len(), 1);
    Ok(())
}

#[test]
fn real_disk_change_is_detected() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let main = dir.path().join("main.scss");
    fs::create_dir_all(dir.path().join("nested"))?;
    fs::write(&main, "a{}")?;
    fs::write(dir.path().join("nested/_b.scss"), "b{}")?;
    fs::write(dir.path().join("notes.txt"), "x")?;

    let t0 = SystemTime::now() - Duration::from_secs(3600);
    fs::File::options().write(true).open(&main)?.set_modified(t0)?;

    let real = RealFileSystem;
    let set = build_initial_map(&real, dir.path(), "scss", no_exclude(), DiscoveryOptions::default())?;
    assert_eq!(set.len(), 2);
    assert!(!detect_changes(&real, &set).has_changes());

    fs::File::options()
        .write(true)
        .open(&main)?
        .set_modified(t0 + Duration::from_secs(10))?;
    let report = detect_changes(&real, &set);

    assert_eq!(report.changed, vec![main.clone()]);
    Ok(())
}
