use std::path::{Path, PathBuf};

use proptest::prelude::*;

use unglue::fs::mock::MockFileSystem;
use unglue::watch::{build_initial_map, detect_changes, DiscoveryOptions};

/// A folder with `count` stylesheets: `site/s0.scss`, `site/s1.scss`, ...
fn fs_with_stylesheets(count: usize) -> MockFileSystem {
    let fs = MockFileSystem::new();
    for i in 0..count {
        fs.add_file(format!("site/s{i}.scss"), format!(".s{i} {{}}"));
    }
    fs
}

proptest! {
    #[test]
    fn untouched_sets_stay_unchanged(count in 1usize..12) {
        let fs = fs_with_stylesheets(count);
        let set = build_initial_map(&fs, Path::new("site"), "scss", Vec::<PathBuf>::new(), DiscoveryOptions::default()).unwrap();

        let report = detect_changes(&fs, &set);
        prop_assert!(!report.has_changes());
        prop_assert_eq!(report.set, set);
    }

    #[test]
    fn exactly_the_touched_files_are_reported(
        count in 1usize..12,
        touched in proptest::collection::btree_set(0usize..12, 0..6),
    ) {
        let fs = fs_with_stylesheets(count);
        let set = build_initial_map(&fs, Path::new("site"), "scss", Vec::<PathBuf>::new(), DiscoveryOptions::default()).unwrap();

        let touched: Vec<PathBuf> = touched
            .into_iter()
            .filter(|i| *i < count)
            .map(|i| PathBuf::from(format!("site/s{i}.scss")))
            .collect();
        for path in &touched {
            fs.touch(path);
        }

        let report = detect_changes(&fs, &set);
        let mut changed = report.changed.clone();
        changed.sort();
        let mut expected = touched.clone();
        expected.sort();

        prop_assert_eq!(changed, expected);
        prop_assert_eq!(report.set.len(), set.len());
        for entry in set.iter() {
            let refreshed = report.set.get(&entry.path).unwrap();
            if touched.contains(&entry.path) {
                prop_assert!(refreshed > entry.last_modified);
            } else {
                prop_assert_eq!(refreshed, entry.last_modified);
            }
        }

        // Committing the report makes the next pass quiet.
        prop_assert!(!detect_changes(&fs, &report.set).has_changes());
    }
}
