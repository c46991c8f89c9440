//! Golden file tests for rendered error output
//!
//! The rendered text is documented as stable for developers reading logs.
//! Each `tests/render/*.json` file holds error records; the matching `.snap`
//! file holds the expected rendering.

use std::fs;
use std::path::Path;

use sqlvm_errors::errors::ErrorList;

/// Run all golden tests in a directory
fn run_golden_tests(dir: &str) -> usize {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(dir);

    let mut count = 0;
    for entry in fs::read_dir(&test_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|e| e == "json") {
            run_single_golden_test(&path);
            count += 1;
        }
    }
    count
}

fn run_single_golden_test(path: &Path) {
    let source = fs::read_to_string(path).unwrap();
    let snapshot_path = path.with_extension("snap");
    let expected = fs::read_to_string(&snapshot_path)
        .unwrap_or_else(|e| panic!("missing snapshot {:?}: {}", snapshot_path, e));

    let errors = ErrorList::from_json(&source)
        .unwrap_or_else(|e| panic!("invalid records in {:?}: {}", path, e));
    let rendered = errors.render();

    pretty_assertions::assert_eq!(
        rendered,
        expected.trim_end_matches('\n'),
        "rendering of {:?} changed",
        path
    );
    assert_eq!(rendered, errors.render(), "rendering of {:?} is not stable", path);
}

#[test]
fn golden_render_tests() {
    assert!(run_golden_tests("render") > 0, "no golden files found");
}
