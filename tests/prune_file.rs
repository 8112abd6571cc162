use std::fs;
use std::path::{Path, PathBuf};

use incident_prune::{
    prune_file, ColumnSet, MissingColumnPolicy, PruneError, PruneOptions, Stage,
};
use tempfile::TempDir;

/// Helper to write `content` into a fresh temp dir and return (dir, input, output)
fn setup(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("PoliceDataAll.csv");
    let output = dir.path().join("cleaned_data.csv");
    fs::write(&input, content).unwrap();
    (dir, input, output)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_single_row_scenario() {
    let (_dir, input, output) = setup("EVENT_UNIQUE_ID,x,y,Division,Count\n1,10,20,D11,5\n");

    let report = prune_file(&input, &output, &PruneOptions::default()).unwrap();

    assert_eq!(read(&output), "Division,Count\nD11,5\n");
    assert_eq!(report.rows, 1);
    assert_eq!(report.columns_in, 5);
    assert_eq!(report.columns_out, 2);
    assert_eq!(report.dropped, ["EVENT_UNIQUE_ID", "x", "y"]);
    assert!(report.missing.is_empty());
}

#[test]
fn test_header_only_input() {
    let (_dir, input, output) = setup("EVENT_UNIQUE_ID,OCC_YEAR,x,y,DIVISION\n");

    let report = prune_file(&input, &output, &PruneOptions::default()).unwrap();

    assert_eq!(read(&output), "OCC_YEAR,DIVISION\n");
    assert_eq!(report.rows, 0);
}

#[test]
fn test_missing_x_is_ignored() {
    let (_dir, input, output) = setup("EVENT_UNIQUE_ID,y,Division\nGO-1,20,D11\nGO-2,21,D14\n");

    let report = prune_file(&input, &output, &PruneOptions::default()).unwrap();

    assert_eq!(read(&output), "Division\nD11\nD14\n");
    assert_eq!(report.missing, ["x"]);
}

#[test]
fn test_missing_x_fails_when_strict() {
    let (_dir, input, output) = setup("EVENT_UNIQUE_ID,y,Division\nGO-1,20,D11\n");
    let options = PruneOptions {
        columns: ColumnSet::default(),
        policy: MissingColumnPolicy::Fail,
    };

    let err = prune_file(&input, &output, &options).unwrap_err();

    assert_eq!(err.stage(), Stage::Transform);
    assert!(err.to_string().ends_with("header: x"), "{err}");
    assert!(!output.exists(), "no output on failure");
}

#[test]
fn test_second_run_is_idempotent() {
    let (dir, input, first) = setup(
        "EVENT_UNIQUE_ID,OCC_DATE,DIVISION,x,y\n\
         GO-1,2019-01-03,D11,-8837000.1,5411000.2\n\
         GO-2,2019-01-04,\"D 12, west\",-8836000.3,5412000.4\n",
    );
    let second = dir.path().join("twice.csv");

    prune_file(&input, &first, &PruneOptions::default()).unwrap();
    let report = prune_file(&first, &second, &PruneOptions::default()).unwrap();

    assert_eq!(read(&first), read(&second));
    assert_eq!(report.missing, ["EVENT_UNIQUE_ID", "x", "y"]);
    assert_eq!(report.columns_in, report.columns_out);
}

#[test]
fn test_values_are_not_reformatted() {
    let (_dir, input, output) = setup("x,code,amount,y\n1,007,1.50,2\n3,,1e3,4\n");

    prune_file(&input, &output, &PruneOptions::default()).unwrap();

    assert_eq!(read(&output), "code,amount\n007,1.50\n,1e3\n");
}

#[test]
fn test_custom_drop_list() {
    let (_dir, input, output) = setup("a,b,c\n1,2,3\n");
    let options = PruneOptions {
        columns: ColumnSet::new(["b"]),
        policy: MissingColumnPolicy::Fail,
    };

    prune_file(&input, &output, &options).unwrap();

    assert_eq!(read(&output), "a,c\n1,3\n");
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");

    let err = prune_file(&dir.path().join("nope.csv"), &output, &PruneOptions::default())
        .unwrap_err();

    assert!(matches!(err, PruneError::FileNotFound { .. }));
    assert_eq!(err.stage(), Stage::Read);
    assert!(!output.exists());
}

#[test]
fn test_ragged_input() {
    let (_dir, input, output) = setup("EVENT_UNIQUE_ID,x,y\n1,2\n");

    let err = prune_file(&input, &output, &PruneOptions::default()).unwrap_err();

    assert!(matches!(err, PruneError::Parse { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_directory() {
    let (dir, input, _) = setup("EVENT_UNIQUE_ID,x,y,Division\n1,2,3,D11\n");
    let output = dir.path().join("missing").join("out.csv");

    let err = prune_file(&input, &output, &PruneOptions::default()).unwrap_err();

    assert_eq!(err.stage(), Stage::Write);
    assert!(!output.exists());
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let (_dir, input, output) = setup("EVENT_UNIQUE_ID,y\n1,2\n");
    fs::write(&output, "Division\nD11\n").unwrap();
    let options = PruneOptions {
        columns: ColumnSet::default(),
        policy: MissingColumnPolicy::Fail,
    };

    assert!(prune_file(&input, &output, &options).is_err());
    assert_eq!(read(&output), "Division\nD11\n");
}

#[cfg(unix)]
#[test]
fn test_overwrite_keeps_output_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, input, output) = setup("x,a\n1,\n2,v\n");
    fs::write(&output, "stale\n").unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o644)).unwrap();

    prune_file(&input, &output, &PruneOptions::default()).unwrap();

    let mode = fs::metadata(&output).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(read(&output), "a\n\"\"\nv\n");
}
