use callchain_miner::aggregator::{FrequencyTables, Transition, TransitionSink};
use callchain_miner::output::{
    read_report, render_origin_report, to_report, validate_path, write_report, write_reports,
    RunStats,
};
use pretty_assertions::assert_eq;
use std::path::Path;

fn sample_tables() -> FrequencyTables {
    let mut tables = FrequencyTables::new();
    tables.record(Transition::new("lib.open", "lib.open", "lib.read"));
    tables.record(Transition::new("lib.open", "lib.read", "lib.close"));
    tables.record(Transition::new("lib.open", "lib.read", "lib.close"));
    tables.record(Transition::new("lib.open", "lib.read", "lib.close"));
    tables
}

#[test]
fn test_write_reports() {
    let temp_dir = tempfile::tempdir().unwrap();
    let paths = write_reports(&sample_tables(), "lib", temp_dir.path()).unwrap();

    assert_eq!(
        paths.global.file_name().unwrap().to_str().unwrap(),
        "lib_bigram_frequencies.txt"
    );
    assert_eq!(
        std::fs::read_to_string(&paths.global).unwrap(),
        "lib.open -> lib.read\t1\nlib.read -> lib.close\t3\n"
    );
    assert_eq!(
        std::fs::read_to_string(&paths.by_origin).unwrap(),
        "lib.open\nlib.read -> lib.close\t3\nlib.open -> lib.read\t1\n\n"
    );
}

#[test]
fn test_origin_report_prints_each_entry_count() {
    let report = render_origin_report(&sample_tables());
    assert!(report.contains("lib.open -> lib.read\t1\n"));
    assert!(report.contains("lib.read -> lib.close\t3\n"));
}

#[test]
fn test_empty_tables_write_empty_reports() {
    let temp_dir = tempfile::tempdir().unwrap();
    let paths = write_reports(&FrequencyTables::new(), "lib", temp_dir.path()).unwrap();

    assert_eq!(std::fs::read_to_string(&paths.global).unwrap(), "");
    assert_eq!(std::fs::read_to_string(&paths.by_origin).unwrap(), "");
}

#[test]
fn test_json_report_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("reports/lib.json");
    let stats = RunStats {
        files: 1,
        edges: 5,
        dropped_lines: 0,
        transitions: 4,
    };

    let report = to_report("lib", &sample_tables(), stats);
    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded, report);
    assert_eq!(loaded.stats.transitions, 4);
    assert_eq!(loaded.by_origin[0].transitions[0].count, 3);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}
