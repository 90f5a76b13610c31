mod common;
use common::{atr, init_db, init_db_with_data, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_events_csv() {
    let db_path = setup_test_db("export_events_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_events_csv", "csv");

    atr()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,subject_id,date,time,kind,source"));
    assert_eq!(content.lines().count(), 5);
    assert!(content.contains("2025-03-10,12:30:00,break_end"));
}

#[test]
fn test_export_days_json_range() {
    let db_path = setup_test_db("export_days_json");
    init_db_with_data(&db_path);

    atr()
        .args(["--db", &db_path, "plan", "2025-03-10", "--subject", "alice", "--duration", "480"])
        .assert()
        .success();

    let out = temp_out("export_days_json", "json");

    atr()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--days", "--range",
            "2025-03-10:2025-03-11",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["actual_minutes"], 450);
    assert_eq!(rows[0]["difference"], "-0h30");
    assert_eq!(rows[1]["actual_minutes"], 0);
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    atr()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2024"])
        .assert()
        .success();

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    atr()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure();
}
