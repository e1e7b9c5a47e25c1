use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_guests, rwl, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_all_guests() {
    let db_path = setup_test_db("export_csv");
    init_db_with_guests(&db_path);

    let out = temp_out("export_csv", "csv");

    rwl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().expect("header"),
        "id,guest_name,party_size,notes,created_at"
    );
    assert!(content.contains("Alice"));
    assert!(content.contains("window table"));
    assert!(content.contains("Bob"));
}

#[test]
fn test_export_json_roundtrips_fields() {
    let db_path = setup_test_db("export_json");
    init_db_with_guests(&db_path);

    let out = temp_out("export_json", "json");

    rwl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("parse json");

    let guests = parsed.as_array().expect("array");
    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0]["name"], "Alice");
    assert_eq!(guests[0]["party_size"], 2);
    assert_eq!(guests[0]["notes"], "window table");
    assert_eq!(guests[1]["name"], "Bob");
    assert_eq!(guests[1]["party_size"], 4);
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let db_path = setup_test_db("export_no_force");
    init_db_with_guests(&db_path);

    let out = temp_out("export_no_force", "csv");
    fs::write(&out, "old content").expect("seed file");

    rwl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    let content = fs::read_to_string(&out).expect("read file");
    assert_eq!(content, "old content");
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_guests(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed file");

    rwl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read file");
    assert!(content.contains("Alice"));
}

#[test]
fn test_export_empty_waitlist_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    rwl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");

    rwl()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!Path::new(&out).exists());
}
