use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_guests, rwl, setup_test_db, temp_out};

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_guests(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    rwl()
        .args(["--db", &db_path, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let meta = fs::metadata(&out).expect("backup file");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_compress_replaces_copy_with_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_guests(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip_path = Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    rwl()
        .args([
            "--db", &db_path, "--test", "backup", "--file", &out, "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(zip_path.exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing_db");
    // no init: the database file does not exist

    let out = temp_out("backup_missing_db", "sqlite");

    rwl()
        .args(["--db", &db_path, "--test", "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}
