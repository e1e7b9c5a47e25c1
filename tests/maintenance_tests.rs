use predicates::str::contains;

mod common;
use common::{init_db_with_guests, rwl, setup_test_db};

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_guests(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Waiting parties:"))
        .stdout(contains("Waiting covers:"))
        .stdout(contains("Average party size:"));
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let db_path = setup_test_db("db_check");

    rwl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rwl()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");

    rwl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rwl()
        .args(["--db", &db_path, "--test", "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));

    rwl()
        .args(["--db", &db_path, "--test", "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));
}

#[test]
fn test_db_vacuum_runs() {
    let db_path = setup_test_db("db_vacuum");
    init_db_with_guests(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed."));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_guests(&db_path);

    rwl()
        .args(["--db", &db_path, "--test", "add", "Carol", "zz"])
        .assert()
        .success();

    rwl()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Alice (party of 2)"))
        .stdout(contains("add_defaulted"));
}

#[test]
fn test_config_print_shows_database_path() {
    let db_path = setup_test_db("config_print");

    rwl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rwl()
        .args(["--db", &db_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains(db_path.clone()))
        .stdout(contains("default_party_size:"));
}
