mod common;

use common::{init_db, init_db_with_stock, rcl, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_stock_add_and_list_with_summary() {
    let db_path = setup_test_db("stock_list");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "stock", "list"])
        .assert()
        .success()
        .stdout(contains("Robusto"))
        .stdout(contains("Montecristo"))
        .stdout(contains("Units in stock : 6"))
        .stdout(contains("260.00"))
        .stdout(contains("Available items: 3 of 3"));
}

#[test]
fn test_empty_stock_value_is_zero() {
    let db_path = setup_test_db("stock_empty");
    init_db(&db_path);

    rcl()
        .args(["--db", &db_path, "stock", "list"])
        .assert()
        .success()
        .stdout(contains("Units in stock : 0"))
        .stdout(contains(" 0.00"))
        .stdout(contains("-0.00").not());
}

#[test]
fn test_stock_add_requires_valid_fields() {
    let db_path = setup_test_db("stock_invalid");
    init_db(&db_path);

    rcl()
        .args(["--db", &db_path, "stock", "add", "Robusto", "Cohiba", "--price=-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid price"));

    rcl()
        .args(["--db", &db_path, "stock", "add", "Robusto", "Cohiba", "--qty=-1"])
        .assert()
        .failure()
        .stderr(contains("Invalid quantity"));

    rcl()
        .args(["--db", &db_path, "stock", "add", "Robusto", "Cohiba", "--date", "10/01/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_stock_edit_and_available_filter() {
    let db_path = setup_test_db("stock_edit");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "stock", "edit", "2", "--qty", "0"])
        .assert()
        .success()
        .stdout(contains("Updated #2"));

    rcl()
        .args(["--db", &db_path, "stock", "list", "--available"])
        .assert()
        .success()
        .stdout(contains("Robusto"))
        .stdout(contains("Montecristo").not())
        .stdout(contains("Available items: 2 of 3"));
}

#[test]
fn test_stock_del_and_missing_id() {
    let db_path = setup_test_db("stock_del");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "stock", "del", "3"])
        .assert()
        .success()
        .stdout(contains("Removed #3"));

    rcl()
        .args(["--db", &db_path, "stock", "del", "3"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
