mod common;

use common::{init_db_with_stock, rcl, setup_test_db, smoke_cohiba};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_dashboard_stats_without_history() {
    let db_path = setup_test_db("dash_empty");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Units in stock : 6"))
        .stdout(contains("Average rating : 0.0"))
        .stdout(contains("Favorite       : None"))
        .stdout(contains("Pass --flavor"));
}

#[test]
fn test_dashboard_ranks_from_history() {
    let db_path = setup_test_db("dash_history");
    init_db_with_stock(&db_path);
    smoke_cohiba(&db_path);

    rcl()
        .args(["--db", &db_path, "dashboard", "--flavor", "Café"])
        .assert()
        .success()
        .stdout(contains("Favorite       : Robusto"))
        .stdout(contains("1. #1 Robusto / Cohiba (Cuba)  score 9.0  ✓ already smoked"))
        .stdout(contains("score 4.5"))
        .stdout(contains("matches: Café"));
}

#[test]
fn test_dashboard_falls_back_to_keywords() {
    let db_path = setup_test_db("dash_fallback");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "dashboard", "--flavor", "nicaragua"])
        .assert()
        .success()
        .stdout(contains("#3 Maduro / Padrón (Nicaragua)  score 0.0"))
        .stdout(contains("Robusto").not());
}

#[test]
fn test_dashboard_skips_sold_out_items() {
    let db_path = setup_test_db("dash_sold_out");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "stock", "edit", "3", "--qty", "0"])
        .assert()
        .success();

    rcl()
        .args(["--db", &db_path, "dashboard", "--flavor", "Nicaragua"])
        .assert()
        .success()
        .stdout(contains("No cigar in stock matches these flavors."));
}

#[test]
fn test_flavors_lists_palette() {
    let db_path = setup_test_db("flavors");
    init_db_with_stock(&db_path);

    rcl()
        .args(["--db", &db_path, "flavors"])
        .assert()
        .success()
        .stdout(contains("Flavor palette"));
}
