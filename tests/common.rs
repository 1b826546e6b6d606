#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rcigarlog")
}

/// Unique test DB path inside the system temp dir, any previous file removed
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_rcigarlog.sqlite"));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rcl().args(["--db", db_path, "--test", "init"]).assert().success();
}

/// Fresh DB with three stock rows:
/// #1 Robusto / Cohiba (Cuba) 50.00 x3,
/// #2 No. 2 / Montecristo (Cuba) 40.00 x2,
/// #3 Maduro / Padrón (Nicaragua) 30.00 x1.
pub fn init_db_with_stock(db_path: &str) {
    init_db(db_path);

    for (name, brand, origin, price, qty, date) in [
        ("Robusto", "Cohiba", "Cuba", "50", "3", "2025-01-10"),
        ("No. 2", "Montecristo", "Cuba", "40", "2", "2025-02-20"),
        ("Maduro", "Padrón", "Nicaragua", "30", "1", "2025-03-05"),
    ] {
        rcl()
            .args([
                "--db", db_path, "stock", "add", name, brand, "--origin", origin, "--price", price, "--qty", qty,
                "--date", date,
            ])
            .assert()
            .success();
    }
}

/// Smoke #1 and rate it 9 with Café and Madeira.
pub fn smoke_cohiba(db_path: &str) {
    rcl()
        .args(["--db", db_path, "taste", "start", "1", "--cut", "punch"])
        .assert()
        .success();

    rcl()
        .args([
            "--db",
            db_path,
            "taste",
            "finish",
            "1",
            "--rating",
            "9",
            "--duration",
            "60",
            "--repurchase",
            "yes",
            "--flavor",
            "Café",
            "--flavor",
            "Madeira",
            "--notes",
            "creamy and long",
        ])
        .assert()
        .success();
}
