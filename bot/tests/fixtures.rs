//! # PrognozRS Fixtures Integration Tests
//!
//! File: bot/tests/fixtures.rs
//! Author: Christi Mahu
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_fixtures_lists_table() {
    prognoz_cmd()
        .arg("fixtures")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vitality vs FaZe")
                .and(predicate::str::contains("MOUZ vs FURIA"))
                .and(predicate::str::contains("Team Spirit vs G2"))
                .and(predicate::str::contains("Real Madrid vs Barcelona"))
                .and(predicate::str::contains("Found 4 fixture(s)."))
                .and(predicate::str::contains("Форма Барсы").not()),
        );
}

#[test]
fn test_fixtures_with_notes() {
    prognoz_cmd()
        .args(["fixtures", "--notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MOUZ сильнее по форме, H2H и по рынку."));
}
