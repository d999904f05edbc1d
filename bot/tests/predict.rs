//! # PrognozRS Predict Integration Tests
//!
//! File: bot/tests/predict.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `prognoz predict`, which prints the same card the
//! bot sends for a match-name query.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_predict_known_fixture() {
    prognoz_cmd()
        .args(["predict", "Vitality vs FaZe"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🏆 Матч: Vitality vs FaZe")
                .and(predicate::str::contains("• Vitality → 78%"))
                .and(predicate::str::contains("• FaZe → 22%"))
                .and(predicate::str::contains("✅ Фаворит: Vitality"))
                .and(predicate::str::contains(
                    "Состав и форма у Vitality сильнее; рынок на их стороне.",
                )),
        );
}

#[test]
fn test_predict_reversed_fixture_keeps_input_order() {
    prognoz_cmd()
        .args(["predict", "FaZe", "vs", "Vitality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🏆 Матч: Faze vs Vitality")
                .and(predicate::str::contains("• Faze → 22%\n• Vitality → 78%")));
}

#[test]
fn test_predict_unknown_pair_is_neutral() {
    prognoz_cmd()
        .args(["predict", "Alpha - Beta"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🏆 Матч: Alpha vs Beta")
                .and(predicate::str::contains("• Alpha → 50%\n• Beta → 50%"))
                .and(predicate::str::contains("Пока без данных")),
        );
}

#[test]
fn test_predict_without_separator_fails() {
    prognoz_cmd()
        .args(["predict", "Vitality FaZe"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Could not read a match from 'Vitality FaZe'",
        ));
}
