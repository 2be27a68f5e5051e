//! Integration tests for the list command

mod common;

use common::TestApp;
use predicates::prelude::*;

#[test]
fn test_list_empty_store() {
    let app = TestApp::with_users_fixture();
    app.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bundles"));
}

#[test]
fn test_list_shows_extracted_bundle_and_statistics() {
    let app = TestApp::with_users_fixture();
    app.cmd().args(["extract", "users#index"]).assert().success();

    app.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("users_index_"))
        .stdout(predicate::str::contains("users#index"))
        .stdout(predicate::str::contains("Bundles: 1"))
        .stdout(predicate::str::contains("Oldest:"))
        .stdout(predicate::str::contains("Newest:"));
}

#[test]
fn test_list_round_trip_extracted_bundle_is_valid() {
    let app = TestApp::with_users_fixture();
    app.cmd().args(["extract", "users#index"]).assert().success();

    // An invalid bundle would print its failure reason; a fresh extraction
    // must list clean
    app.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("listed file missing").not())
        .stdout(predicate::str::contains("manifest.json missing").not())
        .stdout(predicate::str::contains("checksum mismatch").not());
}

#[test]
fn test_list_reports_invalid_bundle() {
    let app = TestApp::with_users_fixture();
    app.write_bundle("users_index_20260801_120000");
    // Break the bundle: remove a listed file
    std::fs::remove_file(
        app.path
            .join("route_extracts/users_index_20260801_120000/models/user.rb"),
    )
    .unwrap();

    app.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "listed file missing: models/user.rb",
        ));
}

#[test]
fn test_list_statistics_oldest_and_newest() {
    let app = TestApp::with_users_fixture();
    app.write_bundle("users_index_20260801_120000");
    app.write_bundle("users_index_20260803_120000");

    app.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundles: 2"))
        .stdout(predicate::str::contains("Oldest: 20260801_120000"))
        .stdout(predicate::str::contains("Newest: 20260803_120000"));
}
