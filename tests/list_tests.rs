//! List command integration tests

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_list_installed_shows_template_ids() {
    let project = TestProject::new();
    project.install_template("redis", "  redis:\n    image: redis", None);
    project.install_template("mysql", "  mysql:\n    image: mysql", None);

    project
        .cmd()
        .args(["list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mysql"))
        .stdout(predicate::str::contains("redis"));
}

#[test]
fn test_list_uses_cached_catalog_listing() {
    let project = TestProject::new();
    project.write_file(
        "store-cache/compose/list.yml",
        "redis: In-memory data store\nmysql: Relational database\n",
    );

    project
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("shipwright add redis"))
        .stdout(predicate::str::contains("In-memory data store"));
}

#[test]
fn test_list_packages_uses_cached_listing() {
    let project = TestProject::new();
    project.write_file("store-cache/package/list.yml", "lamp: Linux Apache MySQL PHP\n");

    project
        .cmd()
        .args(["list", "--packages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shipwright add --package lamp"));
}

#[test]
fn test_list_unreachable_catalog_reports_fetch_failure() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch"));
}
