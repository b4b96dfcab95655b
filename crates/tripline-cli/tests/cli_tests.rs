use std::{fs, net::TcpListener, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output and XDG paths pointing into `home`, so no test
/// reads or writes the real user directories.
fn trip_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trip").expect("Failed to find trip binary");
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG")
        .current_dir(home)
        .arg("--no-color");
    cmd
}

/// Command bound to a database file inside `home`.
fn trip_db_cmd(home: &Path) -> Command {
    let mut cmd = trip_cmd(home);
    cmd.arg("--database-file").arg(home.join("cli_test.db"));
    cmd
}

/// Adds a place and returns the id printed in the confirmation.
fn add_place(home: &Path, day: &str, name: &str, lat: &str, lng: &str) -> String {
    let output = trip_db_cmd(home)
        .args(["add", name, "--lat", lat, "--lng", lng, "--day", day])
        .output()
        .expect("Failed to run trip add");
    assert!(output.status.success(), "add failed: {output:?}");

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output");
    let first_line = stdout.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("Added place with ID: ")
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_else(|| panic!("unexpected add output: {stdout}"))
        .to_string()
}

#[test]
fn test_cli_add_and_reorder_scenario() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    add_place(home, "3", "Museum", "37.1", "127.1");
    let cafe = add_place(home, "3", "Cafe", "37.2", "127.2");

    trip_db_cmd(home)
        .args(["list", "--day", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Museum"))
        .stdout(predicate::str::contains("### 2. Cafe"));

    trip_db_cmd(home)
        .args(["move", &cafe, "up", "--day", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated day 3"))
        .stdout(predicate::str::contains(format!("- Move place {cafe} up")))
        .stdout(predicate::str::contains("### 1. Cafe"))
        .stdout(predicate::str::contains("### 2. Museum"));
}

#[test]
fn test_cli_up_down_shorthands() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    let first = add_place(home, "2", "Palace", "37.5", "126.9");
    add_place(home, "2", "Market", "37.6", "127.0");

    trip_db_cmd(home)
        .args(["down", &first, "--day", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Market"))
        .stdout(predicate::str::contains("### 2. Palace"));

    trip_db_cmd(home)
        .args(["up", &first, "--day", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Palace"));
}

#[test]
fn test_cli_delete_renumbers() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    let a = add_place(home, "5", "A", "1", "1");
    add_place(home, "5", "B", "2", "2");

    trip_db_cmd(home)
        .args(["rm", &a, "--day", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Removed place with ID: {a} from day 5"
        )))
        .stdout(predicate::str::contains("### 1. B"));
}

#[test]
fn test_cli_delete_unknown_id_is_not_reported_as_removed() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    let a = add_place(home, "5", "A", "1", "1");

    // Right id, wrong day
    trip_db_cmd(home)
        .args(["delete", &a, "--day", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "No place with ID: {a} on day 6; nothing removed"
        )))
        .stdout(predicate::str::contains("Removed place").not());

    trip_db_cmd(home)
        .args(["list", "--day", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. A"));
}

#[test]
fn test_cli_list_empty_day() {
    let temp_dir = create_cli_test_environment();

    trip_db_cmd(temp_dir.path())
        .args(["ls", "--day", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No places planned for day 4."));
}

#[test]
fn test_cli_without_command_lists_default_day() {
    let temp_dir = create_cli_test_environment();

    trip_db_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Day 1"));
}

#[test]
fn test_cli_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();

    trip_db_cmd(temp_dir.path())
        .args(["add", "  ", "--lat", "1", "--lng", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'name'"));
}

#[test]
fn test_cli_rejects_day_out_of_range() {
    let temp_dir = create_cli_test_environment();

    trip_db_cmd(temp_dir.path())
        .args(["list", "--day", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'day'"));
}

#[test]
fn test_cli_route_prints_transit_link() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    add_place(home, "3", "Museum", "37.1", "127.1");
    add_place(home, "3", "Cafe", "37.2", "127.2");

    trip_db_cmd(home)
        .args(["route", "--day", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Day 3"))
        .stdout(predicate::str::contains(
            "https://www.google.com/maps/dir/?api=1&origin=37.1,127.1&destination=37.2,127.2&travelmode=transit",
        ));
}

#[test]
fn test_cli_map_writes_html() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    add_place(home, "6", "Tower", "35.1", "129.0");

    trip_db_cmd(home)
        .args(["map", "--day", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote map for day 6 with 1 stop"))
        .stdout(predicate::str::contains("day-6.html"));

    let html = fs::read_to_string(home.join("day-6.html")).expect("map file should exist");
    assert!(html.contains("leaflet"));
    assert!(html.contains("Tower"));

    let custom = home.join("custom.html");
    trip_db_cmd(home)
        .args(["map", "--day", "6", "--output"])
        .arg(&custom)
        .assert()
        .success();
    assert!(custom.exists());
}

#[test]
fn test_cli_overview() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    trip_db_cmd(home)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("No places planned yet."));

    add_place(home, "1", "A", "1", "1");
    add_place(home, "1", "B", "1", "1");

    trip_db_cmd(home)
        .arg("o")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Day 1: 2 places"))
        .stdout(predicate::str::contains("- Day 13: no places"))
        .stdout(predicate::str::contains("Total: 2 places"));
}

#[test]
fn test_cli_default_database_under_xdg_data() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    trip_cmd(home)
        .args(["add", "Museum", "--lat", "37.1", "--lng", "127.1"])
        .assert()
        .success();

    assert!(home.join("data").join("tripline").join("trip_plan.db").exists());
}

#[test]
fn test_cli_config_sets_default_day() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    let config_dir = home.join("config").join("tripline");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "default_day = 9\n").unwrap();

    trip_db_cmd(home)
        .args(["add", "Temple", "--lat", "35.0", "--lng", "135.7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to day 9"));

    trip_db_cmd(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Day 9"))
        .stdout(predicate::str::contains("### 1. Temple"));
}

#[test]
fn test_cli_explicit_config_must_exist() {
    let temp_dir = create_cli_test_environment();
    let home = temp_dir.path();

    trip_db_cmd(home)
        .arg("--config")
        .arg(home.join("missing.toml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_remote_without_url() {
    let temp_dir = create_cli_test_environment();

    trip_cmd(temp_dir.path())
        .args(["--backend", "remote", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize itinerary"))
        .stderr(predicate::str::contains("needs a URL"));
}

#[test]
fn test_cli_remote_unreachable() {
    let temp_dir = create_cli_test_environment();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    trip_cmd(temp_dir.path())
        .args(["--backend", "remote", "--timeout-secs", "2", "--remote-url"])
        .arg(format!("http://127.0.0.1:{port}/exec"))
        .args(["list", "--day", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Remote store unavailable"));
}
