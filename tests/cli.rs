use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

fn fintrack(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINTRACK_DATA_DIR", data_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(data_dir: &Path, args: &[&str]) {
    fintrack(data_dir).args(args).assert().success();
}

#[test]
fn no_command_prints_usage_hint() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .assert()
        .success()
        .stdout(contains("fintrack --help"));
}

#[test]
fn budget_add_then_list() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["budget", "add", "Groceries", "150", "--category", "food"])
        .assert()
        .success()
        .stdout(contains("Created budget: Groceries"));

    fintrack(dir.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Food & Dining")).and(contains("€150.00")));

    assert!(dir.path().join("data").join("fintrack_state.json").exists());
}

#[test]
fn transactions_update_spent_and_are_searchable() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["budget", "add", "Groceries", "150"]);
    run(dir.path(), &["transaction", "add", "Groceries", "50", "Weekly market"]);
    run(dir.path(), &["txn", "add", "groceries", "12.50", "Bakery"]);

    fintrack(dir.path())
        .args(["budget", "show", "Groceries"])
        .assert()
        .success()
        .stdout(contains("Spent:      €62.50").and(contains("Transactions (2)")));

    fintrack(dir.path())
        .args(["transaction", "list", "--search", "MARKET"])
        .assert()
        .success()
        .stdout(contains("Weekly market").and(contains("Bakery").not()));
}

#[test]
fn unknown_budget_is_reported() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["transaction", "add", "Nope", "5", "Coffee"])
        .assert()
        .failure()
        .stderr(contains("Budget not found: Nope"));
}

#[test]
fn non_positive_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["budget", "add", "Rent", "0"])
        .assert()
        .failure()
        .stderr(contains("must be greater than zero"));

    fintrack(dir.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("No budgets found."));
}

#[test]
fn goal_contributions_are_capped_at_target() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["goal", "add", "Vacation", "1000", "2030-06-30"]);

    fintrack(dir.path())
        .args(["goal", "contribute", "Vacation", "600"])
        .assert()
        .success()
        .stdout(contains("(60%)"));

    fintrack(dir.path())
        .args(["goal", "contribute", "Vacation", "600"])
        .assert()
        .success()
        .stdout(contains("€1000.00 of €1000.00").and(contains("Goal reached!")));

    fintrack(dir.path())
        .args(["goal", "list", "--filter", "completed"])
        .assert()
        .success()
        .stdout(contains("Vacation").and(contains("1 completed")));
}

#[test]
fn recurring_process_adds_transactions_to_budget() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["budget", "add", "Subscriptions", "50"]);
    run(
        dir.path(),
        &[
            "recurring",
            "add",
            "Streaming",
            "12",
            "--start",
            "2020-01-01",
            "--frequency",
            "yearly",
            "--budget",
            "Subscriptions",
        ],
    );

    fintrack(dir.path())
        .args(["recurring", "process"])
        .assert()
        .success()
        .stdout(contains("Streaming:"));

    fintrack(dir.path())
        .args(["transaction", "list", "--budget", "Subscriptions"])
        .assert()
        .success()
        .stdout(contains("Streaming").and(contains("2020-01-01")));

    fintrack(dir.path())
        .args(["recurring", "process"])
        .assert()
        .success()
        .stdout(contains("Nothing due."));
}

#[test]
fn recurring_income_can_be_toggled_and_deleted() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["recurring", "add", "Salary", "2500", "--income"]);

    fintrack(dir.path())
        .args(["recurring", "toggle", "Salary"])
        .assert()
        .success()
        .stdout(contains("Paused Salary"));

    fintrack(dir.path())
        .args(["recurring", "delete", "Salary"])
        .assert()
        .success()
        .stdout(contains("Deleted recurring item: Salary"));
}

#[test]
fn corrupt_state_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("fintrack_state.json"), "{ not json").unwrap();

    fintrack(dir.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("No budgets found."));

    assert!(data.join("fintrack_state.json.corrupt").exists());
}

#[test]
fn audit_lists_applied_changes() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["budget", "add", "Rent", "900"]);
    run(dir.path(), &["budget", "delete", "Rent"]);

    fintrack(dir.path())
        .args(["audit"])
        .assert()
        .success()
        .stdout(contains("CREATE Budget").and(contains("DELETE Budget")).and(contains("(Rent)")));
}

#[test]
fn dashboard_and_config() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(contains("No budgets yet.").and(contains("Completed budgets: 0/0")));

    fintrack(dir.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(contains("fintrack_state.json"));
}

#[test]
fn config_write_creates_settings_file() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(contains("Wrote").and(contains("config.json")));

    let contents = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"date_format\": \"%Y-%m-%d\""));
}

#[test]
fn invalid_date_format_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    fintrack(dir.path())
        .args(["budget", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format '%Q'"));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["budget", "add", "Groceries", "150"]);

    fintrack(dir.path())
        .args(["transaction", "add", "Groceries", "92233720368547759", "Typo"])
        .assert()
        .failure()
        .stderr(contains("Invalid money format"));

    fintrack(dir.path())
        .args(["transaction", "add", "Groceries", "2000000000000", "Typo"])
        .assert()
        .failure()
        .stderr(contains("cannot exceed"));
}

#[test]
fn ambiguous_name_does_not_delete_anything() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), &["budget", "add", "Rent", "900"]);
    run(dir.path(), &["budget", "add", "rent", "50"]);

    fintrack(dir.path())
        .args(["budget", "delete", "Rent"])
        .assert()
        .failure()
        .stderr(contains("Ambiguous identifier 'Rent' matches 2 records"));

    fintrack(dir.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("€900.00").and(contains("€50.00")));
}
