use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "expense_core_cli";

fn tracker_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_CORE_HOME", home.path());
    cmd
}

fn add_expense(home: &TempDir, category: &str, amount: &str, extra: &[&str]) {
    tracker_command(home)
        .args(["add", "--category", category, "--amount", amount])
        .args(extra)
        .assert()
        .success();
}

#[test]
fn add_prints_confirmation_and_writes_store_and_audit_log() {
    let home = TempDir::new().unwrap();
    tracker_command(&home)
        .args(["add", "--category", "Food", "--amount", "30.5", "--note", "lunch"])
        .assert()
        .success()
        .stdout(contains("Added: EXP-").and(contains("| food |")).and(contains("30.50 BDT")));

    let store = std::fs::read_to_string(home.path().join("data").join("expenses.json")).unwrap();
    assert!(store.contains("\"version\": 1"));
    assert!(store.contains("\"category\": \"food\""));

    let audit = std::fs::read_to_string(home.path().join("logs").join("tracker.log")).unwrap();
    assert!(audit.contains("| INFO | ADD EXP-"));
}

#[test]
fn list_on_empty_store_prints_no_expenses() {
    let home = TempDir::new().unwrap();
    tracker_command(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found"));
    assert!(
        !home.path().join("data").join("expenses.json").exists(),
        "listing must not create the store file"
    );
}

#[test]
fn list_applies_filters_and_sort() {
    let home = TempDir::new().unwrap();
    add_expense(&home, "food", "10", &["--date", "2024-01-10"]);
    add_expense(&home, "transport", "50", &["--date", "2024-01-20"]);
    add_expense(&home, "food", "20", &["--date", "2024-02-05"]);

    let assert = tracker_command(&home)
        .args(["list", "--month", "2024-01", "--sort", "amount", "--desc"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "february record must be filtered out");
    assert!(lines[0].contains("50.00 BDT"), "unexpected order: {stdout}");
    assert!(lines[1].contains("10.00 BDT"), "unexpected order: {stdout}");

    tracker_command(&home)
        .args(["list", "--category", "food", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("| food |"));
}

#[test]
fn summary_prints_totals_per_category() {
    let home = TempDir::new().unwrap();
    add_expense(&home, "food", "30", &["--date", "2024-01-10"]);
    add_expense(&home, "food", "20", &["--date", "2024-01-12"]);
    add_expense(&home, "transport", "15", &["--date", "2024-01-20"]);

    tracker_command(&home)
        .args(["summary", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(
            contains("Total expenses: 3")
                .and(contains("Grand total: 65.00 BDT"))
                .and(contains("  food: 50.00 BDT"))
                .and(contains("  transport: 15.00 BDT")),
        );
}

#[test]
fn summary_on_empty_store_prints_no_expenses() {
    let home = TempDir::new().unwrap();
    tracker_command(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("No expenses found"));
}

#[test]
fn invalid_amount_renders_single_error_line() {
    let home = TempDir::new().unwrap();
    tracker_command(&home)
        .args(["add", "--category", "food", "--amount", "-5"])
        .assert()
        .failure()
        .stderr(contains("Error: invalid amount"));
    assert!(!home.path().join("data").join("expenses.json").exists());
}

#[test]
fn invalid_date_renders_single_error_line() {
    let home = TempDir::new().unwrap();
    tracker_command(&home)
        .args(["add", "--category", "food", "--amount", "5", "--date", "13/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Error: invalid date `13/01/2024`"));
}

#[test]
fn unknown_sort_field_renders_single_error_line() {
    let home = TempDir::new().unwrap();
    add_expense(&home, "food", "5", &[]);
    tracker_command(&home)
        .args(["list", "--sort", "flavour"])
        .assert()
        .failure()
        .stderr(contains("Error: unknown sort field: flavour"));
}
