//! End-to-end tests for the `ledger` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("COMMITTEE_LEDGER_DATA_DIR", data_dir.path())
        .env_remove("LEDGER_USER")
        .env_remove("LEDGER_PASSWORD")
        .env_remove("LEDGER_LOG");
    cmd
}

fn as_admin(data_dir: &TempDir) -> Command {
    let mut cmd = ledger(data_dir);
    cmd.args(["--user", "admin", "--password", "password"]);
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    ledger(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_books_and_settings() {
    let dir = TempDir::new().unwrap();
    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("books.json").exists());

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn admin_posts_and_lists_transactions() {
    let dir = initialized();

    as_admin(&dir)
        .args([
            "transaction",
            "add",
            "Bake sale",
            "Fundraising Events",
            "--income",
            "200",
            "--authorized-by",
            "Chair",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction recorded successfully"))
        .stdout(predicate::str::contains("KD 170.00"));

    as_admin(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bake sale"));

    as_admin(&dir)
        .args(["transaction", "add", "Gift", "Sponsorships", "--income", "10"])
        .args(["--authorized-by", "Chair"])
        .assert()
        .success();

    as_admin(&dir)
        .args(["transaction", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gift"))
        .stdout(predicate::str::contains("Bake sale").not());

    as_admin(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("KD 210.00"))
        .stdout(predicate::str::contains("KD 31.50"));
}

#[test]
fn unbudgeted_category_requires_committee_vote() {
    let dir = initialized();

    as_admin(&dir)
        .args([
            "transaction",
            "add",
            "Snacks",
            "Snacks",
            "--expense",
            "5",
            "--authorized-by",
            "Chair",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "This transaction requires authorization from: Committee Vote",
        ));

    as_admin(&dir)
        .args([
            "transaction",
            "add",
            "Snacks",
            "Snacks",
            "--expense",
            "5",
            "--authorized-by",
            "committee vote",
        ])
        .assert()
        .success();
}

#[test]
fn out_of_range_amounts_are_rejected() {
    let dir = initialized();

    for amount in ["99999999999999999", "10.999"] {
        as_admin(&dir)
            .args(["transaction", "add", "Donation", "Sponsorships", "--income", amount])
            .args(["--authorized-by", "Committee Vote"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Validation error"));
    }

    as_admin(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Donation").not());
}

#[test]
fn high_value_expense_needs_chair_or_school_admin() {
    let dir = initialized();

    as_admin(&dir)
        .args([
            "transaction",
            "add",
            "Gowns",
            "Graduation",
            "--expense",
            "150",
            "--authorized-by",
            "Treasurer",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chair, School Admin"));
}

#[test]
fn viewer_cannot_post_transactions() {
    let dir = initialized();

    ledger(&dir)
        .args(["--user", "viewer", "--password", "viewer"])
        .args([
            "transaction",
            "add",
            "Hoodies",
            "Merchandise Sales",
            "--income",
            "10",
            "--authorized-by",
            "Chair",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access the Transactions page"));

    ledger(&dir)
        .args(["--user", "Viewer", "--password", "viewer", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as viewer (viewer)"));
}

#[test]
fn wrong_password_is_rejected() {
    let dir = initialized();

    ledger(&dir)
        .args(["--user", "admin", "--password", "Password", "dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect username or password"));
}

#[test]
fn monthly_report_as_json() {
    let dir = initialized();

    for (description, flag, amount) in [("Sponsor", "--income", "100"), ("Posters", "--expense", "40")] {
        let category = if flag == "--income" {
            "Sponsorships"
        } else {
            "Marketing/Promotion"
        };
        as_admin(&dir)
            .args(["transaction", "add", description, category, flag, amount])
            .args(["--authorized-by", "Chair"])
            .assert()
            .success();
    }

    let output = as_admin(&dir)
        .args(["report", "monthly", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_income"], 100_00);
    assert_eq!(report["total_expenses"], 40_00);
    assert_eq!(report["net"], 60_00);
    assert_eq!(report["emergency_reserve"], 15_00);
    assert_eq!(report["available_funds"], 45_00);
    assert_eq!(report["transactions"].as_array().unwrap().len(), 2);
}

#[test]
fn monthly_report_rejects_bad_month() {
    let dir = initialized();

    as_admin(&dir)
        .args(["report", "monthly", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month must be between 1 and 12"));
}

#[test]
fn event_lifecycle() {
    let dir = initialized();

    as_admin(&dir)
        .args(["event", "create", "Spring Fair", "--date", "2024-04-20"])
        .args(["--projected-income", "500", "--projected-expenses", "200"])
        .assert()
        .success();

    as_admin(&dir)
        .args(["event", "income", "spring fair", "Tickets", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KD 120.00"));

    as_admin(&dir)
        .args(["event", "status", "Spring Fair", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status transition"));

    as_admin(&dir)
        .args(["event", "status", "Spring Fair", "active"])
        .assert()
        .success();

    as_admin(&dir)
        .args(["event", "show", "Spring Fair"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tickets"));
}

#[test]
fn fundraising_rejects_end_before_start() {
    let dir = initialized();

    as_admin(&dir)
        .args(["fundraising", "add", "Car Wash"])
        .args(["--start", "2024-05-10", "--end", "2024-05-01", "--goal", "300"])
        .assert()
        .failure();

    as_admin(&dir)
        .args(["fundraising", "add", "Car Wash"])
        .args(["--start", "2024-05-01", "--end", "2024-05-10", "--goal", "300"])
        .assert()
        .success();

    as_admin(&dir)
        .args(["fundraising", "update", "car wash", "--raised", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.0% of goal"));
}

#[test]
fn changes_are_audited() {
    let dir = initialized();

    as_admin(&dir)
        .args(["budget", "set", "expenses", "Yearbook", "800"])
        .assert()
        .success();

    as_admin(&dir)
        .args(["report", "audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE BudgetCategory"))
        .stdout(predicate::str::contains("by admin"));
}

#[test]
fn settings_assign_committee_office() {
    let dir = initialized();

    as_admin(&dir)
        .args(["settings", "set", "Deputy Chair", "Sara"])
        .assert()
        .success();

    as_admin(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sara"));
}

#[test]
fn hash_password_from_stdin() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["auth", "hash-password", "--stdin"])
        .write_stdin("s3cret\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$argon2"));
}
