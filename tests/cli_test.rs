use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/debts.csv").arg("--extra").arg("100");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Month,Total Payment,Total Interest Paid,\
             Debt Store Card Balance,Debt Store Card Payment,Debt Store Card Interest,\
             Debt Car Loan Balance,Debt Car Loan Payment,Debt Car Loan Interest\n",
        ))
        .stdout(predicate::str::contains(
            "1,$208.33,$16.67,$358.33,$150.00,$8.33,$950.00,$58.33,$8.33",
        ))
        // Store Card's early payoff in month 4 hands its unused pool to Car Loan.
        .stdout(predicate::str::contains("\n4,$201.13,"))
        .stdout(predicate::str::contains("\n9,"))
        .stdout(predicate::str::contains("\n10,").not())
        .stderr(predicate::str::contains("Debt free in 9 months"));

    Ok(())
}

#[test]
fn test_cli_plain_avalanche() {
    let mut cmd = Command::new(cargo_bin!("debtplan"));
    cmd.arg("tests/fixtures/divergent.csv")
        .args(["--strategy", "avalanche", "--extra", "100", "--plain"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Debt Rewards Card Balance,Debt Rewards Card Payment,Debt Rewards Card Interest,\
             Debt Credit Union Balance",
        ))
        .stdout(predicate::str::contains("\n1,"))
        .stdout(predicate::str::contains("$").not())
        .stderr(predicate::str::contains("Debt free in 8 months"));
}

#[test]
fn test_cli_compare() {
    let mut cmd = Command::new(cargo_bin!("debtplan"));
    cmd.arg("tests/fixtures/divergent.csv")
        .args(["--compare", "--extra", "100"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Strategy,Months,Total Interest Paid,Total Payment,Status,Payoff Order",
        ))
        .stdout(predicate::str::contains(
            "snowball,10,$113.49,",
        ))
        .stdout(predicate::str::contains(
            "avalanche,8,$88.57,",
        ))
        .stdout(predicate::str::contains(
            ",paid off,Credit Union > Rewards Card",
        ))
        .stderr(predicate::str::contains("Avalanche saves $24.93 in interest and 2 months"));
}

#[test]
fn test_cli_json_output() {
    let output = Command::new(cargo_bin!("debtplan"))
        .arg("tests/fixtures/debts.csv")
        .args(["--extra", "100", "--format", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["summary"]["months"], 9);
    assert_eq!(json["summary"]["strategy"], "snowball");
    assert_eq!(json["summary"]["payoff_order"][0], "Store Card");
    assert_eq!(json["series"][1]["label"], "Car Loan");
    assert_eq!(json["schedule"].as_array().unwrap().len(), 9);
}

#[test]
fn test_cli_reads_stdin() {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("debtplan"));
    cmd.arg("-")
        .write_stdin("name,balance,interest_rate,min_payment\nPhone,1200,0,100\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\n12,$100.00,$0.00,$0.00,$100.00,$0.00"))
        .stderr(predicate::str::contains("Debt free in 12 months"));
}
