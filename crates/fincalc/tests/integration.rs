//! End-to-end CLI integration tests for the `fincalc` binary.
//!
//! Each test runs in its own temporary directory with the `FINCALC_*`
//! environment cleared, and exercises the binary as a subprocess via
//! `assert_cmd`.

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ENV_VARS: &[&str] = &[
    "FINCALC_DIR",
    "FINCALC_PRECISION",
    "FINCALC_COLOR",
    "FINCALC_JSON",
    "FINCALC_PERCENT_SUFFIX",
    "RUST_LOG",
];

/// Build a `Command` for the cargo-built `fincalc` binary, isolated in `tmp`.
fn fincalc(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.current_dir(tmp.path()).env("NO_COLOR", "1");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// Help, version, completion
// ---------------------------------------------------------------------------

#[test]
fn no_subcommand_prints_help() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("solve"));
}

#[test]
fn version_human_and_json() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fincalc version "));

    let json = stdout_json(fincalc(&tmp).args(["version", "--json"]));
    assert_eq!(json["formulas"], 24);
    assert!(json["version"].is_string());
}

#[test]
fn completion_scripts_generate() {
    let tmp = TempDir::new().unwrap();
    for shell in ["bash", "zsh", "fish", "powershell"] {
        fincalc(&tmp)
            .args(["completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("fincalc"));
    }

    fincalc(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("solve")
                .and(predicate::str::contains("transfer"))
                .and(predicate::str::contains("--precision")),
        );
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

#[test]
fn list_groups_by_category() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("I. BASIC PROFITABILITY & COST STRUCTURE"))
        .stdout(predicate::str::contains(" 1. Revenue"))
        .stdout(predicate::str::contains("24. Financing Cost of Delayed Payment"));
}

#[test]
fn list_json_has_every_formula() {
    let tmp = TempDir::new().unwrap();
    let json = stdout_json(fincalc(&tmp).args(["list", "--json"]));
    let groups = json.as_array().unwrap();
    assert_eq!(groups.len(), 6);
    let total: usize = groups
        .iter()
        .map(|g| g["formulas"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 24);
    assert_eq!(groups[0]["category"], "I. Basic Profitability & Cost Structure");
}

#[test]
fn list_search_filters_and_reports_no_match() {
    let tmp = TempDir::new().unwrap();
    let json = stdout_json(fincalc(&tmp).args(["ls", "--search", "ECONOMIC PROFIT", "--json"]));
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|g| g["formulas"].as_array().unwrap().iter())
        .map(|f| f["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![11, 12, 13, 23]);

    fincalc(&tmp)
        .args(["list", "-s", "no such formula"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No formulas match"));
}

#[test]
fn show_prints_card() {
    let tmp = TempDir::new().unwrap();
    let output = fincalc(&tmp).args(["show", "1"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "#1 Revenue\n\
         Category:  I. Basic Profitability & Cost Structure\n\
         Relation:  Revenue = Sales Price per unit \u{d7} Sales Volume (units)\n\
         Solver:    numeric-solver\n\
         \n\
         Variables:\n  \
         revenue      Revenue ($)  [computed]\n  \
         salesPrice   Sales Price per unit ($)\n  \
         salesVolume  Sales Volume (units)\n"
    );
}

#[test]
fn show_json_and_missing_id() {
    let tmp = TempDir::new().unwrap();
    let json = stdout_json(fincalc(&tmp).args(["show", "22", "--json"]));
    assert_eq!(json["capability"], "scenario-decision");
    assert_eq!(json["variables"][0]["kind"], "select");
    assert_eq!(json["variables"][0]["options"].as_array().unwrap().len(), 2);

    fincalc(&tmp)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("formula not found: 99"));
}

// ---------------------------------------------------------------------------
// solve
// ---------------------------------------------------------------------------

#[test]
fn solve_forward_and_inverse() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["solve", "1", "salesPrice=10", "salesVolume=5"])
        .assert()
        .success()
        .stdout("Revenue ($): 50.00\n");

    fincalc(&tmp)
        .args(["solve", "1", "revenue=50", "salesPrice=?", "salesVolume=5"])
        .assert()
        .success()
        .stdout("Sales Price per unit ($): 10.00\n");
}

#[test]
fn solve_percentage_output() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["solve", "8", "operatingProfit=50", "revenue=200"])
        .assert()
        .success()
        .stdout("Operating Profit Margin (%): 25.00%\n");
}

#[test]
fn solve_json_outcome() {
    let tmp = TempDir::new().unwrap();
    let json = stdout_json(fincalc(&tmp).args([
        "solve",
        "16",
        "fixedCosts=1000",
        "pricePerUnit=30",
        "variableCostPerUnit=20",
        "--json",
    ]));
    assert_eq!(json["formula"], 16);
    assert_eq!(json["outcome"], "solved");
    assert_eq!(json["name"], "breakEvenUnits");
    assert_eq!(json["value"], 100.0);
    assert_eq!(json["formatted"], "100.00");
}

#[test]
fn solve_all_filled_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["solve", "1", "revenue=50", "salesPrice=10", "salesVolume=5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to calculate"));

    let json = stdout_json(fincalc(&tmp).args([
        "solve",
        "1",
        "revenue=50",
        "salesPrice=10",
        "salesVolume=5",
        "--json",
    ]));
    assert_eq!(json["outcome"], "nothing_to_compute");
}

#[test]
fn solve_rejects_bad_input() {
    let tmp = TempDir::new().unwrap();

    fincalc(&tmp)
        .args(["solve", "1", "salesPrice=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fill in all but one field"));

    fincalc(&tmp)
        .args(["solve", "1", "salesPrice=ten", "salesVolume=5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number for 'salesPrice'"));

    fincalc(&tmp)
        .args(["solve", "1", "price=10", "salesVolume=5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variable: price"));

    fincalc(&tmp)
        .args(["solve", "16", "fixedCosts=1000", "pricePerUnit=20", "variableCostPerUnit=20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a finite number"));

    fincalc(&tmp)
        .args(["solve", "22", "marketPrice=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario decision helper"));
}

#[test]
fn solve_error_as_json() {
    let tmp = TempDir::new().unwrap();
    let output = fincalc(&tmp)
        .args(["solve", "1", "salesPrice=10", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(json["error"].as_str().unwrap().contains("fill in all but one"));
}

#[test]
fn solve_negative_values() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["solve", "4", "revenue=100", "variableCosts=80", "fixedCosts=40"])
        .assert()
        .success()
        .stdout("Operating Profit ($): -20.00\n");
}

#[test]
fn solve_zero_result_is_unsigned() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["solve", "8", "operatingProfitMargin=?", "operatingProfit=0", "revenue=-5"])
        .assert()
        .success()
        .stdout("Operating Profit Margin (%): 0.00%\n");
}

// ---------------------------------------------------------------------------
// transfer
// ---------------------------------------------------------------------------

#[test]
fn transfer_fixed_price() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["transfer", "--scenario", "1", "--market-price", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "In Scenario 1 (NO available capacity), the optimal internal transfer price is: 120.00",
        ));
}

#[test]
fn transfer_range_and_midpoint() {
    let tmp = TempDir::new().unwrap();
    let json = stdout_json(fincalc(&tmp).args([
        "transfer",
        "-s",
        "spare-capacity",
        "--supplier-variable-cost",
        "40",
        "--buyer-external-price",
        "60",
        "--json",
    ]));
    assert_eq!(json["scenario"], "spare-capacity");
    assert_eq!(json["recommendation"]["kind"], "Range");
    assert_eq!(json["recommended_price"], 50.0);
    assert!(json.get("warning").is_none());
}

#[test]
fn transfer_inverted_range_warns() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args([
            "transfer",
            "--scenario",
            "2",
            "--supplier-variable-cost",
            "70",
            "--buyer-external-price",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("between: 70.00 and 60.00"))
        .stdout(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("midpoint").not());
}

#[test]
fn transfer_missing_and_invalid_input() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["transfer", "--scenario", "2", "--supplier-variable-cost", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("buyerExternalPrice"));

    fincalc(&tmp)
        .args(["transfer", "--scenario", "3", "--market-price", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scenario: 3"));
}

// ---------------------------------------------------------------------------
// calc
// ---------------------------------------------------------------------------

#[test]
fn calc_reads_commands_from_stdin() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["calc", "1"])
        .write_stdin("set salesPrice 10\nset salesVolume 5\nsolve\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue ($): 50.00"));
}

#[test]
fn calc_decision_formula() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["calc", "22"])
        .write_stdin("scenario 2\nsupplierVariableCost=40\nbuyerExternalPrice=60\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("midpoint: 50.00"));
}

#[test]
fn calc_refuses_json() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["calc", "1", "--json"])
        .write_stdin("quit\n")
        .assert()
        .failure();
}

#[test]
fn calc_ignores_json_config_default() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["config", "set", "json", "true"])
        .assert()
        .success();

    fincalc(&tmp)
        .args(["calc", "1"])
        .write_stdin("set salesPrice 10\nset salesVolume 5\nsolve\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue ($): 50.00"));

    fincalc(&tmp)
        .args(["calc", "1"])
        .env("FINCALC_JSON", "true")
        .write_stdin("set salesPrice 10\nset salesVolume 5\nsolve\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue ($): 50.00"));
}

// ---------------------------------------------------------------------------
// config and precedence
// ---------------------------------------------------------------------------

#[test]
fn config_set_get_list_unset() {
    let tmp = TempDir::new().unwrap();

    fincalc(&tmp)
        .args(["config", "set", "precision", "4"])
        .assert()
        .success()
        .stdout("Set precision = 4\n");
    assert!(tmp.path().join(".fincalc/config.yaml").is_file());

    fincalc(&tmp)
        .args(["config", "get", "precision"])
        .assert()
        .success()
        .stdout("4\n");

    fincalc(&tmp)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("precision       4"));

    fincalc(&tmp)
        .args(["solve", "1", "salesPrice=10", "salesVolume=3"])
        .assert()
        .success()
        .stdout("Revenue ($): 30.0000\n");

    fincalc(&tmp)
        .args(["config", "unset", "precision"])
        .assert()
        .success();
    fincalc(&tmp)
        .args(["config", "get", "precision"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn config_rejects_unknown_key_and_bad_value() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["config", "set", "colour", "never"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown configuration key: colour"));

    fincalc(&tmp)
        .args(["config", "set", "precision", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at most 12"));
}

#[test]
fn config_is_found_from_subdirectory() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["config", "set", "percent-suffix", "false"])
        .assert()
        .success();

    let nested = tmp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();
    fincalc(&tmp)
        .current_dir(&nested)
        .args(["solve", "8", "operatingProfit=50", "revenue=200"])
        .assert()
        .success()
        .stdout("Operating Profit Margin (%): 25.00\n");

    fincalc(&tmp)
        .current_dir(&nested)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".fincalc"));
}

#[test]
fn config_path_without_directory_fails() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["config", "path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .fincalc directory found"));
}

#[test]
fn flag_beats_env_beats_file() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["config", "set", "precision", "4"])
        .assert()
        .success();

    fincalc(&tmp)
        .env("FINCALC_PRECISION", "1")
        .args(["solve", "1", "salesPrice=10", "salesVolume=3"])
        .assert()
        .success()
        .stdout("Revenue ($): 30.0\n");

    fincalc(&tmp)
        .env("FINCALC_PRECISION", "1")
        .args(["solve", "1", "salesPrice=10", "salesVolume=3", "--precision", "0"])
        .assert()
        .success()
        .stdout("Revenue ($): 30\n");
}

#[test]
fn explicit_config_dir_and_env_dir() {
    let tmp = TempDir::new().unwrap();
    let custom = tmp.path().join("settings");

    fincalc(&tmp)
        .args(["config", "set", "precision", "3", "--config"])
        .arg(&custom)
        .assert()
        .success();
    assert!(custom.join("config.yaml").is_file());

    fincalc(&tmp)
        .env("FINCALC_DIR", &custom)
        .args(["config", "get", "precision"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn verbose_logs_to_stderr() {
    let tmp = TempDir::new().unwrap();
    fincalc(&tmp)
        .args(["-v", "solve", "1", "salesPrice=10", "salesVolume=5"])
        .assert()
        .success()
        .stdout("Revenue ($): 50.00\n")
        .stderr(predicate::str::contains("DEBUG"));
}
