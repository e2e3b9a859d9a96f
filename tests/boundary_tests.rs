mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_boundary_numerical_values() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("boundary_test.csv");
    common::write_orders_csv(
        &input,
        &[
            ["big", "10000000"],
            ["tiny", "0.0001"],
            ["negative", "-42.5"],
            ["nan", "NaN"],
            ["infinite", "inf"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-report"));
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total Pagar: 1.0E7\n\nProcessando: big\n"))
        .stdout(predicate::str::contains("Total Pagar: 1.0E-4\n\nProcessando: tiny\n"))
        .stdout(predicate::str::contains("Total Pagar: -42.5\n\nProcessando: negative\n"))
        .stdout(predicate::str::contains("Total Pagar: NaN\n\nProcessando: nan\n"))
        .stdout(predicate::str::contains(
            "Total Pagar: Infinity\n\nProcessando: infinite\n",
        ));
}

#[test]
fn test_name_printed_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("names_test.csv");
    common::write_orders_csv(&input, &[["Loja \"Central\", filial 2", "7.5"]]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-report"));
    cmd.arg(&input);

    cmd.assert()
        .success()
        .stdout("Total Pagar: 7.5\n\nProcessando: Loja \"Central\", filial 2\n");
}
