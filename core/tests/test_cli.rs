// core/tests/test_cli.rs
use clap::Parser;
use heatcurve_core::cli::{build_registry, run, CliArgs};
use heatcurve_core::{import_csv, CircuitRegistry, CircuitSettings};
use std::fs;

#[test]
fn ep_and_fp_positionals_build_one_circuit() {
    let args = CliArgs::try_parse_from(["heatcurve", "55", "25"]).unwrap();
    let reg = build_registry(&args).unwrap();
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get(0).unwrap(), CircuitSettings { endpoint: 55.0, footpoint: 25.0 });
}

#[test]
fn import_flag_without_value_is_rejected() {
    assert!(CliArgs::try_parse_from(["heatcurve", "55", "25", "--import"]).is_err());
}

#[test]
fn missing_ep_fp_without_import_is_rejected() {
    assert!(CliArgs::try_parse_from(["heatcurve"]).is_err());
    assert!(CliArgs::try_parse_from(["heatcurve", "55"]).is_err());
}

#[test]
fn ep_fp_together_with_import_is_rejected() {
    assert!(CliArgs::try_parse_from(["heatcurve", "55", "25", "--import", "kretser.csv"]).is_err());
}

#[test]
fn non_numeric_endpoint_is_rejected() {
    assert!(CliArgs::try_parse_from(["heatcurve", "varm", "25"]).is_err());
}

#[test]
fn import_sizes_registry_by_csv_records() {
    let path = "tests/tmp_cli_import.csv";
    fs::write(path, "name,ep,fp\n\"Keller\nWerkstatt\",40,18\n").unwrap();

    let args = CliArgs::try_parse_from(["heatcurve", "--import", path]).unwrap();
    let reg = build_registry(&args).expect("import feilet");
    assert_eq!(reg.len(), 1, "en quotet rekord med linjeskift er én krets");
    assert_eq!(reg.get(0).unwrap(), CircuitSettings { endpoint: 40.0, footpoint: 18.0 });

    let out = run(&args).unwrap();
    assert!(out.contains("1 kretser importert"));
    assert_eq!(out.matches("--- Heizkurve").count(), 1);

    let _ = fs::remove_file(path);
}

#[test]
fn export_writes_csv_that_imports_back() {
    let path = "tests/tmp_cli_export.csv";
    let _ = fs::remove_file(path);

    let args = CliArgs::try_parse_from(["heatcurve", "47.5", "22", "--export", path]).unwrap();
    let out = run(&args).unwrap();
    assert!(out.contains("Endepunkt (-20°C)"));
    assert!(out.contains("lagret til"));

    let text = fs::read_to_string(path).unwrap();
    let mut reg = CircuitRegistry::with_count(1);
    import_csv(&text, &mut reg).unwrap();
    assert_eq!(reg.get(0).unwrap(), CircuitSettings { endpoint: 47.5, footpoint: 22.0 });

    let _ = fs::remove_file(path);
}

#[test]
fn missing_import_file_is_error() {
    let args = CliArgs::try_parse_from(["heatcurve", "--import", "tests/finnes_ikke.csv"]).unwrap();
    assert!(build_registry(&args).is_err());
}
