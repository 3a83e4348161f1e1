// tests/test_config.rs
use heatcurve_core::{load_config, save_config, CurveError, DashboardConfig};
use std::fs;

#[test]
fn missing_file_gives_default_config() {
    let cfg = load_config("tests/finnes_ikke.json").expect("load_config feilet");
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.circuit_names.len(), 3);
    assert_eq!(cfg.grid().len(), 400);
}

#[test]
fn roundtrip_config_save_and_load() {
    let path = "tests/tmp_config.json";
    let _ = fs::remove_file(path);

    let cfg = DashboardConfig {
        circuit_names: vec!["Fußboden".into(), "Radiatoren".into()],
        grid_start: -30.0,
        grid_stop: 20.0,
        grid_samples: 101,
    };
    save_config(&cfg, path).expect("save_config feilet");
    let loaded = load_config(path).expect("load_config feilet");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.grid()[0], -30.0);
    assert_eq!(loaded.registry().len(), 2);

    let _ = fs::remove_file(path);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = DashboardConfig::from_json(r#"{"circuit_names": ["A"]}"#).unwrap();
    assert_eq!(cfg.circuit_names, vec!["A".to_string()]);
    assert_eq!(cfg.grid_samples, 400);
    assert_eq!(cfg.grid_start, -55.0);
}

#[test]
fn parse_error_reports_json_path() {
    let err = DashboardConfig::from_json(r#"{"grid_samples": "mange"}"#).unwrap_err();
    match err {
        CurveError::Config { path, .. } => assert_eq!(path, "grid_samples"),
        other => panic!("forventet Config-feil, fikk {other:?}"),
    }
}
