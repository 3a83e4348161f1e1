// Python-binding for Dash-appen. Bygges med `--features python`.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::curve::canonical_grid;
use crate::error::{CurveError, ParseError};
use crate::models::{CircuitRegistry, CircuitSettings};

// (name, ep, fp) – samme rekkefølge som CSV-kolonnene
type Row = (String, f64, f64);

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn registry_from_rows(rows: &[Row]) -> Result<CircuitRegistry, CurveError> {
    let mut reg = CircuitRegistry::new(rows.iter().map(|r| r.0.clone()));
    for (i, (_, ep, fp)) in rows.iter().enumerate() {
        reg.set(i, CircuitSettings { endpoint: *ep, footpoint: *fp })?;
    }
    Ok(reg)
}

fn rows_from_registry(reg: &CircuitRegistry) -> Vec<Row> {
    reg.iter()
        .map(|c| (c.name.clone(), c.settings.endpoint, c.settings.footpoint))
        .collect()
}

#[pyfunction]
fn evaluate(t_out: f64, ep: f64, fp: f64) -> f64 {
    crate::curve::evaluate(t_out, ep, fp)
}

#[pyfunction]
fn evaluate_shifted(t_out_base: Vec<f64>, ep: f64, footing_point: f64) -> (Vec<f64>, Vec<f64>) {
    crate::curve::evaluate_shifted(&t_out_base, ep, footing_point)
}

#[pyfunction]
fn interpolate_at(x: f64, xs: Vec<f64>, ys: Vec<f64>) -> f64 {
    crate::interp::interpolate_at(x, &xs, &ys)
}

/// Faktisk endepunkt på standardgridet.
#[pyfunction]
fn endpoint_readout(ep: f64, fp: f64) -> f64 {
    let curve = crate::curve::heating_curve_shifted(canonical_grid(), ep, fp);
    crate::curve::endpoint_readout(&curve)
}

#[pyfunction]
fn export_csv(rows: Vec<Row>) -> PyResult<String> {
    let reg = registry_from_rows(&rows).map_err(to_py_err)?;
    crate::csv_io::export_csv(&reg).map_err(to_py_err)
}

// Rader anvendt før en feil beholdes; årsaken returneres ved siden av.
fn import_rows(
    current: &[Row],
    import: impl FnOnce(&mut CircuitRegistry) -> Result<usize, ParseError>,
) -> Result<(Vec<Row>, Option<String>), CurveError> {
    let mut reg = registry_from_rows(current)?;
    let cause = import(&mut reg).err().map(|e| e.cause);
    Ok((rows_from_registry(&reg), cause))
}

/// Importer CSV over gjeldende rader; returnerer `(rader, feilårsak | None)`.
#[pyfunction]
fn import_csv(text: &str, current: Vec<Row>) -> PyResult<(Vec<Row>, Option<String>)> {
    import_rows(&current, |reg| crate::csv_io::import_csv(text, reg)).map_err(to_py_err)
}

#[pyfunction]
fn import_upload(contents: &str, current: Vec<Row>) -> PyResult<(Vec<Row>, Option<String>)> {
    import_rows(&current, |reg| crate::csv_io::import_upload(contents, reg)).map_err(to_py_err)
}

#[pyfunction]
fn chart_json(ep: f64, fp: f64) -> PyResult<String> {
    crate::chart::build_chart(ep, fp, canonical_grid())
        .to_json()
        .map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn heatcurve_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_shifted, m)?)?;
    m.add_function(wrap_pyfunction!(interpolate_at, m)?)?;
    m.add_function(wrap_pyfunction!(endpoint_readout, m)?)?;

    // CSV inn/ut
    m.add_function(wrap_pyfunction!(export_csv, m)?)?;
    m.add_function(wrap_pyfunction!(import_csv, m)?)?;
    m.add_function(wrap_pyfunction!(import_upload, m)?)?;

    m.add_function(wrap_pyfunction!(chart_json, m)?)?;
    Ok(())
}
