// core/src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::csv_io::{export_csv, registry_from_csv};
use crate::error::{CurveError, ParseError};
use crate::models::{CircuitRegistry, CircuitSettings};
use crate::report::curve_report;

/// heatcurve <ep> <fp> [--export FILE]  |  heatcurve --import FILE [--export FILE]
#[derive(Debug, Parser)]
#[command(name = "heatcurve", version, about = "Heizkurve: tur-settpunkt per utetemperatur")]
pub struct CliArgs {
    /// Endepunkt (°C ved -20 °C ute)
    #[arg(required_unless_present = "import", conflicts_with = "import")]
    pub ep: Option<f64>,

    /// Fotpunkt (°C)
    #[arg(required_unless_present = "import", conflicts_with = "import")]
    pub fp: Option<f64>,

    /// Les kretser fra CSV (name,ep,fp) i stedet for ep/fp
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Skriv kretsene til CSV
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// Register fra argumentene: én krets fra ep/fp, eller alle rekorder i importfilen.
pub fn build_registry(args: &CliArgs) -> Result<CircuitRegistry, CurveError> {
    if let Some(path) = &args.import {
        let text = std::fs::read_to_string(path)?;
        return Ok(registry_from_csv(&text)?);
    }

    match (args.ep, args.fp) {
        (Some(endpoint), Some(footpoint)) => {
            let mut registry = CircuitRegistry::with_count(1);
            registry.set(0, CircuitSettings { endpoint, footpoint })?;
            Ok(registry)
        }
        _ => Err(ParseError::new("ep og fp må oppgis uten --import").into()),
    }
}

/// Kjør hele CLI-flyten og returner teksten som skal skrives ut.
pub fn run(args: &CliArgs) -> Result<String, CurveError> {
    let registry = build_registry(args)?;
    let mut out = String::new();

    if let Some(path) = &args.import {
        out.push_str(&format!("📂 {} kretser importert fra {}\n", registry.len(), path.display()));
    }

    for c in registry.iter() {
        out.push_str(&format!("[{}]\n", c.name));
        out.push_str(&curve_report(c.settings.endpoint, c.settings.footpoint));
    }

    if let Some(path) = &args.export {
        std::fs::write(path, export_csv(&registry)?)?;
        out.push_str(&format!("✅ kretser lagret til {}\n", path.display()));
    }

    Ok(out)
}
