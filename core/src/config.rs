use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::curve::{linspace, GRID_SAMPLES, GRID_START, GRID_STOP};
use crate::error::CurveError;
use crate::models::CircuitRegistry;

fn default_circuit_names() -> Vec<String> {
    (1..=3).map(|i| format!("Heizkreis {i}")).collect()
}
fn default_grid_start() -> f64 {
    GRID_START
}
fn default_grid_stop() -> f64 {
    GRID_STOP
}
fn default_grid_samples() -> usize {
    GRID_SAMPLES
}

/// Dashbord-oppsett: hvilke kretser som vises og gridet kurvene tegnes på.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_circuit_names")]
    pub circuit_names: Vec<String>,
    #[serde(default = "default_grid_start")]
    pub grid_start: f64,
    #[serde(default = "default_grid_stop")]
    pub grid_stop: f64,
    #[serde(default = "default_grid_samples")]
    pub grid_samples: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            circuit_names: default_circuit_names(),
            grid_start: GRID_START,
            grid_stop: GRID_STOP,
            grid_samples: GRID_SAMPLES,
        }
    }
}

impl DashboardConfig {
    pub fn grid(&self) -> Vec<f64> {
        linspace(self.grid_start, self.grid_stop, self.grid_samples)
    }

    pub fn registry(&self) -> CircuitRegistry {
        CircuitRegistry::new(self.circuit_names.iter().cloned())
    }

    pub fn from_json(json: &str) -> Result<Self, CurveError> {
        let mut de = serde_json::Deserializer::from_str(json);
        spte::deserialize(&mut de).map_err(|e| CurveError::Config {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }
}

/// Leser konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres standardoppsettet.
pub fn load_config(path: &str) -> Result<DashboardConfig, CurveError> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg = DashboardConfig::from_json(&contents)?;
        info!("konfig lastet fra {} ({} kretser)", path, cfg.circuit_names.len());
        Ok(cfg)
    } else {
        warn!("fant ikke konfig på {path}, bruker standard");
        Ok(DashboardConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &DashboardConfig, path: &str) -> Result<(), CurveError> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    info!("konfig lagret til {path}");
    Ok(())
}
