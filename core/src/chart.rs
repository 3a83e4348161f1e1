// core/src/chart.rs
// Grafdata for dashbordet (ingen styling – det eier rendringslaget).
use serde::Serialize;

use crate::curve::{endpoint_readout, heating_curve_shifted, linspace, ShiftedCurve, ENDPOINT_OUTDOOR, SUPPLY_MAX, SUPPLY_MIN};
use crate::models::FOOTPOINT_DOMAIN;

pub const X_RANGE: (f64, f64) = (-20.0, 40.0);
pub const Y_RANGE: (f64, f64) = (SUPPLY_MIN, SUPPLY_MAX);
const DIAGONAL_SAMPLES: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveChart {
    pub curve: ShiftedCurve,
    pub endpoint_marker: Marker,
    pub footing_marker: Marker,
    /// Fotpunkt-forskyvning: y = x over fotpunktdomenet
    pub diagonal: Line,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl CurveChart {
    /// Bygg fra en allerede beregnet kurve (f.eks. fra `CurveCache`).
    pub fn from_curve(curve: ShiftedCurve, footpoint: f64) -> Self {
        let readout = endpoint_readout(&curve);
        let diag = linspace(FOOTPOINT_DOMAIN.min, FOOTPOINT_DOMAIN.max, DIAGONAL_SAMPLES);

        Self {
            endpoint_marker: Marker {
                x: ENDPOINT_OUTDOOR,
                y: readout,
                label: format!("{readout:.1}°C"),
            },
            footing_marker: Marker {
                x: footpoint,
                y: footpoint,
                label: format!("{footpoint}°C"),
            },
            diagonal: Line { x: diag.clone(), y: diag },
            curve,
            x_range: X_RANGE,
            y_range: Y_RANGE,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn build_chart(endpoint: f64, footpoint: f64, grid: &[f64]) -> CurveChart {
    CurveChart::from_curve(heating_curve_shifted(grid, endpoint, footpoint), footpoint)
}
