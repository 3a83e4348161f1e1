// core/src/curve.rs
// Heizkurve: utetemperatur → tur-settpunkt (varmepumpe), pluss fotpunkt-forskyvning.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::interp::interpolate_at;

// Empiriske kurvetilpasningskonstanter (faste, ikke tilpasset runtime)
pub const A: f64 = -346.13;
pub const B: f64 = -7.05;
pub const C: f64 = -0.055;
pub const D: f64 = 247.26;

/// Kanonisk fotpunkt (°C) for den uforskjøvede basiskurven.
pub const FOOTING_POINT_BASE: f64 = 20.0;
/// Utetemperatur (°C) der endepunktet er definert.
pub const ENDPOINT_OUTDOOR: f64 = -20.0;
/// Fysiske grenser for tur-settpunkt (°C).
pub const SUPPLY_MIN: f64 = 0.0;
pub const SUPPLY_MAX: f64 = 70.0;

pub const GRID_START: f64 = -55.0;
pub const GRID_STOP: f64 = 20.0;
pub const GRID_SAMPLES: usize = 400;

static CANONICAL_GRID: Lazy<Vec<f64>> = Lazy::new(|| linspace(GRID_START, GRID_STOP, GRID_SAMPLES));

/// Forskjøvet kurve: parallelle serier, samme lengde som input-gridet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShiftedCurve {
    pub t_out: Vec<f64>,
    pub t_set: Vec<f64>,
}

impl ShiftedCurve {
    pub fn len(&self) -> usize {
        self.t_out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t_out.is_empty()
    }

    /// Tabelloppslag i kurven (klemt til randverdiene).
    pub fn value_at(&self, t_out: f64) -> f64 {
        interpolate_at(t_out, &self.t_out, &self.t_set)
    }
}

/// Glatt basiskurve (eksponentiell/rasjonal tilpasning).
///
/// Kun validert for `t_out` i [-20, 20] innenfor sliderdomenene
/// (EP 20–70, FP 5–35). `denom` kan gå mot null utenfor dette; da blir
/// resultatet inf/NaN og det aksepteres uten validering.
pub fn refined_smooth_heating_curve(t_out: f64, ep: f64, fp: f64) -> f64 {
    let tau = (fp + 20.0) / 3.0;
    let norm = 1.0 - ((-20.0 - fp) / tau).exp();

    let delta = t_out - fp;
    let denom = A + B * delta + C * delta * delta + D * (t_out / 50.0).exp();

    fp + (ep - fp) * (1.0 - (delta / denom).exp()) / norm
}

/// Basiskurven for t_out ≥ -20, lineær sekant-ekstrapolering under.
pub fn extended_heating_curve(t_out: f64, ep: f64, fp: f64) -> f64 {
    if t_out >= ENDPOINT_OUTDOOR {
        return refined_smooth_heating_curve(t_out, ep, fp);
    }

    let f_ep = refined_smooth_heating_curve(ENDPOINT_OUTDOOR, ep, fp);
    let slope = f_ep - refined_smooth_heating_curve(ENDPOINT_OUTDOOR - 1.0, ep, fp);
    f_ep + slope * (t_out - ENDPOINT_OUTDOOR)
}

/// Enkeltpunkt-evaluering (utvidet kurve).
#[inline]
pub fn evaluate(t_out: f64, ep: f64, fp: f64) -> f64 {
    extended_heating_curve(t_out, ep, fp)
}

/// Elementvis evaluering, identisk med `evaluate` per element.
pub fn evaluate_series(t_out: &[f64], ep: f64, fp: f64) -> Vec<f64> {
    t_out.iter().map(|&t| extended_heating_curve(t, ep, fp)).collect()
}

/// Forskyv basiskurven (fotpunkt 20) slik at fotpunktet havner på (fp, fp).
/// Samme skift brukes på begge akser; settpunktet klemmes til [0, 70].
pub fn heating_curve_shifted(t_out_base: &[f64], endpoint_base: f64, footing_point: f64) -> ShiftedCurve {
    let shift = footing_point - FOOTING_POINT_BASE;

    let mut t_out = Vec::with_capacity(t_out_base.len());
    let mut t_set = Vec::with_capacity(t_out_base.len());

    for &t in t_out_base {
        let base = extended_heating_curve(t, endpoint_base, FOOTING_POINT_BASE);
        t_out.push(t + shift);
        t_set.push((base + shift).clamp(SUPPLY_MIN, SUPPLY_MAX));
    }

    ShiftedCurve { t_out, t_set }
}

/// Tuppel-variant av `heating_curve_shifted` (for grafkomponenten).
pub fn evaluate_shifted(t_out_base: &[f64], ep: f64, footing_point: f64) -> (Vec<f64>, Vec<f64>) {
    let c = heating_curve_shifted(t_out_base, ep, footing_point);
    (c.t_out, c.t_set)
}

/// Faktisk endepunkt-verdi: kurven interpolert ved -20 °C ute.
pub fn endpoint_readout(curve: &ShiftedCurve) -> f64 {
    curve.value_at(ENDPOINT_OUTDOOR)
}

/// `n` jevnt fordelte punkter; siste punkt er nøyaktig `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// 400 punkter over [-55, 20] – gridet dashbordet tegner kurvene på.
pub fn canonical_grid() -> &'static [f64] {
    &CANONICAL_GRID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_curve_hits_footing_point_exactly() {
        // Δ = 0 ⇒ exp(0) = 1 ⇒ resultat = FP
        assert_eq!(refined_smooth_heating_curve(20.0, 50.0, 20.0), 20.0);
    }

    #[test]
    fn linspace_endpoints() {
        let g = linspace(-55.0, 20.0, 400);
        assert_eq!(g.len(), 400);
        assert_eq!(g[0], -55.0);
        assert_eq!(g[399], 20.0);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn canonical_grid_is_shared() {
        assert_eq!(canonical_grid().len(), GRID_SAMPLES);
        assert!(std::ptr::eq(canonical_grid(), canonical_grid()));
    }
}
