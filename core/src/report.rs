use crate::curve::{canonical_grid, endpoint_readout, heating_curve_shifted};

/// Tekstrapport: settpunkt per 5 °C utetemperatur + faktisk endepunkt.
pub fn curve_report(endpoint: f64, footpoint: f64) -> String {
    let curve = heating_curve_shifted(canonical_grid(), endpoint, footpoint);

    let mut out = format!("--- Heizkurve (EP={endpoint}°C, FP={footpoint}°C) ---\n");
    out.push_str(&format!("{:>8} | {:>8}\n", "ute °C", "tur °C"));
    for t in (-20..=20).step_by(5) {
        let t = t as f64;
        out.push_str(&format!("{:>8.1} | {:>8.1}\n", t, curve.value_at(t)));
    }
    out.push_str(&format!("Endepunkt (-20°C): {:.1}°C\n", endpoint_readout(&curve)));
    out
}
