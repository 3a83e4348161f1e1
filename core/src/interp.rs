// core/src/interp.rs

/// Stykkevis lineært tabelloppslag (samme semantikk som numpy.interp).
///
/// `xs` må være stigende. Utenfor tabellen returneres nærmeste randverdi,
/// det ekstrapoleres aldri. Ulik lengde på `xs`/`ys` bruker felles prefiks.
/// Tom tabell eller NaN-oppslag gir NaN (ingen feil signaleres for numerikk).
pub fn interpolate_at(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // første indeks med xs[j] > x, alltid i 1..n-1 her
    let j = xs.partition_point(|&v| v <= x);
    let (x0, x1) = (xs[j - 1], xs[j]);
    let (y0, y1) = (ys[j - 1], ys[j]);

    let slope = (y1 - y0) / (x1 - x0);
    slope * (x - x0) + y0
}

/// Oppslag for flere x-verdier mot samme tabell.
pub fn interpolate_many(xq: &[f64], xs: &[f64], ys: &[f64]) -> Vec<f64> {
    xq.iter().map(|&x| interpolate_at(x, xs, ys)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_linear() {
        let xs = [0.0, 10.0];
        let ys = [20.0, 40.0];
        assert!((interpolate_at(5.0, &xs, &ys) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn exact_knot_returns_knot_value() {
        let xs = [-20.0, 0.0, 20.0];
        let ys = [50.0, 35.0, 20.0];
        assert_eq!(interpolate_at(0.0, &xs, &ys), 35.0);
    }

    #[test]
    fn single_point_table() {
        assert_eq!(interpolate_at(-100.0, &[1.0], &[7.0]), 7.0);
        assert_eq!(interpolate_at(100.0, &[1.0], &[7.0]), 7.0);
    }

    #[test]
    fn empty_table_is_nan() {
        assert!(interpolate_at(0.0, &[], &[]).is_nan());
    }
}
