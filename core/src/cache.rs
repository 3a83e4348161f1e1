// core/src/cache.rs
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;
use ordered_float::OrderedFloat;

use crate::curve::{canonical_grid, heating_curve_shifted, ShiftedCurve};
use crate::metrics::Metrics;

type CurveKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Standard kapasitet; sliderne gir ~6000 mulige par, de fleste brukes aldri.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
struct Entries {
    curves: HashMap<CurveKey, Arc<ShiftedCurve>>,
    // innsettingsrekkefølge, eldste først ut
    order: VecDeque<CurveKey>,
}

/// Memoiserte forskjøvne kurver per (endepunkt, fotpunkt), begrenset til
/// `capacity` oppføringer (FIFO-utkastelse).
/// Klonen deler cache og tellere (trygt på tvers av sesjoner/tråder).
#[derive(Debug, Clone)]
pub struct CurveCache {
    grid: Arc<Vec<f64>>,
    capacity: usize,
    entries: Arc<Mutex<Entries>>,
    metrics: Metrics,
}

impl CurveCache {
    pub fn new(grid: Vec<f64>, metrics: Metrics) -> Self {
        Self::with_capacity(grid, metrics, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(grid: Vec<f64>, metrics: Metrics, capacity: usize) -> Self {
        Self {
            grid: Arc::new(grid),
            capacity: capacity.max(1),
            entries: Arc::new(Mutex::new(Entries::default())),
            metrics,
        }
    }

    /// Cache over standardgridet (400 punkter, -55..20 °C).
    pub fn canonical(metrics: Metrics) -> Self {
        Self::new(canonical_grid().to_vec(), metrics)
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // en panikk i en annen sesjon gjør ikke innholdet ugyldig
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_curve(&self, endpoint: f64, footpoint: f64) -> Arc<ShiftedCurve> {
        let key = (OrderedFloat(endpoint), OrderedFloat(footpoint));

        if let Some(curve) = self.lock().curves.get(&key) {
            self.metrics.curve_cache_hit_total.inc();
            return Arc::clone(curve);
        }

        // beregnes uten lås, så andre sesjoner ikke venter
        debug!("beregner heizkurve ep={endpoint} fp={footpoint} ({} punkter)", self.grid.len());
        let computed = Arc::new(heating_curve_shifted(&self.grid, endpoint, footpoint));
        self.metrics.curve_cache_miss_total.inc();

        let mut entries = self.lock();
        let curve = match entries.curves.entry(key) {
            // en annen tråd rakk det først
            Entry::Occupied(e) => return Arc::clone(e.get()),
            Entry::Vacant(e) => Arc::clone(e.insert(computed)),
        };
        entries.order.push_back(key);

        while entries.curves.len() > self.capacity {
            match entries.order.pop_front() {
                Some(old) => {
                    entries.curves.remove(&old);
                }
                None => break,
            }
        }
        curve
    }

    pub fn len(&self) -> usize {
        self.lock().curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().curves.is_empty()
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.curves.clear();
        entries.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_never_exceeds_capacity() {
        let cache = CurveCache::with_capacity(vec![-20.0, 0.0, 20.0], Metrics::new().unwrap(), 8);
        for i in 0..2000 {
            cache.get_curve(20.0 + i as f64 * 0.01, 20.0);
        }
        assert_eq!(cache.len(), 8);
    }

    #[test]
    fn oldest_entry_is_evicted_first() {
        let metrics = Metrics::new().unwrap();
        let cache = CurveCache::with_capacity(vec![-20.0, 0.0, 20.0], metrics.clone(), 2);
        cache.get_curve(40.0, 20.0);
        cache.get_curve(45.0, 20.0);
        cache.get_curve(50.0, 20.0); // kaster ut 40.0

        cache.get_curve(50.0, 20.0);
        assert_eq!(metrics.curve_cache_hit_total.get(), 1);
        cache.get_curve(40.0, 20.0);
        assert_eq!(metrics.curve_cache_miss_total.get(), 4);
        assert_eq!(cache.len(), 2);
    }
}
