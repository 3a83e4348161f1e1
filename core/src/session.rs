// core/src/session.rs
use std::sync::Arc;

use log::{debug, warn};

use crate::cache::CurveCache;
use crate::chart::CurveChart;
use crate::config::DashboardConfig;
use crate::csv_io;
use crate::curve::{endpoint_readout, ShiftedCurve};
use crate::error::{CurveError, ParseError};
use crate::metrics::Metrics;
use crate::models::{CircuitRegistry, CircuitSettings};

/// Tilstand for én dashbord-sesjon.
///
/// Hver sesjon eier sitt eget kretsregister; kurve-cachen kan deles
/// mellom sesjoner siden kurvene kun avhenger av (ep, fp).
#[derive(Debug, Clone)]
pub struct DashboardSession {
    registry: CircuitRegistry,
    selected: usize,
    cache: CurveCache,
}

impl DashboardSession {
    pub fn new(registry: CircuitRegistry, cache: CurveCache) -> Self {
        Self { registry, selected: 0, cache }
    }

    pub fn from_config(cfg: &DashboardConfig, metrics: Metrics) -> Self {
        Self::new(cfg.registry(), CurveCache::new(cfg.grid(), metrics))
    }

    pub fn registry(&self) -> &CircuitRegistry {
        &self.registry
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Velg krets i dropdown; returnerer verdiene sliderne skal hoppe til.
    pub fn select(&mut self, index: usize) -> Result<CircuitSettings, CurveError> {
        let settings = self.registry.get(index)?;
        self.selected = index;
        Ok(settings)
    }

    pub fn set_endpoint(&mut self, endpoint: f64) -> Result<(), CurveError> {
        self.registry.set_endpoint(self.selected, endpoint)
    }

    pub fn set_footpoint(&mut self, footpoint: f64) -> Result<(), CurveError> {
        self.registry.set_footpoint(self.selected, footpoint)
    }

    pub fn curve(&self, index: usize) -> Result<Arc<ShiftedCurve>, CurveError> {
        let s = self.registry.get(index)?;
        Ok(self.cache.get_curve(s.endpoint, s.footpoint))
    }

    /// Alle kretsers kurver, i indeksrekkefølge.
    pub fn curves(&self) -> Vec<(String, Arc<ShiftedCurve>)> {
        self.registry
            .iter()
            .map(|c| (c.name.clone(), self.cache.get_curve(c.settings.endpoint, c.settings.footpoint)))
            .collect()
    }

    /// Kurvene som er huket av i sjekklisten.
    pub fn visible_curves(&self, visible: &[usize]) -> Result<Vec<(String, Arc<ShiftedCurve>)>, CurveError> {
        visible
            .iter()
            .map(|&i| -> Result<_, CurveError> { Ok((self.registry.name(i)?.to_string(), self.curve(i)?)) })
            .collect()
    }

    pub fn endpoint_readout(&self) -> Result<f64, CurveError> {
        let curve = self.curve(self.selected)?;
        Ok(endpoint_readout(&curve))
    }

    pub fn chart_for_selected(&self) -> Result<CurveChart, CurveError> {
        let s = self.registry.get(self.selected)?;
        let curve = self.cache.get_curve(s.endpoint, s.footpoint);
        Ok(CurveChart::from_curve(ShiftedCurve::clone(&curve), s.footpoint))
    }

    pub fn export_csv(&self) -> Result<String, CurveError> {
        csv_io::export_csv(&self.registry)
    }

    pub fn import_csv(&mut self, text: &str) -> Result<usize, ParseError> {
        let res = csv_io::import_csv(text, &mut self.registry);
        self.record_import(&res);
        res
    }

    pub fn import_upload(&mut self, contents: &str) -> Result<usize, ParseError> {
        let res = csv_io::import_upload(contents, &mut self.registry);
        self.record_import(&res);
        res
    }

    fn record_import(&self, res: &Result<usize, ParseError>) {
        let metrics = self.cache.metrics();
        match res {
            Ok(n) => {
                metrics.csv_rows_imported_total.inc_by(*n as u64);
                debug!("sesjon importerte {n} kretser");
            }
            Err(e) => {
                metrics.csv_import_errors_total.inc();
                warn!("{e}");
            }
        }
    }
}
