// core/src/metrics.rs
use std::fmt;

use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Tellere for kurve-cache og CSV-import.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub curve_cache_hit_total: IntCounter,
    pub curve_cache_miss_total: IntCounter,
    pub csv_rows_imported_total: IntCounter,
    pub csv_import_errors_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let curve_cache_hit_total =
            IntCounter::new("curve_cache_hit_total", "Forskjøvne kurver hentet fra cache")?;
        let curve_cache_miss_total =
            IntCounter::new("curve_cache_miss_total", "Forskjøvne kurver beregnet på nytt")?;
        let csv_rows_imported_total =
            IntCounter::new("csv_rows_imported_total", "Kretsrader importert fra CSV")?;
        let csv_import_errors_total =
            IntCounter::new("csv_import_errors_total", "CSV-importer som feilet")?;

        registry.register(Box::new(curve_cache_hit_total.clone()))?;
        registry.register(Box::new(curve_cache_miss_total.clone()))?;
        registry.register(Box::new(csv_rows_imported_total.clone()))?;
        registry.register(Box::new(csv_import_errors_total.clone()))?;

        Ok(Self {
            registry,
            curve_cache_hit_total,
            curve_cache_miss_total,
            csv_rows_imported_total,
            csv_import_errors_total,
        })
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("curve_cache_hit_total", &self.curve_cache_hit_total.get())
            .field("curve_cache_miss_total", &self.curve_cache_miss_total.get())
            .field("csv_rows_imported_total", &self.csv_rows_imported_total.get())
            .field("csv_import_errors_total", &self.csv_import_errors_total.get())
            .finish()
    }
}
