//! Heizkurven-kjerne for varmepumpe-dashbordet.
//!
//! Kurvemodellen (`curve`) er ren og tilstandsløs; tilstand per sesjon
//! ligger i `CircuitRegistry`/`DashboardSession`.

pub mod cache;
pub mod chart;
pub mod cli;
pub mod config;
pub mod csv_io;
pub mod curve;
pub mod error;
pub mod interp;
pub mod metrics;
pub mod models;
pub mod report;
pub mod session;

#[cfg(feature = "python")]
mod py;

pub use cache::CurveCache;
pub use chart::{build_chart, CurveChart, Marker};
pub use config::{load_config, save_config, DashboardConfig};
pub use csv_io::{decode_upload, export_csv, export_file_name, import_csv, import_upload, registry_from_csv};
pub use curve::{
    canonical_grid, endpoint_readout, evaluate, evaluate_series, evaluate_shifted, extended_heating_curve,
    heating_curve_shifted, linspace, refined_smooth_heating_curve, ShiftedCurve,
};
pub use error::{CurveError, ParseError};
pub use interp::{interpolate_at, interpolate_many};
pub use metrics::Metrics;
pub use models::{Circuit, CircuitRegistry, CircuitSettings, SliderDomain, ENDPOINT_DOMAIN, FOOTPOINT_DOMAIN};
pub use report::curve_report;
pub use session::DashboardSession;
