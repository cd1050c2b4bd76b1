//! The production time & deviation aggregation pipeline.
//!
//! Three tightly-coupled stages run leaves-first: the telemetry normalizer
//! turns raw dwell records into clamped elapsed-hours, the budget resolver
//! sums the routing's cycle-time entries, and the deviation calculator
//! combines both into per-order and fleet-level metrics. The summary stage
//! assembles the dashboard snapshot and the windowed financial view.

mod bottleneck;
mod budget;
mod deviation;
mod normalizer;
mod summary;

pub use bottleneck::{detect_bottleneck, global_oee_pct, NO_ACTIVE_SWARM};
pub use budget::resolve_budget;
pub use deviation::{assess_order, efficiency_pct, weighted_hourly_rate};
pub use normalizer::{normalize_dwell, NormalizedTelemetry};
pub use summary::{compute_dashboard_snapshot, compute_financial_deviations};
