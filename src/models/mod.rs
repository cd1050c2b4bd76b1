//! Core data models for the OEE engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Records are typed and validated at the store-read boundary so the
//! aggregation stages never handle unknown shapes.

mod aggregation_result;
mod dwell_record;
mod operator;
mod production_order;

pub use aggregation_result::{
    DashboardSnapshot, DeviationKpis, FinancialDeviations, OrderFinancials,
};
pub use dwell_record::DwellRecord;
pub use operator::{Operator, OperatorStatus};
pub use production_order::{OrderStatus, ProductModel, ProductionOrder, RoutingStep};
