//! The production-store capability consumed by the engine.
//!
//! The engine never talks to a concrete database; it receives a
//! [`ProductionStore`] handle at each entry point. Production deployments
//! back the trait with the hosted relational store, tests inject
//! [`MemoryStore`].

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{DwellRecord, Operator, OrderStatus, ProductionOrder};

/// One production order together with its dwell telemetry.
///
/// The routing budget travels embedded in the order's product model, so a
/// bundle is everything the pipeline needs to evaluate one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBundle {
    /// The order, with its embedded model and routing.
    pub order: ProductionOrder,
    /// All dwell records logged for the order, open and closed.
    #[serde(default)]
    pub dwell_records: Vec<DwellRecord>,
}

/// A currently-open dwell reading, projected for bottleneck detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenDwell {
    /// The station where the unit is currently present.
    pub station: String,
    /// The order the unit belongs to.
    pub order_id: String,
}

/// Read access to the production fleet plus the one write the engine's
/// boundary needs: atomic tooling-usage increments.
///
/// Every read returns a snapshot; no ordering is guaranteed between
/// independent calls. A failing read surfaces as
/// [`EngineError::StoreUnavailable`](crate::error::EngineError::StoreUnavailable).
#[async_trait]
pub trait ProductionStore: Send + Sync {
    /// Lists orders with their telemetry, optionally filtered by status.
    ///
    /// An empty filter means all statuses.
    async fn list_orders(&self, filter: &[OrderStatus]) -> EngineResult<Vec<OrderBundle>>;

    /// Lists every currently-open dwell reading across the fleet.
    async fn list_open_dwell(&self) -> EngineResult<Vec<OpenDwell>>;

    /// Lists all operators, active and inactive, for rate resolution.
    async fn list_operators(&self) -> EngineResult<Vec<Operator>>;

    /// Lists active operators ranked by performance score, best first.
    ///
    /// Operators without a score rank last.
    async fn list_active_operators_ranked(&self, limit: usize) -> EngineResult<Vec<Operator>>;

    /// Atomically increments a tooling (mold) usage counter.
    ///
    /// Returns the new count. Implementations must perform the increment
    /// as a single conditional update or transaction; an application-tier
    /// read-then-write pair loses updates under concurrent order emission.
    async fn increment_tool_usage(&self, tool_id: &str) -> EngineResult<u64>;
}
