//! In-memory production store for tests, demos and benchmarks.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{EngineError, EngineResult};
use crate::models::{Operator, OrderStatus};

use super::{OpenDwell, OrderBundle, ProductionStore};

#[derive(Debug, Default)]
struct Inner {
    bundles: Vec<OrderBundle>,
    operators: Vec<Operator>,
    tool_usage: HashMap<String, u64>,
}

/// An in-memory [`ProductionStore`].
///
/// All state lives behind one lock, which also makes
/// [`increment_tool_usage`](ProductionStore::increment_tool_usage) a true
/// atomic increment: the read and the write of the counter happen under
/// the same exclusive guard.
///
/// # Example
///
/// ```
/// use shopfloor_oee::store::{MemoryStore, ProductionStore};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = MemoryStore::new();
/// store.register_tool("mold_hull_21");
/// assert_eq!(store.increment_tool_usage("mold_hull_21").await.unwrap(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an order bundle to the fleet.
    pub fn push_order(&self, bundle: OrderBundle) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .bundles
            .push(bundle);
    }

    /// Adds an operator to the roster.
    pub fn push_operator(&self, operator: Operator) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .operators
            .push(operator);
    }

    /// Registers a tooling resource with a zero usage counter.
    pub fn register_tool(&self, tool_id: &str) {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .tool_usage
            .insert(tool_id.to_string(), 0);
    }

    /// Returns the current usage count for a tooling resource.
    pub fn tool_usage(&self, tool_id: &str) -> Option<u64> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .tool_usage
            .get(tool_id)
            .copied()
    }
}

#[async_trait]
impl ProductionStore for MemoryStore {
    async fn list_orders(&self, filter: &[OrderStatus]) -> EngineResult<Vec<OrderBundle>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner
            .bundles
            .iter()
            .filter(|b| filter.is_empty() || filter.contains(&b.order.status))
            .cloned()
            .collect())
    }

    async fn list_open_dwell(&self) -> EngineResult<Vec<OpenDwell>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner
            .bundles
            .iter()
            .flat_map(|b| b.dwell_records.iter())
            .filter(|r| r.is_open())
            .map(|r| OpenDwell {
                station: r.station.clone(),
                order_id: r.order_id.clone(),
            })
            .collect())
    }

    async fn list_operators(&self) -> EngineResult<Vec<Operator>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.operators.clone())
    }

    async fn list_active_operators_ranked(&self, limit: usize) -> EngineResult<Vec<Operator>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut ranked: Vec<Operator> = inner
            .operators
            .iter()
            .filter(|o| o.is_active())
            .cloned()
            .collect();
        // Best score first; unscored operators rank last.
        ranked.sort_by(|a, b| b.performance_score.cmp(&a.performance_score));
        ranked.truncate(limit);
        Ok(ranked)
    }

    async fn increment_tool_usage(&self, tool_id: &str) -> EngineResult<u64> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let counter = inner
            .tool_usage
            .get_mut(tool_id)
            .ok_or_else(|| EngineError::ToolNotFound {
                tool_id: tool_id.to_string(),
            })?;
        *counter += 1;
        Ok(*counter)
    }
}
