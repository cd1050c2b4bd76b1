//! Production order, product model and routing step types.
//!
//! A production order is one unit of manufacture in flight or completed.
//! Its product model carries the routing (the ordered sequence of planned
//! operations) whose cycle-time budgets feed the deviation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The lifecycle status of a production order.
///
/// Orders are never physically deleted; they move through this vocabulary
/// as work proceeds and remain as archival records once completed.
///
/// # Example
///
/// ```
/// use shopfloor_oee::models::OrderStatus;
///
/// let status = OrderStatus::InProgress;
/// assert!(status.has_started());
/// assert!(!OrderStatus::Planned.has_started());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Production is planned but no work has started yet.
    Planned,
    /// The unit is actively moving through stations.
    InProgress,
    /// The unit is undergoing quality control checks.
    QualityControl,
    /// Work is paused (material shortage, rework decision, etc.).
    OnHold,
    /// The unit has shipped or entered finished-goods stock.
    Completed,
}

impl OrderStatus {
    /// Returns true for every status except [`OrderStatus::Planned`].
    ///
    /// Only started orders can count as delayed: a purely-planned order
    /// has accrued no actual time and cannot yet be late.
    pub fn has_started(self) -> bool {
        !matches!(self, OrderStatus::Planned)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Planned => write!(f, "PLANNED"),
            OrderStatus::InProgress => write!(f, "IN_PROGRESS"),
            OrderStatus::QualityControl => write!(f, "QUALITY_CONTROL"),
            OrderStatus::OnHold => write!(f, "ON_HOLD"),
            OrderStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// One planned operation in a product model's routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingStep {
    /// The position of this step within the routing sequence.
    pub sequence: u32,
    /// The station where this operation is performed.
    pub station: String,
    /// The planned cycle time for this operation, in hours.
    ///
    /// `None` (or zero) means "not yet estimated" and contributes nothing
    /// to the planned budget. If a step represents parallel stations the
    /// routing must encode that by not double-listing it; the budget is a
    /// flat sum.
    #[serde(default)]
    pub cycle_hours: Option<Decimal>,
}

/// A product model and its routing/process plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductModel {
    /// Unique identifier for the model.
    pub id: String,
    /// Human-readable model name (e.g. a hull designation).
    pub name: String,
    /// The ordered routing steps for this model.
    ///
    /// An empty routing means the budget has not been planned yet; the
    /// engine treats that as a zero planned budget, never as an error.
    #[serde(default)]
    pub routing: Vec<RoutingStep>,
}

/// One unit of manufacture in flight or completed.
///
/// # Example
///
/// ```
/// use shopfloor_oee::models::{OrderStatus, ProductModel, ProductionOrder};
///
/// let order = ProductionOrder {
///     id: "ord_001".to_string(),
///     order_number: "OF-2026-0042".to_string(),
///     status: OrderStatus::InProgress,
///     customer: "Marina Azul".to_string(),
///     model: ProductModel {
///         id: "mdl_cruiser_32".to_string(),
///         name: "Cruiser 32".to_string(),
///         routing: vec![],
///     },
/// };
/// assert!(order.status.has_started());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionOrder {
    /// Unique identifier for the order.
    pub id: String,
    /// Human-readable order number.
    pub order_number: String,
    /// The current lifecycle status.
    pub status: OrderStatus,
    /// The customer the unit is built for.
    pub customer: String,
    /// The product model being manufactured, with its embedded routing.
    pub model: ProductModel,
}
