//! Output models for the aggregation engine.
//!
//! The engine owns no persistent state; these types capture the computed
//! result of one evaluation over a snapshot of the production fleet.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Operator, OrderStatus};

/// Per-order planned/actual reconciliation and financial figures.
///
/// One row of the dashboard's cost table. Cost fields are `None` when no
/// operator rate data was available for the order's dwell records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderFinancials {
    /// The order's unique identifier.
    pub order_id: String,
    /// The human-readable order number.
    pub order_number: String,
    /// The order's lifecycle status at evaluation time.
    pub status: OrderStatus,
    /// Planned budget in hours (sum of the routing's cycle times).
    pub planned_hours: Decimal,
    /// Actual dwell time in hours (clamped, open records accruing).
    pub actual_hours: Decimal,
    /// Planned minus actual hours. Positive means ahead of budget.
    pub deviation_hours: Decimal,
    /// Planned over actual as a percentage, rounded to one decimal place.
    pub efficiency_pct: Decimal,
    /// Planned hours priced at the blended operator rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_cost: Option<Decimal>,
    /// Actual hours priced at the blended operator rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<Decimal>,
    /// Planned cost minus actual cost. Positive means under budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_deviation: Option<Decimal>,
    /// True when the order is behind budget and has actually started.
    pub is_late: bool,
}

/// Fleet-level KPIs for the financial-deviation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationKpis {
    /// Sum of cost deviations across orders with rate data.
    pub global_balance: Decimal,
    /// True when the global balance is at or above zero.
    pub is_positive: bool,
    /// Number of orders in the windowed table.
    pub order_count: usize,
}

/// The financial-deviation view restricted to a trailing activity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialDeviations {
    /// The window length in days that was applied.
    pub window_days: u32,
    /// Per-order rows with dwell activity inside the window.
    pub per_order_financials: Vec<OrderFinancials>,
    /// Fleet-level KPIs over the windowed rows.
    pub kpis: DeviationKpis,
}

/// The complete dashboard snapshot computed from one fleet evaluation.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use shopfloor_oee::models::DashboardSnapshot;
///
/// let snapshot = DashboardSnapshot {
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     in_progress_count: 0,
///     delayed_count: 0,
///     bottleneck_station: "no active swarm".to_string(),
///     total_reading_count: 0,
///     global_oee_pct: Decimal::from(100),
///     per_order_financials: vec![],
///     top_operators: vec![],
/// };
/// assert_eq!(snapshot.global_oee_pct, Decimal::from(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The evaluation instant the snapshot was computed against.
    ///
    /// This is the same `now` used to value open dwell records, so two
    /// snapshots computed against the same instant are identical.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the snapshot.
    pub engine_version: String,
    /// Number of orders currently in progress.
    pub in_progress_count: usize,
    /// Number of started orders behind their planned budget.
    pub delayed_count: usize,
    /// The station holding the most open dwell records, or the
    /// "no active swarm" sentinel when nothing is in flight.
    pub bottleneck_station: String,
    /// Total dwell readings across the fleet (telemetry volume).
    pub total_reading_count: usize,
    /// Global OEE percentage, capped at 100.
    pub global_oee_pct: Decimal,
    /// The per-order cost table (orders with any signal).
    pub per_order_financials: Vec<OrderFinancials>,
    /// Top active operators ranked by performance score.
    pub top_operators: Vec<Operator>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_fields_skipped_when_absent() {
        let row = OrderFinancials {
            order_id: "ord_001".to_string(),
            order_number: "OF-2026-0001".to_string(),
            status: OrderStatus::InProgress,
            planned_hours: Decimal::from(10),
            actual_hours: Decimal::from(8),
            deviation_hours: Decimal::from(2),
            efficiency_pct: Decimal::new(1250, 1),
            planned_cost: None,
            actual_cost: None,
            cost_deviation: None,
            is_late: false,
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("planned_cost"));
        assert!(!json.contains("cost_deviation"));
    }

    #[test]
    fn test_kpis_roundtrip() {
        let kpis = DeviationKpis {
            global_balance: Decimal::new(-12550, 2),
            is_positive: false,
            order_count: 7,
        };

        let json = serde_json::to_string(&kpis).unwrap();
        let parsed: DeviationKpis = serde_json::from_str(&json).unwrap();
        assert_eq!(kpis, parsed);
    }
}
