//! Snapshot assembly: the engine's two entry points.
//!
//! Both functions take the production store as an explicit handle and the
//! evaluation instant as an explicit parameter, so callers (and tests)
//! fully control what the computation sees. Concurrent invocations are
//! independent; the engine holds no cross-invocation state.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DashboardSnapshot, DeviationKpis, FinancialDeviations, OrderFinancials, OrderStatus,
};
use crate::store::{OrderBundle, ProductionStore};

use super::{
    assess_order, detect_bottleneck, global_oee_pct, normalize_dwell, resolve_budget,
    weighted_hourly_rate,
};

/// One evaluated order: its financials row plus the exact (unrounded)
/// figures that feed fleet totals.
struct EvaluatedOrder {
    row: OrderFinancials,
    exact_planned_hours: Decimal,
    exact_actual_hours: Decimal,
    reading_count: usize,
}

fn evaluate_bundle(
    bundle: &OrderBundle,
    rates: &HashMap<String, Decimal>,
    now: DateTime<Utc>,
) -> EvaluatedOrder {
    let telemetry = normalize_dwell(&bundle.dwell_records, now);
    let planned_hours = resolve_budget(&bundle.order.model);
    let blended_rate = weighted_hourly_rate(&bundle.dwell_records, rates, now);
    let row = assess_order(&bundle.order, planned_hours, &telemetry, blended_rate);

    EvaluatedOrder {
        row,
        exact_planned_hours: planned_hours,
        exact_actual_hours: telemetry.actual_hours,
        reading_count: telemetry.reading_count,
    }
}

/// An order belongs in the cost table only when it carries some signal;
/// zero-budget zero-telemetry orders still count toward fleet totals.
fn has_signal(evaluated: &EvaluatedOrder) -> bool {
    evaluated.exact_planned_hours > Decimal::ZERO
        || evaluated.exact_actual_hours > Decimal::ZERO
}

/// Computes the full dashboard snapshot for the fleet.
///
/// Reads one snapshot of orders, open dwell records and operators from the
/// store, then runs the pipeline per order and assembles the fleet-level
/// figures. Open records are valued against `now`, so two calls with the
/// same `now` and no intervening writes return identical snapshots.
///
/// Fails only when the store itself is unavailable; partial data (missing
/// routing, missing telemetry, missing rates) degrades to zeros and
/// omitted costs, never to an error.
pub async fn compute_dashboard_snapshot(
    store: &dyn ProductionStore,
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> EngineResult<DashboardSnapshot> {
    let bundles = store.list_orders(&[]).await?;
    let open_records = store.list_open_dwell().await?;
    let operators = store.list_operators().await?;
    let top_operators = store
        .list_active_operators_ranked(config.top_operator_limit)
        .await?;

    let rates: HashMap<String, Decimal> = operators
        .iter()
        .map(|o| (o.id.clone(), o.hourly_rate))
        .collect();

    let mut total_planned_hours = Decimal::ZERO;
    let mut total_actual_hours = Decimal::ZERO;
    let mut total_reading_count = 0;
    let mut in_progress_count = 0;
    let mut delayed_count = 0;
    let mut per_order_financials = Vec::new();

    for bundle in &bundles {
        let evaluated = evaluate_bundle(bundle, &rates, now);

        total_planned_hours += evaluated.exact_planned_hours;
        total_actual_hours += evaluated.exact_actual_hours;
        total_reading_count += evaluated.reading_count;
        if bundle.order.status == OrderStatus::InProgress {
            in_progress_count += 1;
        }
        if evaluated.row.is_late {
            delayed_count += 1;
        }
        if has_signal(&evaluated) {
            per_order_financials.push(evaluated.row);
        }
    }

    Ok(DashboardSnapshot {
        generated_at: now,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        in_progress_count,
        delayed_count,
        bottleneck_station: detect_bottleneck(&open_records),
        total_reading_count,
        global_oee_pct: global_oee_pct(total_planned_hours, total_actual_hours),
        per_order_financials,
        top_operators,
    })
}

/// Computes per-order financial deviations restricted to a trailing window.
///
/// An order is inside the window when any of its dwell records is still
/// open or started/ended within the last `window_days` days. Orders with
/// no telemetry at all have no recent activity and are excluded; the
/// dashboard snapshot remains the place where they are counted.
///
/// A zero-day window is rejected as [`EngineError::InvalidWindow`].
pub async fn compute_financial_deviations(
    store: &dyn ProductionStore,
    window_days: u32,
    now: DateTime<Utc>,
) -> EngineResult<FinancialDeviations> {
    if window_days == 0 {
        return Err(EngineError::InvalidWindow { days: window_days });
    }

    let bundles = store.list_orders(&[]).await?;
    let operators = store.list_operators().await?;

    let rates: HashMap<String, Decimal> = operators
        .iter()
        .map(|o| (o.id.clone(), o.hourly_rate))
        .collect();

    let cutoff = now - Duration::days(i64::from(window_days));
    let mut per_order_financials = Vec::new();
    let mut global_balance = Decimal::ZERO;

    for bundle in &bundles {
        let active_in_window = bundle.dwell_records.iter().any(|r| {
            r.is_open() || r.started_at >= cutoff || r.ended_at.is_some_and(|end| end >= cutoff)
        });
        if !active_in_window {
            continue;
        }

        let evaluated = evaluate_bundle(bundle, &rates, now);
        if !has_signal(&evaluated) {
            continue;
        }

        if let Some(cost_deviation) = evaluated.row.cost_deviation {
            global_balance += cost_deviation;
        }
        per_order_financials.push(evaluated.row);
    }

    let kpis = DeviationKpis {
        global_balance,
        is_positive: global_balance >= Decimal::ZERO,
        order_count: per_order_financials.len(),
    };

    Ok(FinancialDeviations {
        window_days,
        per_order_financials,
        kpis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DwellRecord, Operator, OperatorStatus, ProductModel, ProductionOrder, RoutingStep,
    };
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn eval_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap()
    }

    fn make_order(id: &str, status: OrderStatus, planned_hours: i64) -> ProductionOrder {
        let routing = if planned_hours > 0 {
            vec![RoutingStep {
                sequence: 1,
                station: "hull_assembly".to_string(),
                cycle_hours: Some(Decimal::from(planned_hours)),
            }]
        } else {
            vec![]
        };

        ProductionOrder {
            id: id.to_string(),
            order_number: format!("OF-{id}"),
            status,
            customer: "test".to_string(),
            model: ProductModel {
                id: "mdl_test".to_string(),
                name: "Test 10".to_string(),
                routing,
            },
        }
    }

    fn closed_record(order_id: &str, hours: i64, operator_id: Option<&str>) -> DwellRecord {
        let end = eval_time() - Duration::hours(1);
        DwellRecord {
            id: format!("rd_{order_id}_{hours}"),
            order_id: order_id.to_string(),
            station: "hull_assembly".to_string(),
            started_at: end - Duration::hours(hours),
            ended_at: Some(end),
            operator_id: operator_id.map(str::to_string),
        }
    }

    fn make_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.push_operator(Operator {
            id: "op_1".to_string(),
            name: "Marta Silva".to_string(),
            status: OperatorStatus::Active,
            performance_score: Some(Decimal::from(92)),
            hourly_rate: Decimal::from(30),
        });
        store
    }

    #[tokio::test]
    async fn test_snapshot_over_empty_fleet() {
        let store = make_store();
        let snapshot =
            compute_dashboard_snapshot(&store, &EngineConfig::default(), eval_time())
                .await
                .unwrap();

        assert_eq!(snapshot.in_progress_count, 0);
        assert_eq!(snapshot.delayed_count, 0);
        assert_eq!(snapshot.total_reading_count, 0);
        assert_eq!(snapshot.bottleneck_station, super::super::NO_ACTIVE_SWARM);
        assert_eq!(snapshot.global_oee_pct, Decimal::from(100));
        assert!(snapshot.per_order_financials.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_counts_and_rows() {
        let store = make_store();
        // Ahead of budget: 10 planned, 8 actual.
        store.push_order(OrderBundle {
            order: make_order("ahead", OrderStatus::InProgress, 10),
            dwell_records: vec![closed_record("ahead", 8, Some("op_1"))],
        });
        // Behind budget and started: delayed.
        store.push_order(OrderBundle {
            order: make_order("behind", OrderStatus::InProgress, 10),
            dwell_records: vec![closed_record("behind", 12, Some("op_1"))],
        });
        // No signal at all: counted in totals, excluded from the table.
        store.push_order(OrderBundle {
            order: make_order("empty", OrderStatus::Planned, 0),
            dwell_records: vec![],
        });

        let snapshot =
            compute_dashboard_snapshot(&store, &EngineConfig::default(), eval_time())
                .await
                .unwrap();

        assert_eq!(snapshot.in_progress_count, 2);
        assert_eq!(snapshot.delayed_count, 1);
        assert_eq!(snapshot.total_reading_count, 2);
        assert_eq!(snapshot.per_order_financials.len(), 2);
        // 20 planned / 20 actual = 100
        assert_eq!(snapshot.global_oee_pct, Decimal::from(100));
        assert_eq!(snapshot.top_operators.len(), 1);
    }

    /// With no open records the computation is time-independent, so two
    /// invocations with no intervening writes agree exactly.
    #[tokio::test]
    async fn test_snapshot_is_idempotent_without_open_records() {
        let store = make_store();
        store.push_order(OrderBundle {
            order: make_order("a", OrderStatus::InProgress, 10),
            dwell_records: vec![closed_record("a", 8, Some("op_1"))],
        });

        let config = EngineConfig::default();
        let first = compute_dashboard_snapshot(&store, &config, eval_time())
            .await
            .unwrap();
        let second = compute_dashboard_snapshot(&store, &config, eval_time())
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_zero_day_window_is_rejected() {
        let store = make_store();
        let err = compute_financial_deviations(&store, 0, eval_time())
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidWindow { days: 0 }));
    }

    #[tokio::test]
    async fn test_window_excludes_stale_orders() {
        let store = make_store();
        // Recent activity: closed an hour ago.
        store.push_order(OrderBundle {
            order: make_order("recent", OrderStatus::InProgress, 10),
            dwell_records: vec![closed_record("recent", 12, Some("op_1"))],
        });
        // Stale: closed 90 days ago.
        let old_end = eval_time() - Duration::days(90);
        store.push_order(OrderBundle {
            order: make_order("stale", OrderStatus::Completed, 10),
            dwell_records: vec![DwellRecord {
                id: "rd_stale".to_string(),
                order_id: "stale".to_string(),
                station: "finishing".to_string(),
                started_at: old_end - Duration::hours(4),
                ended_at: Some(old_end),
                operator_id: Some("op_1".to_string()),
            }],
        });

        let deviations =
            compute_financial_deviations(&store, 30, eval_time())
                .await
                .unwrap();

        assert_eq!(deviations.kpis.order_count, 1);
        assert_eq!(deviations.per_order_financials[0].order_id, "recent");
        // 10 planned - 12 actual at 30/h -> -60 balance.
        assert_eq!(deviations.kpis.global_balance, Decimal::from(-60));
        assert!(!deviations.kpis.is_positive);
    }

    #[tokio::test]
    async fn test_balanced_window_is_positive() {
        let store = make_store();
        store.push_order(OrderBundle {
            order: make_order("ahead", OrderStatus::InProgress, 10),
            dwell_records: vec![closed_record("ahead", 8, Some("op_1"))],
        });

        let deviations =
            compute_financial_deviations(&store, 30, eval_time())
                .await
                .unwrap();

        assert_eq!(deviations.kpis.global_balance, Decimal::from(60));
        assert!(deviations.kpis.is_positive);
    }
}
