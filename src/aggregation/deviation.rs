//! Per-order deviation, efficiency and financial-delta computation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DwellRecord, OrderFinancials, ProductionOrder};

use super::NormalizedTelemetry;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Computes the efficiency percentage for a planned/actual pair.
///
/// `planned / actual * 100` when actual time has been logged. The edge
/// cases are deliberate: a budget with no actual time yet reads 0% (not
/// yet earned), and an order with neither budget nor actual time is
/// trivially on target at 100% rather than undefined.
///
/// The result is rounded to one decimal place and is always in `[0, ∞)`.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use shopfloor_oee::aggregation::efficiency_pct;
///
/// assert_eq!(efficiency_pct(Decimal::from(10), Decimal::from(8)), Decimal::new(1250, 1));
/// assert_eq!(efficiency_pct(Decimal::from(10), Decimal::ZERO), Decimal::ZERO);
/// assert_eq!(efficiency_pct(Decimal::ZERO, Decimal::ZERO), Decimal::from(100));
/// ```
pub fn efficiency_pct(planned_hours: Decimal, actual_hours: Decimal) -> Decimal {
    if actual_hours > Decimal::ZERO {
        (planned_hours / actual_hours * HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    } else if planned_hours > Decimal::ZERO {
        Decimal::ZERO
    } else {
        HUNDRED
    }
}

/// Resolves the time-weighted average hourly rate for one order.
///
/// Each dwell record carrying an operator with a known rate contributes
/// its clamped elapsed-hours as weight. Records without an operator, or
/// with an operator missing from `rates`, carry no weight. Returns `None`
/// when no weighted time exists at all — per-order costs are then simply
/// omitted rather than priced at an invented rate.
pub fn weighted_hourly_rate(
    records: &[DwellRecord],
    rates: &HashMap<String, Decimal>,
    now: DateTime<Utc>,
) -> Option<Decimal> {
    let mut weighted_sum = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;

    for record in records {
        let Some(operator_id) = record.operator_id.as_deref() else {
            continue;
        };
        let Some(rate) = rates.get(operator_id) else {
            continue;
        };
        let weight = record.elapsed_hours(now);
        if weight > Decimal::ZERO {
            weighted_sum += *rate * weight;
            total_weight += weight;
        }
    }

    if total_weight > Decimal::ZERO {
        Some(weighted_sum / total_weight)
    } else {
        None
    }
}

/// Combines an order's budget and telemetry into one financials row.
///
/// `deviation_hours = planned - actual`; positive means ahead of budget.
/// The order counts as late only when it is behind budget AND has actually
/// started — a purely-planned order cannot yet be delayed. When a blended
/// rate is available, planned and actual hours are priced at it and the
/// cost deviation follows the same sign convention.
pub fn assess_order(
    order: &ProductionOrder,
    planned_hours: Decimal,
    telemetry: &NormalizedTelemetry,
    blended_rate: Option<Decimal>,
) -> OrderFinancials {
    let actual_hours = telemetry.actual_hours;
    let deviation_hours = planned_hours - actual_hours;
    let is_late = deviation_hours < Decimal::ZERO && order.status.has_started();

    let round2 = |value: Decimal| {
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    };

    let planned_cost = blended_rate.map(|rate| round2(planned_hours * rate));
    let actual_cost = blended_rate.map(|rate| round2(actual_hours * rate));
    let cost_deviation = match (planned_cost, actual_cost) {
        (Some(planned), Some(actual)) => Some(planned - actual),
        _ => None,
    };

    OrderFinancials {
        order_id: order.id.clone(),
        order_number: order.order_number.clone(),
        status: order.status,
        planned_hours: round2(planned_hours),
        actual_hours: round2(actual_hours),
        deviation_hours: round2(deviation_hours),
        efficiency_pct: efficiency_pct(planned_hours, actual_hours),
        planned_cost,
        actual_cost,
        cost_deviation,
        is_late,
    }
}
