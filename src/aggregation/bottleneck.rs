//! Fleet-wide bottleneck detection and global OEE.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::store::OpenDwell;

/// Sentinel bottleneck name reported when no dwell record is open.
///
/// Distinct from any real station name so the presentation layer never
/// renders an arbitrary or empty station for an idle fleet.
pub const NO_ACTIVE_SWARM: &str = "no active swarm";

/// Finds the station currently holding the most open dwell records.
///
/// Ties are broken by first encounter in store order; the tie-break is
/// stable but otherwise unspecified, which only affects which of several
/// equally-congested stations gets displayed. An empty input yields the
/// [`NO_ACTIVE_SWARM`] sentinel.
///
/// # Example
///
/// ```
/// use shopfloor_oee::aggregation::{detect_bottleneck, NO_ACTIVE_SWARM};
/// use shopfloor_oee::store::OpenDwell;
///
/// let open = vec![
///     OpenDwell { station: "rigging".to_string(), order_id: "ord_1".to_string() },
///     OpenDwell { station: "lamination".to_string(), order_id: "ord_2".to_string() },
///     OpenDwell { station: "rigging".to_string(), order_id: "ord_3".to_string() },
/// ];
/// assert_eq!(detect_bottleneck(&open), "rigging");
/// assert_eq!(detect_bottleneck(&[]), NO_ACTIVE_SWARM);
/// ```
pub fn detect_bottleneck(open_records: &[OpenDwell]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for record in open_records {
        match counts.iter_mut().find(|(station, _)| *station == record.station) {
            Some((_, count)) => *count += 1,
            None => counts.push((&record.station, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (station, count) in counts {
        // Strictly greater keeps the first-encountered station on ties.
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((station, count));
        }
    }

    best.map_or_else(|| NO_ACTIVE_SWARM.to_string(), |(station, _)| station.to_string())
}

/// Computes the global OEE percentage for the fleet.
///
/// `min(100, round(total_planned / total_actual * 100))` when any actual
/// time exists, else 100. The cap is deliberate: the aggregate is a
/// utilization ratio and is never reported above full efficiency, even
/// when the fleet is running far ahead of plan.
pub fn global_oee_pct(total_planned_hours: Decimal, total_actual_hours: Decimal) -> Decimal {
    if total_actual_hours <= Decimal::ZERO {
        return Decimal::ONE_HUNDRED;
    }

    let ratio = (total_planned_hours / total_actual_hours * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    ratio.min(Decimal::ONE_HUNDRED)
}
