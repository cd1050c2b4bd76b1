//! Telemetry normalization: raw dwell records to elapsed-hours totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::DwellRecord;

/// The normalized telemetry for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTelemetry {
    /// Total clamped elapsed-hours across all of the order's records.
    pub actual_hours: Decimal,
    /// Raw number of records, used for fleet telemetry-volume reporting.
    pub reading_count: usize,
    /// Number of records clamped because their end preceded their start.
    pub malformed_count: usize,
}

/// Normalizes one order's dwell records into a single elapsed-hours total.
///
/// Each record contributes `(end ?? now) - start` in hours, clamped at
/// zero. Open records accrue against `now`, so the same order re-evaluated
/// a minute later yields a larger total even with no new records: that is
/// live work-in-progress, not an anomaly. Malformed records (end before
/// start) contribute zero and are logged as a data-quality warning, never
/// raised as an error.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use shopfloor_oee::aggregation::normalize_dwell;
/// use shopfloor_oee::models::DwellRecord;
///
/// let records = vec![DwellRecord {
///     id: "rd_001".to_string(),
///     order_id: "ord_001".to_string(),
///     station: "lamination".to_string(),
///     started_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
///     ended_at: Some(Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()),
///     operator_id: None,
/// }];
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap();
/// let telemetry = normalize_dwell(&records, now);
/// assert_eq!(telemetry.actual_hours, Decimal::from(4));
/// assert_eq!(telemetry.reading_count, 1);
/// ```
pub fn normalize_dwell(records: &[DwellRecord], now: DateTime<Utc>) -> NormalizedTelemetry {
    let mut actual_hours = Decimal::ZERO;
    let mut malformed_count = 0;

    for record in records {
        if record.is_malformed() {
            malformed_count += 1;
            warn!(
                record_id = %record.id,
                order_id = %record.order_id,
                station = %record.station,
                "Dwell record ends before it starts; clamping elapsed time to zero"
            );
        }
        actual_hours += record.elapsed_hours(now);
    }

    NormalizedTelemetry {
        actual_hours,
        reading_count: records.len(),
        malformed_count,
    }
}
