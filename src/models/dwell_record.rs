//! Station-dwell records and elapsed-time derivation.
//!
//! A dwell record is one interval during which a physical unit was detected
//! present at a station. Records are created by telemetry ingestion when a
//! unit enters a station and closed on departure; a record with no end
//! timestamp is still accruing time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 3600;

/// One interval of physical presence at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DwellRecord {
    /// Unique identifier for the reading.
    pub id: String,
    /// The order the detected unit belongs to.
    pub order_id: String,
    /// The station where the unit was detected.
    pub station: String,
    /// When the unit was detected entering the station.
    pub started_at: DateTime<Utc>,
    /// When the unit was detected leaving, or `None` while still present.
    pub ended_at: Option<DateTime<Utc>>,
    /// The operator detected working the station, when known.
    ///
    /// Used only for time-weighted labor-rate resolution; a missing
    /// operator never invalidates the reading.
    #[serde(default)]
    pub operator_id: Option<String>,
}

impl DwellRecord {
    /// Returns true while the unit has not yet departed the station.
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Returns true when the record carries an end before its start.
    ///
    /// Such records are a data-quality defect; they contribute zero
    /// elapsed time rather than aborting the computation.
    pub fn is_malformed(&self) -> bool {
        matches!(self.ended_at, Some(end) if end < self.started_at)
    }

    /// Returns the elapsed presence time in hours, evaluated at `now`.
    ///
    /// Open records accrue against `now`, so re-evaluating the same record
    /// later yields a larger figure. A malformed record (end before start)
    /// is clamped to zero: a bad reading must never subtract time from the
    /// order's total.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    /// use shopfloor_oee::models::DwellRecord;
    ///
    /// let record = DwellRecord {
    ///     id: "rd_001".to_string(),
    ///     order_id: "ord_001".to_string(),
    ///     station: "lamination".to_string(),
    ///     started_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
    ///     ended_at: Some(Utc.with_ymd_and_hms(2026, 3, 2, 10, 30, 0).unwrap()),
    ///     operator_id: None,
    /// };
    ///
    /// let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    /// assert_eq!(record.elapsed_hours(now), Decimal::new(25, 1)); // 2.5 hours
    /// ```
    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> Decimal {
        let end = self.ended_at.unwrap_or(now);
        let seconds = (end - self.started_at).num_seconds();
        if seconds <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_record(
        started_at: DateTime<Utc>,
        ended_at: Option<DateTime<Utc>>,
    ) -> DwellRecord {
        DwellRecord {
            id: "rd_test".to_string(),
            order_id: "ord_test".to_string(),
            station: "rigging".to_string(),
            started_at,
            ended_at,
            operator_id: None,
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, h, m, 0).unwrap()
    }

    #[test]
    fn test_closed_record_elapsed_hours() {
        let record = make_record(at(8, 0), Some(at(16, 0)));
        assert_eq!(record.elapsed_hours(at(23, 0)), Decimal::from(8));
    }

    #[test]
    fn test_open_record_accrues_against_now() {
        let record = make_record(at(8, 0), None);
        assert!(record.is_open());
        assert_eq!(record.elapsed_hours(at(9, 0)), Decimal::from(1));
        assert_eq!(record.elapsed_hours(at(11, 0)), Decimal::from(3));
    }

    /// Open intervals grow strictly as evaluation time advances.
    #[test]
    fn test_open_record_elapsed_is_monotonic() {
        let record = make_record(at(8, 0), None);
        let mut previous = record.elapsed_hours(at(8, 1));
        for minute in [10, 25, 40, 55] {
            let next = record.elapsed_hours(at(8, minute));
            assert!(next > previous);
            previous = next;
        }
    }

    /// A record whose end precedes its start contributes zero, never a
    /// negative value.
    #[test]
    fn test_malformed_record_clamps_to_zero() {
        let record = make_record(at(10, 0), Some(at(9, 0)));
        assert!(record.is_malformed());
        assert_eq!(record.elapsed_hours(at(12, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_zero_duration_record() {
        let record = make_record(at(10, 0), Some(at(10, 0)));
        assert!(!record.is_malformed());
        assert_eq!(record.elapsed_hours(at(12, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_open_record_started_in_the_future_clamps_to_zero() {
        // Clock skew between the reader and the evaluator must not
        // produce negative elapsed time either.
        let record = make_record(at(14, 0), None);
        assert_eq!(record.elapsed_hours(at(13, 0)), Decimal::ZERO);
    }

    #[test]
    fn test_record_deserialization_with_null_end() {
        let json = r#"{
            "id": "rd_001",
            "order_id": "ord_001",
            "station": "lamination",
            "started_at": "2026-03-02T08:00:00Z",
            "ended_at": null
        }"#;

        let record: DwellRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_open());
        assert_eq!(record.operator_id, None);
    }
}
