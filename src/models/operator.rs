//! Operator model for financial-deviation and talent-ranking computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an operator is currently on the active roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorStatus {
    /// On the active roster; eligible for talent ranking.
    Active,
    /// Off the roster; kept only so historical rates stay resolvable.
    Inactive,
}

/// A worker with an hourly labor rate and a performance score.
///
/// Operators feed exactly two computations: the time-weighted labor rate
/// behind per-order cost deviations, and the top-talent ranking on the
/// dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    /// Unique identifier for the operator.
    pub id: String,
    /// The operator's display name.
    pub name: String,
    /// Roster status.
    pub status: OperatorStatus,
    /// Performance score, when one has been assessed.
    #[serde(default)]
    pub performance_score: Option<Decimal>,
    /// Hourly labor rate.
    pub hourly_rate: Decimal,
}

impl Operator {
    /// Returns true when the operator is on the active roster.
    pub fn is_active(&self) -> bool {
        self.status == OperatorStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        let operator = Operator {
            id: "op_001".to_string(),
            name: "Marta Silva".to_string(),
            status: OperatorStatus::Active,
            performance_score: Some(Decimal::new(92, 0)),
            hourly_rate: Decimal::new(3550, 2),
        };
        assert!(operator.is_active());
    }

    #[test]
    fn test_operator_deserialization_without_score() {
        let json = r#"{
            "id": "op_002",
            "name": "Joao Reis",
            "status": "inactive",
            "hourly_rate": "28.00"
        }"#;

        let operator: Operator = serde_json::from_str(json).unwrap();
        assert!(!operator.is_active());
        assert_eq!(operator.performance_score, None);
        assert_eq!(operator.hourly_rate, Decimal::new(2800, 2));
    }
}
