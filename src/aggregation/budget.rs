//! Budget resolution: routing cycle times to a planned-hours total.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::ProductModel;

/// Resolves a product model's routing into a single planned-hours budget.
///
/// The budget is a flat sum of every step's cycle time; missing cycle
/// times count as zero. No normalization by quantity or parallelism is
/// applied — a routing that represents parallel stations must encode that
/// by not double-listing the step. A model with no routing yet resolves
/// to zero, which is partial data, not an error.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use shopfloor_oee::aggregation::resolve_budget;
/// use shopfloor_oee::models::{ProductModel, RoutingStep};
///
/// let model = ProductModel {
///     id: "mdl_cruiser_32".to_string(),
///     name: "Cruiser 32".to_string(),
///     routing: vec![
///         RoutingStep { sequence: 1, station: "lamination".to_string(), cycle_hours: Some(Decimal::from(6)) },
///         RoutingStep { sequence: 2, station: "rigging".to_string(), cycle_hours: None },
///         RoutingStep { sequence: 3, station: "finishing".to_string(), cycle_hours: Some(Decimal::from(4)) },
///     ],
/// };
/// assert_eq!(resolve_budget(&model), Decimal::from(10));
/// ```
pub fn resolve_budget(model: &ProductModel) -> Decimal {
    let mut planned_hours = Decimal::ZERO;

    for step in &model.routing {
        let Some(cycle_hours) = step.cycle_hours else {
            continue;
        };
        if cycle_hours < Decimal::ZERO {
            // Cycle times are non-negative by invariant; a violation is a
            // data-quality defect handled like a malformed dwell record.
            warn!(
                model_id = %model.id,
                sequence = step.sequence,
                station = %step.station,
                "Negative cycle time in routing; treating as unestimated"
            );
            continue;
        }
        planned_hours += cycle_hours;
    }

    planned_hours
}
