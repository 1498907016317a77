//! Event-weighted truth-matching efficiency over a set of mass points.

use crate::domain::{MassPoint, Process};
use crate::error::ScanError;
use crate::models::match_params;

/// Weighted average of the truth-matching efficiency, weighting each point by its
/// event count. The efficiency is looked up at the point's x-mass.
///
/// Fails with `EmptyAggregation` when the total event count is zero, and with the
/// lookup error of the first point outside the process's matching table.
pub fn average_efficiency<'a>(
    points: impl IntoIterator<Item = &'a MassPoint>,
    process: Process,
) -> Result<f64, ScanError> {
    let mut sum_weighted = 0.0;
    let mut sum_events = 0.0;

    for point in points {
        let params = match_params(point.x(), process)?;
        sum_weighted += point.events() * params.efficiency;
        sum_events += point.events();
    }

    if sum_events <= 0.0 {
        return Err(ScanError::EmptyAggregation {
            process: process.name().to_string(),
        });
    }

    Ok(sum_weighted / sum_events)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn pt(x: f64, events: f64) -> MassPoint {
        MassPoint::new(x, 0.0, events).unwrap()
    }

    #[test]
    fn single_bucket_returns_bucket_efficiency() {
        let points = [pt(610.0, 1.0), pt(700.0, 250.0), pt(790.0, 3.5)];
        let eff = average_efficiency(&points, Process::GlGl).unwrap();
        assert_approx_eq!(f64, eff, 0.235, epsilon = 1e-12);
    }

    #[test]
    fn weights_by_event_count() {
        // 3 * 0.235 + 1 * 0.315 over 4 events
        let points = [pt(700.0, 3.0), pt(2200.0, 1.0)];
        let eff = average_efficiency(&points, Process::GlGl).unwrap();
        assert_approx_eq!(f64, eff, (3.0 * 0.235 + 0.315) / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_total_weight_is_an_error() {
        let points = [pt(700.0, 0.0)];
        assert!(matches!(
            average_efficiency(&points, Process::GlGl),
            Err(ScanError::EmptyAggregation { .. })
        ));
        assert!(matches!(
            average_efficiency(&[], Process::GlGl),
            Err(ScanError::EmptyAggregation { .. })
        ));
    }

    #[test]
    fn lookup_failure_aborts_aggregation() {
        let points = [pt(700.0, 10.0), pt(50.0, 10.0)];
        assert!(matches!(
            average_efficiency(&points, Process::GlGl),
            Err(ScanError::MassOutOfRange { .. })
        ));
    }
}
