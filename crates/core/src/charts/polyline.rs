//! Polyline point lists for the tools page: loss-recovery scenarios and "what if" comparisons.

use super::{bounds, span};
use serde::{Deserialize, Serialize};

/// Projected NAV after `month` months of a recovery scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub month: u32,
    pub nav: f64,
}

fn join(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Points for a recovery scenario in a 240x80 box.
///
/// The y axis spans 85%..115% of `cost_price` and is clamped to the drawable band, so a
/// scenario far above or below cost hugs the edge instead of leaving the chart.
pub fn recovery_curve_points(curve: &[CurvePoint], cost_price: f64) -> String {
    if curve.is_empty() || !cost_price.is_finite() || cost_price <= 0.0 {
        return String::new();
    }

    let max_month = curve.iter().map(|c| c.month).max().unwrap_or(0).max(1) as f64;

    join(curve.iter().filter(|c| c.nav.is_finite()).map(|c| {
        let x = c.month as f64 / max_month * 220.0 + 10.0;
        let ratio = c.nav / cost_price;
        let y = (75.0 - (ratio - 0.85) / 0.3 * 60.0).clamp(5.0, 75.0);
        (x, y)
    }))
}

/// Points for one series of the "what if" chart in a 600x140 box.
///
/// Non-finite values count as zero. The vertical range is padded 2% below the minimum and
/// 2% above the maximum.
pub fn what_if_line(values: &[f64]) -> String {
    if values.len() < 2 {
        return String::new();
    }

    let values: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .collect();
    let Some((min, max)) = bounds(values.iter().copied()) else {
        return String::new();
    };
    let (min, max) = (min * 0.98, max * 1.02);
    let range = span(min, max);
    let last = (values.len() - 1) as f64;

    join(values.iter().enumerate().map(|(i, v)| {
        let x = i as f64 / last * 580.0 + 10.0;
        let y = 130.0 - (v - min) / range * 110.0 + 10.0;
        (x, y)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(points: &str) -> Vec<(f64, f64)> {
        points
            .split(' ')
            .map(|pair| {
                let (x, y) = pair.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    fn assert_close(actual: &str, expected: &[(f64, f64)]) {
        let actual = parse(actual);
        assert_eq!(actual.len(), expected.len());
        for ((ax, ay), (ex, ey)) in actual.iter().zip(expected) {
            assert!((ax - ex).abs() < 1e-9, "x {ax} != {ex}");
            assert!((ay - ey).abs() < 1e-9, "y {ay} != {ey}");
        }
    }

    #[test]
    fn test_recovery_curve_points() {
        let curve = [
            CurvePoint { month: 0, nav: 0.85 },
            CurvePoint { month: 10, nav: 1.0 },
        ];
        assert_close(
            &recovery_curve_points(&curve, 1.0),
            &[(10.0, 75.0), (230.0, 45.0)],
        );
    }

    #[test]
    fn test_recovery_curve_clamps() {
        let curve = [
            CurvePoint { month: 0, nav: 0.5 },
            CurvePoint { month: 1, nav: 2.0 },
        ];
        assert_eq!(recovery_curve_points(&curve, 1.0), "10,75 230,5");
    }

    #[test]
    fn test_recovery_curve_rejects_bad_cost() {
        let curve = [CurvePoint { month: 1, nav: 1.0 }];
        assert_eq!(recovery_curve_points(&curve, 0.0), "");
        assert_eq!(recovery_curve_points(&curve, f64::NAN), "");
        assert_eq!(recovery_curve_points(&[], 1.0), "");
    }

    #[test]
    fn test_recovery_curve_single_month_zero() {
        let curve = [CurvePoint { month: 0, nav: 0.85 }];
        assert_eq!(recovery_curve_points(&curve, 1.0), "10,75");
    }

    #[test]
    fn test_what_if_line_flat_series() {
        // min*0.98 and max*1.02 give a band of 4 around 100, which sits mid-band.
        assert_close(&what_if_line(&[100.0, 100.0]), &[(10.0, 85.0), (590.0, 85.0)]);
    }

    #[test]
    fn test_what_if_line_non_finite_counts_as_zero() {
        assert_close(
            &what_if_line(&[0.0, f64::NAN, 50.0]),
            &[(10.0, 140.0), (300.0, 140.0), (590.0, 140.0 - 50.0 / 51.0 * 110.0)],
        );
    }

    #[test]
    fn test_what_if_line_too_short() {
        assert_eq!(what_if_line(&[]), "");
        assert_eq!(what_if_line(&[1.0]), "");
    }
}
