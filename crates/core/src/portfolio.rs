//! Holding diagnostics.

use serde::{Deserialize, Serialize};

/// Returned by [`recovery_days`] when a loss can never be recovered at the given rate.
pub const UNRECOVERABLE_DAYS: u32 = 999;

/// Trading days per year used to turn an annual return into a daily one.
pub const TRADING_DAYS_PER_YEAR: f64 = 250.0;

/// A fund holding as shown in the portfolio view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub shares: f64,
    pub cost_price: f64,
    pub current_nav: f64,
    /// Unrealised profit; `None` when the upstream quote has no figure.
    #[serde(default)]
    pub profit: Option<f64>,
}

/// Trading days needed to climb back to cost, compounding `annual_return` daily.
///
/// Positions without a recorded loss need zero days. A position with no current value, a
/// non-positive or non-finite rate, or a result that is not finite yields
/// [`UNRECOVERABLE_DAYS`].
pub fn recovery_days(position: &Position, annual_return: f64) -> u32 {
    let in_loss = position.profit.is_some_and(|p| p < 0.0);
    if !in_loss {
        return 0;
    }

    let cost = position.shares * position.cost_price;
    let current = position.shares * position.current_nav;
    if current.is_nan() || current <= 0.0 {
        return UNRECOVERABLE_DAYS;
    }

    let daily = annual_return / TRADING_DAYS_PER_YEAR;
    if !daily.is_finite() || daily <= 0.0 {
        tracing::debug!("no recovery at annual return {}", annual_return);
        return UNRECOVERABLE_DAYS;
    }

    let days = ((cost / current).ln() / (1.0 + daily).ln()).ceil();
    if !days.is_finite() {
        return UNRECOVERABLE_DAYS;
    }

    // Already at or above cost despite a reported loss.
    days.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(cost_price: f64, current_nav: f64, profit: Option<f64>) -> Position {
        Position {
            shares: 1000.0,
            cost_price,
            current_nav,
            profit,
        }
    }

    #[test]
    fn test_recovery_days_compounds_daily() {
        // ln(1/0.9) / ln(1.001) = 105.41
        assert_eq!(recovery_days(&position(1.0, 0.9, Some(-100.0)), 0.25), 106);
        // ln(1.2) / ln(1.0004) = 455.9
        assert_eq!(recovery_days(&position(1.2, 1.0, Some(-200.0)), 0.10), 456);
    }

    #[test]
    fn test_no_loss_needs_no_days() {
        assert_eq!(recovery_days(&position(1.0, 0.9, None), 0.25), 0);
        assert_eq!(recovery_days(&position(1.0, 1.1, Some(100.0)), 0.25), 0);
        assert_eq!(recovery_days(&position(1.0, 1.0, Some(0.0)), 0.25), 0);
        assert_eq!(recovery_days(&position(1.0, 0.9, Some(f64::NAN)), 0.25), 0);
    }

    #[test]
    fn test_worthless_position_is_unrecoverable() {
        assert_eq!(recovery_days(&position(1.0, 0.0, Some(-1000.0)), 0.25), UNRECOVERABLE_DAYS);
        assert_eq!(
            recovery_days(&position(1.0, f64::NAN, Some(-1000.0)), 0.25),
            UNRECOVERABLE_DAYS
        );
    }

    #[test]
    fn test_bad_rates_are_unrecoverable() {
        let pos = position(1.0, 0.9, Some(-100.0));
        assert_eq!(recovery_days(&pos, 0.0), UNRECOVERABLE_DAYS);
        assert_eq!(recovery_days(&pos, -0.1), UNRECOVERABLE_DAYS);
        assert_eq!(recovery_days(&pos, f64::NAN), UNRECOVERABLE_DAYS);
        assert_eq!(recovery_days(&pos, f64::INFINITY), UNRECOVERABLE_DAYS);
    }

    #[test]
    fn test_non_finite_cost_is_unrecoverable() {
        let pos = position(f64::INFINITY, 0.9, Some(-100.0));
        assert_eq!(recovery_days(&pos, 0.25), UNRECOVERABLE_DAYS);
    }

    #[test]
    fn test_loss_reported_above_cost_clamps_to_zero() {
        assert_eq!(recovery_days(&position(1.0, 1.1, Some(-5.0)), 0.25), 0);
    }
}
