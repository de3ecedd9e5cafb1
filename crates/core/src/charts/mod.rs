//! Inline SVG chart geometry.
//!
//! Pure functions that turn raw series into SVG path data, polyline point lists or complete
//! `<svg>` fragments. Inputs that cannot produce a chart (too few points, no finite values)
//! yield an empty string rather than an error, so templates can drop the chart silently.

pub mod nav;
pub mod polyline;
pub mod radar;
pub mod sparkline;

pub use nav::{
    default_market_events, event_markers, nav_curve_path, render_nav_chart_svg, EventMarker,
    MarketEvent, NavPoint,
};
pub use polyline::{recovery_curve_points, what_if_line, CurvePoint};
pub use radar::{RadarChart, RadarDimension, RadarPoint};
pub use sparkline::sparkline_path;

use serde::{Deserialize, Serialize};

/// Drawing area in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    /// Watchlist sparkline area.
    pub const SPARKLINE: Frame = Frame {
        width: 400.0,
        height: 30.0,
        padding: 0.0,
    };

    /// Fund detail NAV chart area.
    pub const NAV: Frame = Frame {
        width: 800.0,
        height: 200.0,
        padding: 20.0,
    };
}

/// Minimum and maximum of the finite values, or `None` if there are none.
pub(crate) fn bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// `max - min`, or 1 for a flat series so flat lines sit on the baseline.
pub(crate) fn span(min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        1.0
    } else {
        range
    }
}

/// Escapes text placed between SVG tags.
pub(crate) fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_skips_non_finite() {
        assert_eq!(bounds([3.0, f64::NAN, -1.0, f64::INFINITY]), Some((-1.0, 3.0)));
        assert_eq!(bounds([f64::NAN]), None);
        assert_eq!(bounds(Vec::new()), None);
    }

    #[test]
    fn test_span_of_flat_series() {
        assert_eq!(span(2.0, 2.0), 1.0);
        assert_eq!(span(1.0, 4.0), 3.0);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("A&B <x>"), "A&amp;B &lt;x&gt;");
    }
}
