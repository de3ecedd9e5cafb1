//! NAV history curve with market-event markers.

use super::{bounds, escape_text, span, Frame};
use crate::constants::{EVENT_GREEN, EVENT_RED};
use crate::{RenderError, RenderResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of net asset value history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: f64,
}

impl NavPoint {
    /// Builds a point from an ISO `YYYY-MM-DD` date string.
    pub fn parse(date: &str, nav: f64) -> RenderResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| RenderError::InvalidDate(date.to_owned()))?;
        Ok(Self { date, nav })
    }
}

/// A dated market event drawn on top of the NAV curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketEvent {
    pub date: NaiveDate,
    pub label: String,
    pub color: String,
}

/// A market event placed on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMarker {
    pub date: NaiveDate,
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    /// Baseline of the label text; below the point near the top edge, above it otherwise.
    pub label_y: f64,
    /// Top of the label background box.
    pub box_y: f64,
}

/// Well-known A-share turning points.
pub fn default_market_events() -> Vec<MarketEvent> {
    const EVENTS: &[(i32, u32, u32, &str, &str)] = &[
        (2015, 6, 12, "5178 顶部", EVENT_RED),
        (2015, 8, 24, "股灾2.0", EVENT_RED),
        (2018, 1, 29, "贸易战回调", EVENT_RED),
        (2020, 2, 3, "疫情底", EVENT_GREEN),
        (2022, 4, 26, "估值底", EVENT_GREEN),
        (2024, 2, 5, "雪球重锤", EVENT_RED),
    ];

    EVENTS
        .iter()
        .filter_map(|&(y, m, d, label, color)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| MarketEvent {
                date,
                label: label.to_owned(),
                color: color.to_owned(),
            })
        })
        .collect()
}

/// Maps series positions to frame coordinates.
struct Projection {
    frame: Frame,
    min: f64,
    range: f64,
    last: f64,
}

impl Projection {
    fn new(points: &[NavPoint], frame: Frame) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let (min, max) = bounds(points.iter().map(|p| p.nav))?;
        Some(Self {
            frame,
            min,
            range: span(min, max),
            last: (points.len() - 1) as f64,
        })
    }

    fn x(&self, index: usize) -> f64 {
        let inner = self.frame.width - 2.0 * self.frame.padding;
        index as f64 / self.last * inner + self.frame.padding
    }

    fn y(&self, nav: f64) -> f64 {
        let inner = self.frame.height - 2.0 * self.frame.padding;
        self.frame.height - ((nav - self.min) / self.range * inner + self.frame.padding)
    }
}

/// Builds the SVG path for a NAV history.
///
/// Points keep their index position along the x axis; points with a non-finite NAV are not
/// drawn. Fewer than two points yields `""`.
pub fn nav_curve_path(points: &[NavPoint], frame: Frame) -> String {
    let Some(proj) = Projection::new(points, frame) else {
        tracing::debug!("NAV curve needs at least two points, got {}", points.len());
        return String::new();
    };

    let mut segments = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        if !point.nav.is_finite() {
            continue;
        }
        let cmd = if segments.is_empty() { "M" } else { "L" };
        segments.push(format!("{} {} {}", cmd, proj.x(i), proj.y(point.nav)));
    }

    segments.join(" ")
}

/// Places each event whose year and month occur in the history at the first point of that
/// month. Events outside the history are skipped.
pub fn event_markers(points: &[NavPoint], events: &[MarketEvent], frame: Frame) -> Vec<EventMarker> {
    let Some(proj) = Projection::new(points, frame) else {
        return Vec::new();
    };

    events
        .iter()
        .filter_map(|event| {
            let idx = points.iter().position(|p| {
                p.date.year() == event.date.year() && p.date.month() == event.date.month()
            })?;
            let nav = points[idx].nav;
            if !nav.is_finite() {
                tracing::warn!("skipping event {} on a point without a NAV", event.date);
                return None;
            }

            let x = proj.x(idx);
            let y = proj.y(nav);
            let near_top = y < 50.0;
            Some(EventMarker {
                date: event.date,
                label: event.label.clone(),
                color: event.color.clone(),
                x,
                y,
                label_y: if near_top { y + 22.0 } else { y - 12.0 },
                box_y: if near_top { y + 10.0 } else { y - 25.0 },
            })
        })
        .collect()
}

/// Renders the NAV curve and its event markers as a standalone `<svg>` element.
pub fn render_nav_chart_svg(points: &[NavPoint], events: &[MarketEvent], frame: Frame) -> String {
    let path = nav_curve_path(points, frame);
    if path.is_empty() {
        return String::new();
    }

    let mut svg = format!(
        "<svg width=\"100%\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" preserveAspectRatio=\"none\">",
        w = frame.width,
        h = frame.height
    );
    svg.push_str(&format!(
        "<path d=\"{path}\" fill=\"none\" stroke=\"var(--primary)\" stroke-width=\"2\" vector-effect=\"non-scaling-stroke\"/>"
    ));

    for marker in event_markers(points, events, frame) {
        svg.push_str(&format!(
            "<g><line x1=\"{x}\" y1=\"0\" x2=\"{x}\" y2=\"{h}\" stroke=\"{c}\" stroke-dasharray=\"4,4\" opacity=\"0.4\"/>\
             <circle cx=\"{x}\" cy=\"{y}\" r=\"4\" fill=\"{c}\"/>\
             <rect x=\"{bx}\" y=\"{by}\" width=\"80\" height=\"18\" rx=\"4\" fill=\"rgba(15,23,42,0.8)\"/>\
             <text x=\"{x}\" y=\"{ly}\" text-anchor=\"middle\" font-size=\"10\" fill=\"white\">{label}</text></g>",
            x = marker.x,
            y = marker.y,
            h = frame.height,
            c = escape_text(&marker.color),
            bx = marker.x - 40.0,
            by = marker.box_y,
            ly = marker.label_y,
            label = escape_text(&marker.label),
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, nav: f64) -> NavPoint {
        NavPoint::parse(date, nav).unwrap()
    }

    #[test]
    fn test_nav_point_parse() {
        assert!(NavPoint::parse("2020-02-03", 1.0).is_ok());
        assert!(matches!(
            NavPoint::parse("2020/02/03", 1.0),
            Err(RenderError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_nav_curve_path_uses_padding() {
        let points = [point("2020-01-02", 1.0), point("2020-01-03", 2.0)];
        let path = nav_curve_path(&points, Frame::NAV);
        assert_eq!(path, "M 20 180 L 780 20");
    }

    #[test]
    fn test_nav_curve_skips_non_finite_points() {
        let points = [
            point("2020-01-02", 1.0),
            point("2020-01-03", f64::NAN),
            point("2020-01-06", 2.0),
        ];
        let path = nav_curve_path(&points, Frame::NAV);
        assert_eq!(path, "M 20 180 L 780 20");
    }

    #[test]
    fn test_nav_curve_too_short() {
        assert_eq!(nav_curve_path(&[point("2020-01-02", 1.0)], Frame::NAV), "");
        assert_eq!(nav_curve_path(&[], Frame::NAV), "");
    }

    #[test]
    fn test_default_events() {
        let events = default_market_events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[3].label, "疫情底");
        assert_eq!(events[3].color, EVENT_GREEN);
    }

    #[test]
    fn test_event_markers_match_by_month() {
        let points = [
            point("2020-01-20", 1.0),
            point("2020-02-10", 2.0),
            point("2020-02-11", 1.5),
        ];
        let markers = event_markers(&points, &default_market_events(), Frame::NAV);
        assert_eq!(markers.len(), 1);
        let m = &markers[0];
        assert_eq!(m.label, "疫情底");
        assert_eq!(m.x, 400.0);
        assert_eq!(m.y, 20.0);
        // Near the top edge the label goes below the point.
        assert_eq!(m.label_y, 42.0);
        assert_eq!(m.box_y, 30.0);
    }

    #[test]
    fn test_event_marker_label_above_point() {
        let points = [point("2015-06-01", 1.0), point("2015-07-01", 2.0)];
        let markers = event_markers(&points, &default_market_events(), Frame::NAV);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].y, 180.0);
        assert_eq!(markers[0].label_y, 168.0);
        assert_eq!(markers[0].box_y, 155.0);
    }

    #[test]
    fn test_render_nav_chart_svg() {
        let points = [point("2020-01-20", 1.0), point("2020-02-10", 2.0)];
        let svg = render_nav_chart_svg(&points, &default_market_events(), Frame::NAV);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("d=\"M 20 180 L 780 20\""));
        assert!(svg.contains(">疫情底</text>"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(render_nav_chart_svg(&[], &[], Frame::NAV), "");
    }
}
