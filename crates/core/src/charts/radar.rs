//! Radar (spider) chart for multi-dimension scores such as an investor behaviour profile.

use super::escape_text;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A named score on one radar axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDimension {
    pub name: String,
    pub value: f64,
}

/// A vertex in SVG user units, rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub x: i64,
    pub y: i64,
}

/// Radar chart geometry. Axis 0 points straight up; axes proceed clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarChart {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Score that reaches the outer ring.
    pub scale_max: f64,
    /// Number of background rings.
    pub levels: usize,
    pub label_radius: f64,
}

impl Default for RadarChart {
    fn default() -> Self {
        Self {
            cx: 150.0,
            cy: 130.0,
            radius: 100.0,
            scale_max: 5.0,
            levels: 5,
            label_radius: 118.0,
        }
    }
}

const MIN_AXES: usize = 3;

fn join_points(points: &[RadarPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl RadarChart {
    /// Vertex at distance `r` from the centre on axis `index` of `total`.
    pub fn point(&self, r: f64, index: usize, total: usize) -> RadarPoint {
        let angle = (PI * 2.0 * index as f64 / total as f64) - PI / 2.0;
        RadarPoint {
            x: (self.cx + r * angle.cos()).round() as i64,
            y: (self.cy + r * angle.sin()).round() as i64,
        }
    }

    /// Polygon point lists for the background rings, innermost first.
    pub fn grid_rings(&self, total: usize) -> Vec<String> {
        (1..=self.levels)
            .map(|level| {
                let r = level as f64 / self.levels as f64 * self.radius;
                let ring: Vec<RadarPoint> = (0..total).map(|i| self.point(r, i, total)).collect();
                join_points(&ring)
            })
            .collect()
    }

    /// Outer ends of the axis lines.
    pub fn axis_ends(&self, total: usize) -> Vec<RadarPoint> {
        (0..total).map(|i| self.point(self.radius, i, total)).collect()
    }

    /// Vertices of the data polygon. Scores are clamped to `0..=scale_max`; non-finite scores
    /// count as zero.
    pub fn data_vertices(&self, dimensions: &[RadarDimension]) -> Vec<RadarPoint> {
        let total = dimensions.len();
        dimensions
            .iter()
            .enumerate()
            .map(|(i, d)| self.point(self.scaled(d.value), i, total))
            .collect()
    }

    /// Data polygon as an SVG `points` attribute value.
    pub fn data_points(&self, dimensions: &[RadarDimension]) -> String {
        join_points(&self.data_vertices(dimensions))
    }

    /// Anchor positions for the axis labels.
    pub fn label_positions(&self, total: usize) -> Vec<RadarPoint> {
        (0..total)
            .map(|i| self.point(self.label_radius, i, total))
            .collect()
    }

    fn scaled(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { 0.0 };
        value.clamp(0.0, self.scale_max) / self.scale_max * self.radius
    }

    /// Renders a complete `<svg>` element, or `""` for fewer than three dimensions.
    pub fn render_svg(&self, dimensions: &[RadarDimension]) -> String {
        let total = dimensions.len();
        if total < MIN_AXES {
            tracing::debug!("radar chart needs at least {} dimensions, got {}", MIN_AXES, total);
            return String::new();
        }

        let mut svg = String::from("<svg viewBox=\"0 0 300 280\" class=\"radar-svg\">");

        for (level, ring) in self.grid_rings(total).iter().enumerate() {
            svg.push_str(&format!(
                "<polygon points=\"{ring}\" fill=\"none\" stroke=\"rgba(255,255,255,{:.2})\" stroke-width=\"1\"/>",
                (level + 1) as f64 * 0.02
            ));
        }

        for end in self.axis_ends(total) {
            svg.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"rgba(255,255,255,0.05)\" stroke-width=\"1\"/>",
                self.cx, self.cy, end.x, end.y
            ));
        }

        let vertices = self.data_vertices(dimensions);
        svg.push_str(&format!(
            "<polygon points=\"{}\" fill=\"rgba(99,102,241,0.15)\" stroke=\"var(--primary)\" stroke-width=\"2.5\" stroke-linejoin=\"round\"/>",
            join_points(&vertices)
        ));

        for v in &vertices {
            svg.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"4\" fill=\"var(--primary)\" stroke=\"white\" stroke-width=\"1.5\"/>",
                v.x, v.y
            ));
        }

        for (d, pos) in dimensions.iter().zip(self.label_positions(total)) {
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"rgba(255,255,255,0.7)\" font-size=\"11\" font-weight=\"600\">{} {}</text>",
                pos.x,
                pos.y,
                escape_text(&d.name),
                d.value
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(values: &[f64]) -> Vec<RadarDimension> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| RadarDimension {
                name: format!("维度{i}"),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn test_first_axis_points_up() {
        let chart = RadarChart::default();
        assert_eq!(chart.point(100.0, 0, 5), RadarPoint { x: 150, y: 30 });
    }

    #[test]
    fn test_five_axis_geometry() {
        let chart = RadarChart::default();
        // 72 degrees clockwise from the top: (150 + 100 sin 72°, 130 - 100 cos 72°).
        assert_eq!(chart.point(100.0, 1, 5), RadarPoint { x: 245, y: 99 });
        assert_eq!(chart.point(100.0, 2, 5), RadarPoint { x: 209, y: 211 });
    }

    #[test]
    fn test_grid_rings() {
        let chart = RadarChart::default();
        let rings = chart.grid_rings(4);
        assert_eq!(rings.len(), 5);
        assert_eq!(rings[4], "150,30 250,130 150,230 50,130");
        assert_eq!(rings[0], "150,110 170,130 150,150 130,130");
    }

    #[test]
    fn test_data_points_scale_and_clamp() {
        let chart = RadarChart::default();
        let points = chart.data_points(&dims(&[5.0, 10.0, -1.0, f64::NAN]));
        assert_eq!(points, "150,30 250,130 150,130 150,130");
    }

    #[test]
    fn test_render_svg_requires_three_dimensions() {
        let chart = RadarChart::default();
        assert_eq!(chart.render_svg(&dims(&[1.0, 2.0])), "");
    }

    #[test]
    fn test_render_svg() {
        let chart = RadarChart::default();
        let svg = chart.render_svg(&dims(&[3.0, 4.0, 2.0, 5.0, 1.0]));
        assert!(svg.starts_with("<svg viewBox=\"0 0 300 280\""));
        assert_eq!(svg.matches("<polygon").count(), 6);
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("<line").count(), 5);
        assert!(svg.contains(">维度0 3</text>"));
        assert!(svg.contains("rgba(255,255,255,0.10)"));
    }
}
