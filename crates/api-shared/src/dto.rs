//! JSON request and response bodies.
//!
//! Chart types mirror the core geometry types but keep dates as strings, so malformed input
//! reaches the handler and can be reported as a 400 instead of a deserialisation failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Raw commentary to render. A missing or empty `text` renders to an empty fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderReq {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderRes {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SparklineReq {
    pub values: Vec<f64>,
}

/// An SVG path `d` attribute; empty when the input cannot produce a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PathRes {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavPointDto {
    /// `YYYY-MM-DD`
    pub date: String,
    pub nav: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavChartReq {
    pub points: Vec<NavPointDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventMarkerDto {
    pub date: String,
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub label_y: f64,
    pub box_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavChartRes {
    pub path: String,
    pub markers: Vec<EventMarkerDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RadarDimensionDto {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RadarReq {
    pub dimensions: Vec<RadarDimensionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SvgRes {
    pub svg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurvePointDto {
    pub month: u32,
    pub nav: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecoveryCurveReq {
    pub curve: Vec<CurvePointDto>,
    pub cost_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WhatIfReq {
    pub values: Vec<f64>,
}

/// An SVG polyline `points` attribute; empty when the input cannot produce a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointsRes {
    pub points: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecoveryDaysReq {
    pub shares: f64,
    pub cost_price: f64,
    pub current_nav: f64,
    #[serde(default)]
    pub profit: Option<f64>,
    pub annual_return: f64,
}

/// Trading days to recover a loss; 999 when it cannot be recovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecoveryDaysRes {
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_req_text_is_optional() {
        let req: RenderReq = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, None);
        let req: RenderReq = serde_json::from_str(r#"{"text":"AI 预判"}"#).unwrap();
        assert_eq!(req.text.as_deref(), Some("AI 预判"));
    }

    #[test]
    fn test_nav_chart_req_keeps_raw_dates() {
        let req: NavChartReq =
            serde_json::from_str(r#"{"points":[{"date":"2020/02/03","nav":1.2}]}"#).unwrap();
        assert_eq!(req.points[0].date, "2020/02/03");
    }
}
