//! # API REST
//!
//! REST API implementation for FundLens.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for wire types and `fundlens-core` for rendering and chart geometry.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    CurvePointDto, EventMarkerDto, HealthRes, HealthService, NavChartReq, NavChartRes,
    NavPointDto, PathRes, PointsRes, RadarDimensionDto, RadarReq, RecoveryCurveReq,
    RecoveryDaysReq, RecoveryDaysRes, RenderReq, RenderRes, SparklineReq, SvgRes, WhatIfReq,
};
use fundlens_core::charts::{
    default_market_events, event_markers, nav_curve_path, recovery_curve_points, sparkline_path,
    what_if_line, CurvePoint, Frame, MarketEvent, NavPoint, RadarChart, RadarDimension,
};
use fundlens_core::portfolio::{recovery_days, Position};
use fundlens_core::CardRenderer;

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    renderer: Arc<CardRenderer>,
    events: Arc<Vec<MarketEvent>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        render,
        sparkline,
        nav_chart,
        radar_chart,
        recovery_curve,
        what_if,
        portfolio_recovery_days,
    ),
    components(schemas(
        HealthRes,
        RenderReq,
        RenderRes,
        SparklineReq,
        PathRes,
        NavPointDto,
        NavChartReq,
        EventMarkerDto,
        NavChartRes,
        RadarDimensionDto,
        RadarReq,
        SvgRes,
        CurvePointDto,
        RecoveryCurveReq,
        WhatIfReq,
        PointsRes,
        RecoveryDaysReq,
        RecoveryDaysRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router around a shared renderer.
///
/// Includes the Swagger UI at `/swagger-ui` and a permissive CORS layer.
pub fn router(renderer: Arc<CardRenderer>) -> Router {
    let state = AppState {
        renderer,
        events: Arc::new(default_market_events()),
    };

    Router::new()
        .route("/health", get(health))
        .route("/render", post(render))
        .route("/charts/sparkline", post(sparkline))
        .route("/charts/nav", post(nav_chart))
        .route("/charts/radar", post(radar_chart))
        .route("/charts/recovery", post(recovery_curve))
        .route("/charts/what-if", post(what_if))
        .route("/portfolio/recovery-days", post(portfolio_recovery_days))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/render",
    request_body = RenderReq,
    responses(
        (status = 200, description = "Rendered card fragment", body = RenderRes)
    )
)]
/// Render commentary into strategy cards
///
/// Never fails for well-formed JSON: rendering problems degrade to the plain-text fallback.
#[axum::debug_handler]
async fn render(State(state): State<AppState>, Json(req): Json<RenderReq>) -> Json<RenderRes> {
    let html = state.renderer.render(req.text.as_deref());
    Json(RenderRes { html })
}

#[utoipa::path(
    post,
    path = "/charts/sparkline",
    request_body = SparklineReq,
    responses(
        (status = 200, description = "Sparkline path data", body = PathRes)
    )
)]
#[axum::debug_handler]
async fn sparkline(
    State(_state): State<AppState>,
    Json(req): Json<SparklineReq>,
) -> Json<PathRes> {
    Json(PathRes {
        path: sparkline_path(&req.values, Frame::SPARKLINE),
    })
}

#[utoipa::path(
    post,
    path = "/charts/nav",
    request_body = NavChartReq,
    responses(
        (status = 200, description = "NAV curve with market-event markers", body = NavChartRes),
        (status = 400, description = "Bad request")
    )
)]
/// NAV history chart
///
/// Returns the curve path and the markers for the built-in market events that fall inside the
/// history.
///
/// # Returns
/// * `Ok(Json<NavChartRes>)` - Path data and placed markers
/// * `Err((StatusCode, &str))` - Bad request if any date is not `YYYY-MM-DD`
#[axum::debug_handler]
async fn nav_chart(
    State(state): State<AppState>,
    Json(req): Json<NavChartReq>,
) -> Result<Json<NavChartRes>, (StatusCode, &'static str)> {
    let points = req
        .points
        .iter()
        .map(|p| NavPoint::parse(&p.date, p.nav))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::warn!("NAV chart request rejected: {}", e);
            (StatusCode::BAD_REQUEST, "Invalid date")
        })?;

    let markers = event_markers(&points, &state.events, Frame::NAV)
        .into_iter()
        .map(|m| EventMarkerDto {
            date: m.date.to_string(),
            label: m.label,
            color: m.color,
            x: m.x,
            y: m.y,
            label_y: m.label_y,
            box_y: m.box_y,
        })
        .collect();

    Ok(Json(NavChartRes {
        path: nav_curve_path(&points, Frame::NAV),
        markers,
    }))
}

#[utoipa::path(
    post,
    path = "/charts/radar",
    request_body = RadarReq,
    responses(
        (status = 200, description = "Radar chart SVG", body = SvgRes)
    )
)]
/// Radar chart for three or more scored dimensions; fewer yields an empty `svg`.
#[axum::debug_handler]
async fn radar_chart(State(_state): State<AppState>, Json(req): Json<RadarReq>) -> Json<SvgRes> {
    let dimensions: Vec<RadarDimension> = req
        .dimensions
        .into_iter()
        .map(|d| RadarDimension {
            name: d.name,
            value: d.value,
        })
        .collect();

    Json(SvgRes {
        svg: RadarChart::default().render_svg(&dimensions),
    })
}

#[utoipa::path(
    post,
    path = "/charts/recovery",
    request_body = RecoveryCurveReq,
    responses(
        (status = 200, description = "Recovery scenario polyline", body = PointsRes)
    )
)]
#[axum::debug_handler]
async fn recovery_curve(
    State(_state): State<AppState>,
    Json(req): Json<RecoveryCurveReq>,
) -> Json<PointsRes> {
    let curve: Vec<CurvePoint> = req
        .curve
        .iter()
        .map(|c| CurvePoint {
            month: c.month,
            nav: c.nav,
        })
        .collect();

    Json(PointsRes {
        points: recovery_curve_points(&curve, req.cost_price),
    })
}

#[utoipa::path(
    post,
    path = "/charts/what-if",
    request_body = WhatIfReq,
    responses(
        (status = 200, description = "What-if comparison polyline", body = PointsRes)
    )
)]
#[axum::debug_handler]
async fn what_if(State(_state): State<AppState>, Json(req): Json<WhatIfReq>) -> Json<PointsRes> {
    Json(PointsRes {
        points: what_if_line(&req.values),
    })
}

#[utoipa::path(
    post,
    path = "/portfolio/recovery-days",
    request_body = RecoveryDaysReq,
    responses(
        (status = 200, description = "Trading days to recover a loss", body = RecoveryDaysRes)
    )
)]
/// Loss recovery estimate
///
/// Compounds `annual_return` over 250 trading days a year. A position that cannot recover
/// reports 999 days.
#[axum::debug_handler]
async fn portfolio_recovery_days(
    State(_state): State<AppState>,
    Json(req): Json<RecoveryDaysReq>,
) -> Json<RecoveryDaysRes> {
    let position = Position {
        shares: req.shares,
        cost_price: req.cost_price,
        current_nav: req.current_nav,
        profit: req.profit,
    };

    Json(RecoveryDaysRes {
        days: recovery_days(&position, req.annual_return),
    })
}
