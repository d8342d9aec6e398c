use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info_span, Level};

use crate::config::AppState;
use crate::handlers::countries::{get_exchange, get_info};
use crate::handlers::status::{index, status};

pub const API_PREFIX: &str = "/countryinfo/v1";

pub const ENDPOINTS: [&str; 3] = [
    "/countryinfo/v1/status",
    "/countryinfo/v1/info/{country_code}",
    "/countryinfo/v1/exchange/{country_code}",
];

pub fn router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let request_id = req
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            info_span!(
                "request",
                method = %req.method(),
                path = %req.uri().path(),
                request_id = %request_id,
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index))
        .route(&format!("{API_PREFIX}/status"), get(status))
        .route(&format!("{API_PREFIX}/info/:country_code"), get(get_info))
        .route(&format!("{API_PREFIX}/exchange/:country_code"), get(get_exchange))
        .with_state(state)
        .layer(trace)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
