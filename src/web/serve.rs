use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::App;

use super::{midware, routes::routes, WebResult, REQUEST_ID_HEADER};

/// The core async function returning a future that will serve this application.
///
/// Accepts an `App` (the `TcpListener` and the `AppState`) and sets up a TraceLayer that provides console logging.
///
/// Current implementation might return an IO error from `axum::serve`
pub async fn serve(app: App) -> WebResult<()> {
    let App {
        app_state,
        listener,
    } = app;

    axum::serve(listener, app_router(app_state)).await?;

    Ok(())
}

/// All the routes wrapped in the request-id, tracing and response mapping middleware.
pub fn app_router(app_state: crate::AppState) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace_layer = build_trace_layer();

    Router::new().merge(routes(app_state)).layer(
        ServiceBuilder::new()
            // Set UUID per request
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            .layer(trace_layer)
            // The response passes through these layers bottom up, so the request id is already
            // propagated to the response by the time the response mapper sees it.
            .layer(middleware::map_response(midware::response_mapper))
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// Request/response tracing: one span per request, tagged with its request id.
/// Server errors are logged at error level, everything else at info.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let request_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|hv| hv.to_str().ok())
                .unwrap_or_default();

            tracing::info_span!("request", id = %request_id, route = %req.uri().path())
        })
        .on_request(|req: &Request<Body>, _s: &Span| {
            tracing::debug!("{:<12} - {}", "REQUEST", req.method())
        })
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let status = res.status();

            if status.is_server_error() {
                tracing::error!(%status, ?latency, "request failed");
            } else {
                tracing::info!(%status, ?latency, "request done");
            }
        })
}
