//! HTTP request boundary
//!
//! A single route exposes the aggregate: `GET /api/v1/eth/{address}`.
//! Success returns the [`EthStats`](crate::types::EthStats) JSON; any
//! aggregation failure returns 500 with a problem-details style body. The
//! status line and the body always agree - the handler has exactly one
//! exit per outcome.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::stats::StatsAggregator;

/// Error body returned when aggregation fails.
///
/// No structured error code is part of the external contract; `detail`
/// carries the human-readable failure description.
#[derive(Debug, Serialize)]
struct ApiProblem {
    title: String,
    status: u16,
    detail: String,
}

/// Builds the service router.
pub fn router(aggregator: StatsAggregator) -> Router {
    Router::new()
        .route("/api/v1/eth/{address}", get(get_eth_stats))
        .with_state(aggregator)
}

/// Starts the API server.
pub async fn serve_api(listener: TcpListener, aggregator: StatsAggregator) -> anyhow::Result<()> {
    let app = router(aggregator);

    let addr = listener.local_addr()?;

    info!(address = ?addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Handler for the `/api/v1/eth/{address}` endpoint.
async fn get_eth_stats(
    State(aggregator): State<StatsAggregator>,
    Path(address): Path<String>,
) -> Response {
    info!(address = %address, "Received stats request");

    match aggregator.get(&address).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => {
            let problem = ApiProblem {
                title: "Internal Server Error".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                detail: e.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(problem)).into_response()
        }
    }
}
