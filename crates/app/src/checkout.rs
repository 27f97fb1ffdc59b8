use std::time::Instant;

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics::{counter, histogram};
use mkt_checkout_core::checkout::checkout;
use mkt_checkout_core::types::{CartItem, Tier};
use serde::Deserialize;
use tracing::{info, warn};

use crate::problem::ProblemResponse;

/// Payload accepted by `POST /checkout`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    items: Vec<CartItem>,
    #[serde(default)]
    user_tier: Tier,
}

pub async fn handle(headers: HeaderMap, body: Bytes) -> Result<Response, ProblemResponse> {
    let start = Instant::now();

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let body_text = std::str::from_utf8(&body).map_err(|_| {
        observe(start, "rejected");
        ProblemResponse::new(
            StatusCode::BAD_REQUEST,
            "invalid_payload",
            "request body must be valid UTF-8",
        )
    })?;

    let request: CheckoutRequest = serde_json::from_str(body_text).map_err(|err| {
        observe(start, "rejected");
        ProblemResponse::new(
            StatusCode::BAD_REQUEST,
            "invalid_json",
            format!("failed to parse payload: {err}"),
        )
    })?;

    let outcome = checkout(authorization, &request.items, request.user_tier).map_err(|err| {
        warn!(stage = "checkout", error = %err, "cart rejected");
        observe(start, "rejected");
        ProblemResponse::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid_cart", err.to_string())
    })?;

    if !outcome.authorized {
        observe(start, "unauthorized");
        return Err(ProblemResponse::new(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or invalid bearer token",
        ));
    }

    info!(
        stage = "checkout",
        tier = request.user_tier.as_str(),
        items = request.items.len(),
        subtotal = outcome.subtotal,
        total = outcome.total,
        "checkout authorized"
    );
    observe(start, "ok");

    Ok(Json(outcome).into_response())
}

fn observe(start: Instant, result: &'static str) {
    counter!("checkout_requests_total", "result" => result).increment(1);
    histogram!("checkout_latency_seconds", "result" => result)
        .record(start.elapsed().as_secs_f64());
}
