//! Inheritance (Fara'id) routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{error_response, parse_body};
use crate::AppState;
use ishrakaat_core::faraid::{
    EstateInput, HeirCategory, HeirClaims, HeirInfo, ShareResult, catalogue,
};
use ishrakaat_shared::{AppError, AppResult};
use ishrakaat_shared::types::Currency;

/// Creates the Fara'id routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/faraid/heirs", get(list_heirs))
        .route("/faraid/distribute", post(distribute))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a distribution.
#[derive(Debug, Deserialize)]
pub struct DistributeRequest {
    /// Gross estate value.
    pub estate: Decimal,
    /// Debts and funeral costs.
    #[serde(default)]
    pub debts: Decimal,
    /// Heir counts keyed by category key, e.g. `{"son": 2}`.
    #[serde(default)]
    pub heirs: BTreeMap<String, i64>,
}

/// Heir catalogue response.
#[derive(Debug, Serialize)]
pub struct HeirsResponse {
    /// Every heir category in declaration order.
    pub heirs: Vec<HeirInfo>,
}

/// Response for a distribution.
#[derive(Debug, Serialize)]
pub struct DistributeResponse {
    /// False when nothing is left after debts.
    pub distributed: bool,
    /// Currency the amounts are expressed in.
    pub currency: Currency,
    /// Shares, present when `distributed` is true.
    #[serde(flatten)]
    pub result: Option<ShareResult>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_claims(heirs: BTreeMap<String, i64>) -> AppResult<HeirClaims> {
    let counts = heirs
        .into_iter()
        .map(|(key, count)| key.parse::<HeirCategory>().map(|heir| (heir, count)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::validation)?;
    HeirClaims::from_signed_counts(counts).map_err(AppError::validation)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /faraid/heirs
async fn list_heirs() -> Json<HeirsResponse> {
    Json(HeirsResponse {
        heirs: catalogue(),
    })
}

/// POST /faraid/distribute
async fn distribute(
    State(state): State<AppState>,
    payload: Result<Json<DistributeRequest>, JsonRejection>,
) -> Response {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let claims = match parse_claims(request.heirs) {
        Ok(claims) => claims,
        Err(e) => return error_response(&e),
    };
    let estate = EstateInput::new(request.estate, request.debts);
    debug!(
        estate = %estate.gross_estate,
        debts = %estate.debts,
        heirs = ?claims,
        "Distributing estate"
    );

    match state.engine().distribute(&estate, &claims) {
        Ok(result) => {
            match &result {
                Some(result) if result.awl_applied => warn!(
                    net_estate = %result.net_estate,
                    "Shares exceeded the net estate and were reduced proportionally"
                ),
                Some(result) => info!(
                    net_estate = %result.net_estate,
                    shares = result.shares.len(),
                    undistributed = %result.undistributed,
                    "Estate distributed"
                ),
                None => info!("Nothing left to distribute after debts"),
            }
            let response = DistributeResponse {
                distributed: result.is_some(),
                currency: state.config.calculator.currency,
                result,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(&AppError::validation(e)),
    }
}
