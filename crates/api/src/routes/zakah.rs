//! Zakah calculator routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{error_response, parse_body};
use crate::AppState;
use ishrakaat_core::zakah::{
    self, CropsInput, LivestockInput, MetalPrices, NisabRates, ReferenceAmount, ZakahWealthInput,
};
use ishrakaat_shared::AppError;
use ishrakaat_shared::types::Currency;

/// Creates the Zakah routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zakah/wealth", post(wealth))
        .route("/zakah/livestock", post(livestock))
        .route("/zakah/crops", post(crops))
        .route("/zakah/other", post(other_asset))
        .route("/zakah/nisab", post(nisab))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for livestock Zakah. Missing classes count as zero.
#[derive(Debug, Deserialize)]
pub struct LivestockRequest {
    /// Number of camels.
    #[serde(default)]
    pub camels: i64,
    /// Number of cows/buffalo.
    #[serde(default)]
    pub cattle: i64,
    /// Number of sheep/goats.
    #[serde(default)]
    pub sheep: i64,
}

/// Request body for generic-asset Zakah.
#[derive(Debug, Deserialize)]
pub struct OtherAssetRequest {
    /// Declared asset value.
    pub value: Decimal,
}

/// Request body for Nisab derivation.
#[derive(Debug, Deserialize)]
pub struct NisabRequest {
    /// Gold price per troy ounce in USD.
    pub gold_price_usd_oz: Decimal,
    /// Silver price per troy ounce in USD.
    #[serde(default)]
    pub silver_price_usd_oz: Option<Decimal>,
    /// Units of local currency per USD.
    pub usd_rate: Decimal,
}

/// Response for Nisab derivation.
#[derive(Debug, Serialize)]
pub struct NisabResponse {
    /// Currency the amounts are expressed in.
    pub currency: Currency,
    /// Gold and silver Nisab.
    pub rates: NisabRates,
    /// Amounts derived from the gold Nisab.
    pub references: Vec<ReferenceAmount>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /zakah/wealth
async fn wealth(payload: Result<Json<ZakahWealthInput>, JsonRejection>) -> Response {
    let input = match parse_body(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    debug!(wealth = %input.wealth, "Evaluating wealth Zakah");

    match zakah::wealth_zakah(&input) {
        Ok(result) => {
            info!(
                gold_due = %result.gold.due,
                silver_due = %result.silver.due,
                "Wealth Zakah evaluated"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => error_response(&AppError::validation(e)),
    }
}

/// POST /zakah/livestock
async fn livestock(payload: Result<Json<LivestockRequest>, JsonRejection>) -> Response {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let input = match LivestockInput::try_from_counts(request.camels, request.cattle, request.sheep)
    {
        Ok(input) => input,
        Err(e) => return error_response(&AppError::validation(e)),
    };
    debug!(
        camels = input.camels,
        cattle = input.cattle,
        sheep = input.sheep,
        "Evaluating livestock Zakah"
    );

    let result = zakah::evaluate_livestock(&input);
    for herd in [&result.camels, &result.cattle, &result.sheep] {
        if herd.needs_fiqh_reference() {
            warn!(
                kind = ?herd.kind,
                count = herd.count,
                remainder = herd.unresolved_remainder,
                "Livestock count not fully resolved by the tables"
            );
        }
    }

    (StatusCode::OK, Json(result)).into_response()
}

/// POST /zakah/crops
async fn crops(payload: Result<Json<CropsInput>, JsonRejection>) -> Response {
    let input = match parse_body(payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match zakah::crops_zakah(&input) {
        Ok(result) => {
            info!(irrigation = ?result.irrigation, due = %result.due, "Crops Zakah evaluated");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => error_response(&AppError::validation(e)),
    }
}

/// POST /zakah/other
async fn other_asset(payload: Result<Json<OtherAssetRequest>, JsonRejection>) -> Response {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match zakah::asset_zakah(request.value) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => error_response(&AppError::validation(e)),
    }
}

/// POST /zakah/nisab
async fn nisab(
    State(state): State<AppState>,
    payload: Result<Json<NisabRequest>, JsonRejection>,
) -> Response {
    let request = match parse_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let prices = MetalPrices {
        gold_usd_per_ounce: request.gold_price_usd_oz,
        silver_usd_per_ounce: request.silver_price_usd_oz,
        usd_rate: request.usd_rate,
    };
    let currency = state.config.calculator.currency;

    let derived = zakah::derive_nisab(&prices, &state.nisab_weights(), currency)
        .and_then(|rates| zakah::reference_amounts(rates.gold).map(|refs| (refs, rates)));
    match derived {
        Ok((references, rates)) => {
            info!(
                gold = %rates.gold,
                silver = %rates.silver,
                silver_source = ?rates.silver_source,
                "Nisab derived"
            );
            let response = NisabResponse {
                currency,
                rates,
                references,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(&AppError::validation(e)),
    }
}
