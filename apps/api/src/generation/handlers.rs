//! Axum route handlers for the generation API.
//!
//! Handlers are infallible by design: every pipeline produces a document —
//! remote when available, local fallback otherwise — so the caller never
//! sees a raw error from the generation path.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::generation::lead_scoring::{generate_lead_score, LeadInputs};
use crate::generation::marketing::{generate_marketing_campaign, MarketingInputs};
use crate::generation::sales::{generate_sales_pitch, SalesInputs};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// POST /api/marketing
pub async fn handle_marketing(
    State(state): State<AppState>,
    Json(inputs): Json<MarketingInputs>,
) -> Json<GenerateResponse> {
    let result = generate_marketing_campaign(state.generator.as_ref(), &inputs).await;
    Json(GenerateResponse { result })
}

/// POST /api/sales
pub async fn handle_sales(
    State(state): State<AppState>,
    Json(inputs): Json<SalesInputs>,
) -> Json<GenerateResponse> {
    let result = generate_sales_pitch(state.generator.as_ref(), &inputs).await;
    Json(GenerateResponse { result })
}

/// POST /api/leads/score
pub async fn handle_lead_score(
    State(state): State<AppState>,
    Json(inputs): Json<LeadInputs>,
) -> Json<GenerateResponse> {
    let result = generate_lead_score(state.generator.as_ref(), &inputs).await;
    Json(GenerateResponse { result })
}
