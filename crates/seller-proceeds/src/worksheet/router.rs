use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{ComputedTotals, LineItemInputs, Money};
use super::draft::{LineItemDefaults, WorksheetDraft};
use super::premium::compute_title_premium;
use super::service::WorksheetService;
use super::statement::StatementRow;
use super::validation::{check_range, MAX_AMOUNT};
use crate::error::AppError;

/// Router builder exposing the premium, defaults and worksheet endpoints.
pub fn worksheet_router(service: Arc<WorksheetService>) -> Router {
    Router::new()
        .route("/api/v1/premium", get(premium_handler))
        .route("/api/v1/worksheet/defaults", post(defaults_handler))
        .route("/api/v1/worksheet", post(prepare_handler))
        .route("/api/v1/worksheet/pdf", post(pdf_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PremiumQuery {
    pub(crate) selling_price: Money,
}

#[derive(Debug, Serialize)]
pub(crate) struct PremiumResponse {
    pub(crate) selling_price: Money,
    pub(crate) premium: Money,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DefaultsRequest {
    pub(crate) selling_price: Money,
    #[serde(default)]
    pub(crate) listing_agent_percent: Option<Decimal>,
    #[serde(default)]
    pub(crate) buyers_agent_percent: Option<Decimal>,
    #[serde(default)]
    pub(crate) transfer_tax_rate: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WorksheetResponse {
    pub(crate) inputs: LineItemInputs,
    pub(crate) totals: ComputedTotals,
    pub(crate) file_name: String,
    pub(crate) rows: Vec<StatementRow>,
}

pub(crate) async fn premium_handler(
    Query(query): Query<PremiumQuery>,
) -> Result<Json<PremiumResponse>, AppError> {
    check_range("selling_price", query.selling_price, MAX_AMOUNT)?;
    Ok(Json(PremiumResponse {
        selling_price: query.selling_price,
        premium: compute_title_premium(query.selling_price),
    }))
}

pub(crate) async fn defaults_handler(
    State(service): State<Arc<WorksheetService>>,
    Json(request): Json<DefaultsRequest>,
) -> Result<Json<LineItemDefaults>, AppError> {
    let defaults = service.defaults(
        request.selling_price,
        request.listing_agent_percent,
        request.buyers_agent_percent,
        request.transfer_tax_rate,
    )?;
    Ok(Json(defaults))
}

pub(crate) async fn prepare_handler(
    State(service): State<Arc<WorksheetService>>,
    Json(draft): Json<WorksheetDraft>,
) -> Result<Json<WorksheetResponse>, AppError> {
    let worksheet = service.prepare(draft)?;
    let statement = worksheet.statement();

    Ok(Json(WorksheetResponse {
        inputs: worksheet.inputs,
        totals: worksheet.totals,
        file_name: statement.file_name,
        rows: statement.rows,
    }))
}

pub(crate) async fn pdf_handler(
    State(service): State<Arc<WorksheetService>>,
    Json(draft): Json<WorksheetDraft>,
) -> Result<Response, AppError> {
    let worksheet = service.prepare(draft)?;
    let document = service.render_pdf(&worksheet)?;

    let headers = [
        (header::CONTENT_TYPE, mime::APPLICATION_PDF.to_string()),
        (
            header::CONTENT_DISPOSITION,
            attachment_disposition(&document.file_name),
        ),
    ];
    Ok((StatusCode::OK, headers, document.bytes).into_response())
}

/// `Content-Disposition` value restricted to visible ASCII so it is always a
/// valid header.
fn attachment_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|ch| if ch.is_ascii_graphic() { ch } else { '_' })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
