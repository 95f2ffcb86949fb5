use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{validation, AppError, AppResult},
    geo, reports,
    state::AppState,
    types::{CarrierReportRow, NewLocality, ReportQuery, SellerReportRow},
};

/// `POST /localities` — runs the resolve-or-create cascade.
///
/// 201 with the created locality, 409 when the locality already exists under
/// the resolved province, 422 for missing or empty fields.
pub async fn create_locality(
    State(state): State<AppState>,
    Json(req): Json<NewLocality>,
) -> AppResult<impl IntoResponse> {
    // Validate before any transaction opens
    let input = NewLocality {
        locality_name: validation::require_text(&req.locality_name, "locality_name")?.to_string(),
        province_name: validation::require_text(&req.province_name, "province_name")?.to_string(),
        country_name: validation::require_text(&req.country_name, "country_name")?.to_string(),
    };

    match geo::create_locality(&state.db, &input).await {
        Ok(locality) => {
            state.metrics.inc_localities_created();
            Ok((StatusCode::CREATED, Json(locality)))
        }
        Err(e @ AppError::Conflict(_)) => {
            state.metrics.inc_locality_conflicts();
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// `GET /localities/reports/sellers[?id=]`
pub async fn report_sellers(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let rows = super::run_report(&state, &reports::SELLERS_PER_LOCALITY, &q).await?;
    let items: Vec<SellerReportRow> = rows.into_iter().map(SellerReportRow::from).collect();
    Ok(Json(items))
}

/// `GET /localities/reports/carriers[?id=]`
pub async fn report_carriers(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let rows = super::run_report(&state, &reports::CARRIERS_PER_LOCALITY, &q).await?;
    let items: Vec<CarrierReportRow> = rows.into_iter().map(CarrierReportRow::from).collect();
    Ok(Json(items))
}
