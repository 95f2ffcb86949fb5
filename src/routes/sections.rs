use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    reports,
    state::AppState,
    types::{ProductReportRow, ReportQuery},
};

/// `GET /sections/reports/products[?id=]`
pub async fn report_products(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let rows = super::run_report(&state, &reports::PRODUCTS_PER_SECTION, &q).await?;
    let items: Vec<ProductReportRow> = rows.into_iter().map(ProductReportRow::from).collect();
    Ok(Json(items))
}
