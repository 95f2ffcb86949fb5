use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    reports,
    state::AppState,
    types::{PurchaseOrderReportRow, ReportQuery},
};

/// `GET /buyers/reports/purchase-orders[?id=]`
pub async fn report_purchase_orders(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let rows = super::run_report(&state, &reports::PURCHASE_ORDERS_PER_BUYER, &q).await?;
    let items: Vec<PurchaseOrderReportRow> =
        rows.into_iter().map(PurchaseOrderReportRow::from).collect();
    Ok(Json(items))
}
