use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    reports,
    state::AppState,
    types::{InboundOrderReportRow, ReportQuery},
};

/// `GET /employees/reports/inbound-orders[?id=]`
pub async fn report_inbound_orders(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let rows = super::run_report(&state, &reports::INBOUND_ORDERS_PER_EMPLOYEE, &q).await?;
    let items: Vec<InboundOrderReportRow> =
        rows.into_iter().map(InboundOrderReportRow::from).collect();
    Ok(Json(items))
}
