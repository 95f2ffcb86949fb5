//! HTTP route handlers for the Lagerhof API.
//!
//! - `buyers`: purchase-order counts per buyer
//! - `employees`: inbound-order counts per employee
//! - `health`: health check and system status endpoints
//! - `localities`: locality creation (geo cascade) and seller/carrier reports
//! - `sections`: product counts per section

pub mod buyers;
pub mod employees;
pub mod health;
pub mod localities;
pub mod sections;

use crate::error::{validation, AppResult};
use crate::reports::{RelationCountReport, RelationReport};
use crate::state::AppState;
use crate::types::ReportQuery;

/// Shared branch point of every report endpoint: single-parent mode when an
/// id is given, all-parents mode otherwise.
pub(crate) async fn run_report(
    state: &AppState,
    report: &RelationReport,
    query: &ReportQuery,
) -> AppResult<Vec<RelationCountReport>> {
    validation::validate_positive_id(query.id, "id")?;
    let rows = match query.id {
        Some(id) => vec![report.for_parent(&state.db, id).await?],
        None => report.for_all(&state.db, state.config.reports.max_rows).await?,
    };
    state.metrics.inc_reports_served();
    Ok(rows)
}
