use serde::{Deserialize, Serialize};

use crate::reports::RelationCountReport;

/// Body of `POST /localities`. All three names are required and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocality {
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

/// A created locality as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalityDto {
    pub id: i64,
    pub locality_name: String,
    pub province_id: i64,
}

/// Query string shared by every report endpoint: an optional parent id.
/// Present → single-parent mode, absent → all-parents mode.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub id: Option<i64>,
}

// Per-endpoint report rows. Same record, endpoint-specific JSON keys.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerReportRow {
    pub locality_id: i64,
    pub locality_name: String,
    pub sellers_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierReportRow {
    pub locality_id: i64,
    pub locality_name: String,
    pub carriers_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductReportRow {
    pub section_id: i64,
    pub section_number: String,
    pub products_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundOrderReportRow {
    pub employee_id: i64,
    pub card_number: String,
    pub inbound_orders_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderReportRow {
    pub buyer_id: i64,
    pub card_number: String,
    pub purchase_orders_count: i64,
}

impl From<RelationCountReport> for SellerReportRow {
    fn from(r: RelationCountReport) -> Self {
        Self { locality_id: r.parent_id, locality_name: r.parent_label, sellers_count: r.count }
    }
}

impl From<RelationCountReport> for CarrierReportRow {
    fn from(r: RelationCountReport) -> Self {
        Self { locality_id: r.parent_id, locality_name: r.parent_label, carriers_count: r.count }
    }
}

impl From<RelationCountReport> for ProductReportRow {
    fn from(r: RelationCountReport) -> Self {
        Self { section_id: r.parent_id, section_number: r.parent_label, products_count: r.count }
    }
}

impl From<RelationCountReport> for InboundOrderReportRow {
    fn from(r: RelationCountReport) -> Self {
        Self { employee_id: r.parent_id, card_number: r.parent_label, inbound_orders_count: r.count }
    }
}

impl From<RelationCountReport> for PurchaseOrderReportRow {
    fn from(r: RelationCountReport) -> Self {
        Self { buyer_id: r.parent_id, card_number: r.parent_label, purchase_orders_count: r.count }
    }
}
