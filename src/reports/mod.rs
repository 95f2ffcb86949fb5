//! Relation counter and report assembler.
//!
//! Every report in the system is the same computation over a different pair
//! of tables: count the child rows referencing each parent row, then combine
//! the count with the parent's descriptive column. A [`RelationReport`]
//! descriptor names the tables and columns; the five concrete reports are
//! `const` descriptors below.
//!
//! Join policy is unified: all-parents mode lists every parent row, with a
//! zero count for parents that have no children (LEFT-JOIN semantics).
//! Single-id mode requires the parent row to exist and returns its count,
//! zero included.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::{Row, SqlitePool};

use crate::error::{AppResult, OptionExt};

/// Static description of a counted parent/child relation.
///
/// Table and column names are compile-time constants, never user input, so
/// interpolating them into SQL is safe; ids are still bound as parameters.
#[derive(Debug, Clone, Copy)]
pub struct RelationReport {
    /// Entity name used in NotFound messages.
    pub parent: &'static str,
    pub parent_table: &'static str,
    /// The descriptive column carried into the report next to the id.
    pub parent_label_column: &'static str,
    pub child_table: &'static str,
    pub child_fk_column: &'static str,
}

pub const SELLERS_PER_LOCALITY: RelationReport = RelationReport {
    parent: "locality",
    parent_table: "localities",
    parent_label_column: "name",
    child_table: "sellers",
    child_fk_column: "locality_id",
};

pub const CARRIERS_PER_LOCALITY: RelationReport = RelationReport {
    parent: "locality",
    parent_table: "localities",
    parent_label_column: "name",
    child_table: "carriers",
    child_fk_column: "locality_id",
};

pub const PRODUCTS_PER_SECTION: RelationReport = RelationReport {
    parent: "section",
    parent_table: "sections",
    parent_label_column: "section_number",
    child_table: "products",
    child_fk_column: "section_id",
};

pub const INBOUND_ORDERS_PER_EMPLOYEE: RelationReport = RelationReport {
    parent: "employee",
    parent_table: "employees",
    parent_label_column: "card_number",
    child_table: "inbound_orders",
    child_fk_column: "employee_id",
};

pub const PURCHASE_ORDERS_PER_BUYER: RelationReport = RelationReport {
    parent: "buyer",
    parent_table: "buyers",
    parent_label_column: "card_number",
    child_table: "purchase_orders",
    child_fk_column: "buyer_id",
};

/// A parent row reduced to the two columns reports need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRow {
    pub id: i64,
    pub label: String,
}

/// One report record: parent identity plus its child-row count.
/// Ephemeral, constructed per request and discarded after serialization.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelationCountReport {
    pub parent_id: i64,
    pub parent_label: String,
    pub count: i64,
}

/// Pure combination step, no side effects.
pub fn assemble(parent: ParentRow, count: i64) -> RelationCountReport {
    RelationCountReport { parent_id: parent.id, parent_label: parent.label, count }
}

impl RelationReport {
    /// Count of child rows referencing one parent id. Zero is a valid result.
    pub async fn count_for_parent(&self, pool: &SqlitePool, parent_id: i64) -> AppResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ?1",
            self.child_table, self.child_fk_column
        );
        let count: i64 = sqlx::query_scalar(&sql).bind(parent_id).fetch_one(pool).await?;
        Ok(count)
    }

    /// Per-parent counts over the whole child table, keyed by parent id.
    /// Parents without children do not appear here; the assembler fills zeros.
    pub async fn counts_by_parent(&self, pool: &SqlitePool) -> AppResult<HashMap<i64, i64>> {
        let sql = format!(
            "SELECT {fk} AS parent_id, COUNT(*) AS cnt FROM {child} GROUP BY {fk}",
            fk = self.child_fk_column,
            child = self.child_table
        );
        let rows = sqlx::query(&sql).fetch_all(pool).await?;
        let mut counts = HashMap::with_capacity(rows.len());
        for r in rows {
            counts.insert(r.get::<i64, _>("parent_id"), r.get::<i64, _>("cnt"));
        }
        Ok(counts)
    }

    async fn fetch_parent(&self, pool: &SqlitePool, id: i64) -> AppResult<Option<ParentRow>> {
        let sql = format!(
            "SELECT id, {} AS label FROM {} WHERE id = ?1",
            self.parent_label_column, self.parent_table
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row.map(|r| ParentRow { id: r.get("id"), label: r.get("label") }))
    }

    async fn fetch_parents(&self, pool: &SqlitePool, limit: i64) -> AppResult<Vec<ParentRow>> {
        let sql = format!(
            "SELECT id, {} AS label FROM {} ORDER BY id ASC LIMIT ?1",
            self.parent_label_column, self.parent_table
        );
        let rows = sqlx::query(&sql).bind(limit).fetch_all(pool).await?;
        Ok(rows.into_iter().map(|r| ParentRow { id: r.get("id"), label: r.get("label") }).collect())
    }

    /// Report for a single parent id. The parent must exist; a missing id is
    /// a NotFound, never a zero-count success.
    pub async fn for_parent(&self, pool: &SqlitePool, id: i64) -> AppResult<RelationCountReport> {
        let parent = self.fetch_parent(pool, id).await?.ok_or_not_found(self.parent)?;
        let count = self.count_for_parent(pool, id).await?;
        Ok(assemble(parent, count))
    }

    /// Report for all parents, zero-count parents included.
    pub async fn for_all(&self, pool: &SqlitePool, limit: i64) -> AppResult<Vec<RelationCountReport>> {
        let parents = self.fetch_parents(pool, limit).await?;
        let counts = self.counts_by_parent(pool).await?;
        Ok(parents
            .into_iter()
            .map(|p| {
                let count = counts.get(&p.id).copied().unwrap_or(0);
                assemble(p, count)
            })
            .collect())
    }
}
