//! Hierarchical geographic entity resolution.
//!
//! A locality creation request carries three names (country, province,
//! locality). The country and province are resolved-or-created, the locality
//! is always inserted fresh. All three steps run inside one transaction: the
//! whole cascade commits or rolls back together, a partial hierarchy never
//! persists.
//!
//! Resolution uses `INSERT ... ON CONFLICT DO UPDATE ... RETURNING id` per
//! ancestor level, backed by unique indexes on `countries(name)` and
//! `provinces(name, country_id)`. Two concurrent requests naming the same new
//! country therefore converge on a single row instead of racing a
//! select-then-insert.

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::AppResult;
use crate::types::{LocalityDto, NewLocality};

/// Runs the country → province → locality cascade.
///
/// Input is expected to be validated (non-empty, trimmed) by the caller;
/// no transaction is opened for invalid input.
pub async fn create_locality(pool: &SqlitePool, input: &NewLocality) -> AppResult<LocalityDto> {
    let mut tx = pool.begin().await?;

    let country_id = resolve_country(&mut tx, &input.country_name).await?;
    let province_id = resolve_province(&mut tx, &input.province_name, country_id).await?;

    let locality_id: i64 = sqlx::query_scalar(
        r#"INSERT INTO localities (name, province_id) VALUES (?1, ?2) RETURNING id"#,
    )
    .bind(&input.locality_name)
    .bind(province_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(
        locality_id,
        province_id,
        country_id,
        "created locality {}",
        input.locality_name
    );

    Ok(LocalityDto { id: locality_id, locality_name: input.locality_name.clone(), province_id })
}

/// Resolves a country by exact name, inserting it if absent.
///
/// The upsert touches the existing row on conflict so that RETURNING always
/// yields the surviving id, whether the row was just inserted or already there.
async fn resolve_country(tx: &mut Transaction<'_, Sqlite>, name: &str) -> AppResult<i64> {
    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO countries (name) VALUES (?1)
           ON CONFLICT(name) DO UPDATE SET name = excluded.name
           RETURNING id"#,
    )
    .bind(name)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

/// Resolves a province by exact name scoped to the resolved country,
/// inserting it if absent. Same-named provinces under different countries
/// are distinct rows.
async fn resolve_province(
    tx: &mut Transaction<'_, Sqlite>,
    name: &str,
    country_id: i64,
) -> AppResult<i64> {
    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO provinces (name, country_id) VALUES (?1, ?2)
           ON CONFLICT(name, country_id) DO UPDATE SET name = excluded.name
           RETURNING id"#,
    )
    .bind(name)
    .bind(country_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}
