use crate::db;
use crate::error::AppError;
use crate::reports::{
    assemble, ParentRow, CARRIERS_PER_LOCALITY, INBOUND_ORDERS_PER_EMPLOYEE, PRODUCTS_PER_SECTION,
    PURCHASE_ORDERS_PER_BUYER, SELLERS_PER_LOCALITY,
};
use sqlx::sqlite::SqlitePoolOptions;

async fn setup_test_db() -> sqlx::SqlitePool {
    let pool = SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap();
    db::init_db(&pool).await.unwrap();
    pool
}

/// Two localities under one fresh province; `sellers` spread 2/0 across them.
async fn seed_localities_with_sellers(pool: &sqlx::SqlitePool) -> (i64, i64) {
    let country_id: i64 =
        sqlx::query_scalar("INSERT INTO countries (name) VALUES ('Brasil') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    let province_id: i64 = sqlx::query_scalar(
        "INSERT INTO provinces (name, country_id) VALUES ('Bahia', ?1) RETURNING id",
    )
    .bind(country_id)
    .fetch_one(pool)
    .await
    .unwrap();
    let salvador: i64 = sqlx::query_scalar(
        "INSERT INTO localities (name, province_id) VALUES ('Salvador', ?1) RETURNING id",
    )
    .bind(province_id)
    .fetch_one(pool)
    .await
    .unwrap();
    let ilheus: i64 = sqlx::query_scalar(
        "INSERT INTO localities (name, province_id) VALUES ('Ilhéus', ?1) RETURNING id",
    )
    .bind(province_id)
    .fetch_one(pool)
    .await
    .unwrap();

    for company in ["Acme Trading", "Bahia Exports"] {
        sqlx::query("INSERT INTO sellers (company_name, locality_id) VALUES (?1, ?2)")
            .bind(company)
            .bind(salvador)
            .execute(pool)
            .await
            .unwrap();
    }

    (salvador, ilheus)
}

#[tokio::test]
async fn single_id_mode_returns_count_for_that_parent() {
    let pool = setup_test_db().await;
    let (salvador, _) = seed_localities_with_sellers(&pool).await;

    let report = SELLERS_PER_LOCALITY.for_parent(&pool, salvador).await.unwrap();
    assert_eq!(report.parent_id, salvador);
    assert_eq!(report.parent_label, "Salvador");
    assert_eq!(report.count, 2);
}

#[tokio::test]
async fn single_id_mode_zero_children_is_success_not_error() {
    let pool = setup_test_db().await;
    let (_, ilheus) = seed_localities_with_sellers(&pool).await;

    let report = SELLERS_PER_LOCALITY.for_parent(&pool, ilheus).await.unwrap();
    assert_eq!(report.count, 0);
}

#[tokio::test]
async fn single_id_mode_missing_parent_is_not_found() {
    let pool = setup_test_db().await;
    seed_localities_with_sellers(&pool).await;

    let err = SELLERS_PER_LOCALITY.for_parent(&pool, 9999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn all_mode_includes_zero_count_parents() {
    let pool = setup_test_db().await;
    let (salvador, ilheus) = seed_localities_with_sellers(&pool).await;

    let rows = SELLERS_PER_LOCALITY.for_all(&pool, 5000).await.unwrap();
    assert_eq!(rows.len(), 2);

    let by_id = |id: i64| rows.iter().find(|r| r.parent_id == id).unwrap();
    assert_eq!(by_id(salvador).count, 2);
    assert_eq!(by_id(ilheus).count, 0);
}

#[tokio::test]
async fn all_mode_count_sum_matches_child_table_total() {
    let pool = setup_test_db().await;
    seed_localities_with_sellers(&pool).await;

    let rows = SELLERS_PER_LOCALITY.for_all(&pool, 5000).await.unwrap();
    let sum: i64 = rows.iter().map(|r| r.count).sum();
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sellers").fetch_one(&pool).await.unwrap();
    assert_eq!(sum, total);
}

#[tokio::test]
async fn all_mode_respects_row_limit() {
    let pool = setup_test_db().await;
    seed_localities_with_sellers(&pool).await;

    let rows = SELLERS_PER_LOCALITY.for_all(&pool, 1).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn carriers_report_counts_independently_of_sellers() {
    let pool = setup_test_db().await;
    let (salvador, ilheus) = seed_localities_with_sellers(&pool).await;

    sqlx::query("INSERT INTO carriers (company_name, locality_id) VALUES ('Cargas do Sul', ?1)")
        .bind(ilheus)
        .execute(&pool)
        .await
        .unwrap();

    let rows = CARRIERS_PER_LOCALITY.for_all(&pool, 5000).await.unwrap();
    let by_id = |id: i64| rows.iter().find(|r| r.parent_id == id).unwrap();
    assert_eq!(by_id(salvador).count, 0);
    assert_eq!(by_id(ilheus).count, 1);
}

#[tokio::test]
async fn products_per_section_report() {
    let pool = setup_test_db().await;

    let section: i64 =
        sqlx::query_scalar("INSERT INTO sections (section_number) VALUES ('SEC-01') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
    for desc in ["Frozen fish", "Frozen meat", "Ice cream"] {
        sqlx::query("INSERT INTO products (description, section_id) VALUES (?1, ?2)")
            .bind(desc)
            .bind(section)
            .execute(&pool)
            .await
            .unwrap();
    }

    let report = PRODUCTS_PER_SECTION.for_parent(&pool, section).await.unwrap();
    assert_eq!(report.parent_label, "SEC-01");
    assert_eq!(report.count, 3);
}

#[tokio::test]
async fn inbound_orders_per_employee_report() {
    let pool = setup_test_db().await;

    let employee: i64 = sqlx::query_scalar(
        "INSERT INTO employees (card_number, first_name, last_name) VALUES ('E-100', 'Ana', 'Souza') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO inbound_orders (order_number, employee_id) VALUES ('IO-1', ?1)")
        .bind(employee)
        .execute(&pool)
        .await
        .unwrap();

    let rows = INBOUND_ORDERS_PER_EMPLOYEE.for_all(&pool, 5000).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].parent_label, "E-100");
    assert_eq!(rows[0].count, 1);
}

#[tokio::test]
async fn purchase_orders_per_buyer_report() {
    let pool = setup_test_db().await;

    let buyer: i64 = sqlx::query_scalar(
        "INSERT INTO buyers (card_number, first_name, last_name) VALUES ('B-7', 'Luis', 'Prado') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    for order in ["PO-1", "PO-2"] {
        sqlx::query("INSERT INTO purchase_orders (order_number, buyer_id) VALUES (?1, ?2)")
            .bind(order)
            .bind(buyer)
            .execute(&pool)
            .await
            .unwrap();
    }

    let report = PURCHASE_ORDERS_PER_BUYER.for_parent(&pool, buyer).await.unwrap();
    assert_eq!(report.count, 2);
}

#[test]
fn assemble_is_a_pure_combination() {
    let parent = ParentRow { id: 7, label: "Salvador".to_string() };
    let report = assemble(parent.clone(), 3);
    assert_eq!(report.parent_id, 7);
    assert_eq!(report.parent_label, "Salvador");
    assert_eq!(report.count, 3);

    // Same inputs, same output
    assert_eq!(assemble(parent.clone(), 3), assemble(parent, 3));
}
