use sqlx::SqlitePool;

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    // Foreign keys are critical - the geo hierarchy relies on them
    sqlx::query("PRAGMA foreign_keys=ON;").execute(pool).await?;

    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA temp_store=MEMORY;").execute(pool).await {
        tracing::warn!("Failed to set temp_store: {}", e);
    }

    // Geographic hierarchy: countries -> provinces -> localities.
    // UNIQUE indexes back the atomic resolve-or-create upserts.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS provinces (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            country_id INTEGER NOT NULL,
            FOREIGN KEY(country_id) REFERENCES countries(id),
            UNIQUE(name, country_id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS localities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            province_id INTEGER NOT NULL,
            FOREIGN KEY(province_id) REFERENCES provinces(id),
            UNIQUE(name, province_id)
        )"#,
    )
    .execute(pool)
    .await?;

    // Report parents without a geo relation
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS sections (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            section_number TEXT NOT NULL UNIQUE
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            card_number TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS buyers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            card_number TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    // Report children, each referencing its parent via FK
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS sellers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_name TEXT NOT NULL,
            locality_id INTEGER NOT NULL,
            FOREIGN KEY(locality_id) REFERENCES localities(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS carriers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_name TEXT NOT NULL,
            locality_id INTEGER NOT NULL,
            FOREIGN KEY(locality_id) REFERENCES localities(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            description TEXT NOT NULL,
            section_id INTEGER NOT NULL,
            FOREIGN KEY(section_id) REFERENCES sections(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS inbound_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_number TEXT NOT NULL,
            employee_id INTEGER NOT NULL,
            FOREIGN KEY(employee_id) REFERENCES employees(id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS purchase_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_number TEXT NOT NULL,
            buyer_id INTEGER NOT NULL,
            FOREIGN KEY(buyer_id) REFERENCES buyers(id)
        )"#,
    )
    .execute(pool)
    .await?;

    // FK indexes for the relation counter's GROUP BY / filtered COUNT queries
    let indexes = [
        ("idx_provinces_country", "CREATE INDEX IF NOT EXISTS idx_provinces_country ON provinces(country_id)"),
        ("idx_localities_province", "CREATE INDEX IF NOT EXISTS idx_localities_province ON localities(province_id)"),
        ("idx_sellers_locality", "CREATE INDEX IF NOT EXISTS idx_sellers_locality ON sellers(locality_id)"),
        ("idx_carriers_locality", "CREATE INDEX IF NOT EXISTS idx_carriers_locality ON carriers(locality_id)"),
        ("idx_products_section", "CREATE INDEX IF NOT EXISTS idx_products_section ON products(section_id)"),
        ("idx_inbound_orders_employee", "CREATE INDEX IF NOT EXISTS idx_inbound_orders_employee ON inbound_orders(employee_id)"),
        ("idx_purchase_orders_buyer", "CREATE INDEX IF NOT EXISTS idx_purchase_orders_buyer ON purchase_orders(buyer_id)"),
    ];

    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            match &e {
                sqlx::Error::Database(db_err) => {
                    let msg = db_err.message().to_lowercase();
                    if msg.contains("already exists") || msg.contains("duplicate") {
                        tracing::debug!("Index {} already exists, skipping", name);
                    } else {
                        tracing::warn!("Failed to create index {}: {}", name, e);
                    }
                }
                _ => {
                    tracing::warn!("Failed to create index {}: {}", name, e);
                }
            }
        }
    }

    Ok(())
}
