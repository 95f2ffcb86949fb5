use crate::config::{self, AppConfig};

#[test]
fn embedded_defaults_parse() {
    let cfg = AppConfig::default();
    assert!(!cfg.server.host.is_empty());
    assert!(cfg.server.port > 0);
    assert!(cfg.database.url.starts_with("sqlite://"));
    assert!(cfg.reports.max_rows > 0);
}

#[test]
fn load_succeeds_without_local_overrides() {
    let cfg = config::load().unwrap();
    assert!(!cfg.server.host.is_empty());
    assert!(cfg.server.port > 0);
    assert!(!cfg.database.url.is_empty());
}

#[test]
fn ensure_sqlite_parent_dir_creates_missing_dirs() {
    let base = std::env::temp_dir().join(format!("lagerhof_test_cfg_{}", uuid::Uuid::new_v4()));
    let db_path = base.join("nested").join("test.db");
    let url = format!("sqlite://{}", db_path.to_string_lossy());

    // Cleanup just in case
    let _ = std::fs::remove_dir_all(&base);
    assert!(!db_path.parent().unwrap().exists());

    config::ensure_sqlite_parent_dir(&url).unwrap();
    assert!(db_path.parent().unwrap().exists());

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn ensure_sqlite_parent_dir_ignores_non_sqlite_urls() {
    config::ensure_sqlite_parent_dir("postgres://localhost/db").unwrap();
}
