//! Integration and unit tests for the Lagerhof application.
//!
//! - **geo_tests**: resolve-or-create cascade and transaction rollback
//! - **report_tests**: relation counter and report assembler
//! - **api_tests**: HTTP endpoint tests over the assembled router
//! - **db_tests**: schema, unique indexes and foreign-key enforcement
//! - **config_tests**: configuration loading and validation
//! - **error_tests**: error display and HTTP status mapping

pub mod config_tests;
pub mod report_tests;
