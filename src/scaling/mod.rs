//! Column-scoped scaling for labeled tables.
//!
//! Numeric scalers operate on anonymous 2-D arrays and know nothing about
//! column labels. [`ColumnScaler`] reconciles the two worlds: it hands the
//! wrapped scaler only the configured subset of a table's columns and writes
//! the scaled values back under their original names, returning a full table.

pub mod column;

pub use column::{ColumnScaler, Scaler};
