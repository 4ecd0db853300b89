//! # framepipe
//!
//! Named, ordered feature-transformation pipelines over labeled tables, with a
//! column-scoped adapter that lets arbitrary fit/transform-style scalers work
//! on a subset of a table's columns.
//!
//! ## Core Design Principles
//!
//! - **Two-phase execution**: every step exposes `fit` (learn state from a
//!   training table) and `transform` (produce a new table); the pipeline runs
//!   each phase over its steps in insertion order.
//! - **Lazy capability checks**: steps are opaque trait objects; nothing is
//!   validated at registration. A step lacking an operation fails at call time
//!   with a distinguishable [`PipelineError::UnsupportedCapability`].
//! - **Differentiated failure policy**: fitting is strictly fail-fast. During
//!   transform, a step that trips over a missing column (the routine case of
//!   an optional feature being absent from a batch) is logged and skipped,
//!   while every other failure still aborts the chain.
//! - **Labels in, labels out**: [`ColumnScaler`] feeds a plain numeric array
//!   scaler from a labeled table and writes the results back under the
//!   original column names, so tabular structure survives scaling.
//!
//! ## Quick Start
//!
//! ```
//! use framepipe::Pipeline;
//! use polars::df;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = df!("x" => &[1.0, 2.0], "y" => &[3.0, 4.0])?;
//!
//! // Steps (anything implementing `framepipe::Step`) are registered by name
//! // and executed in insertion order.
//! let mut pipeline = Pipeline::new();
//! pipeline.fit(&table, None)?;
//! let out = pipeline.transform(&table)?;
//! assert!(out.equals(&table));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `step` — the [`Step`] capability contract for pipeline units
//! - `pipeline` — [`Pipeline`]: step registry and fit/transform protocol
//! - `scaling` — [`Scaler`] contract and the [`ColumnScaler`] adapter
//! - `error` — [`PipelineError`] taxonomy shared by everything above
//!
//! Concrete transformation steps and scalers are deliberately not provided:
//! they are supplied by the caller and only need to satisfy the capability
//! contracts. See `demos/scale_features.rs` for an end-to-end composition.

/// Error taxonomy for pipeline execution and scaling.
pub mod error;

/// Named, ordered step pipelines.
pub mod pipeline;

/// Column-scoped scaling adapters.
pub mod scaling;

/// The capability contract for pipeline steps.
pub mod step;

pub use error::{Capability, PipelineError};
pub use pipeline::Pipeline;
pub use scaling::{ColumnScaler, Scaler};
pub use step::Step;
