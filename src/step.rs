//! The capability contract for pipeline steps.
//!
//! A step is any object exposing `fit` and `transform` over a table. Both trait
//! methods carry default bodies that fail with
//! [`PipelineError::UnsupportedCapability`], so implementors override only the
//! operations they actually support and a missing capability surfaces lazily at
//! call time instead of at registration time.

use crate::error::{Capability, PipelineError};
use polars::prelude::DataFrame;
use std::any::type_name;

/// A unit of work in a [`Pipeline`](crate::Pipeline).
///
/// The pipeline imposes no shape or type constraints beyond this contract; it
/// is the caller's responsibility that consecutive steps compose (a step's
/// transform output must be an acceptable input to the next step's transform).
///
/// # Example
/// ```
/// use framepipe::{PipelineError, Step};
/// use polars::prelude::*;
///
/// /// Drops a column; has no fit-time state.
/// struct DropColumn(String);
///
/// impl Step for DropColumn {
///     fn fit(&mut self, _features: &DataFrame) -> Result<(), PipelineError> {
///         Ok(())
///     }
///
///     fn transform(&self, table: &DataFrame) -> Result<DataFrame, PipelineError> {
///         Ok(table.drop(&self.0)?)
///     }
/// }
/// ```
pub trait Step {
    /// Learn internal state from the training features.
    ///
    /// The default implementation reports the step as lacking the fit
    /// capability.
    fn fit(&mut self, features: &DataFrame) -> Result<(), PipelineError> {
        let _ = features;
        Err(PipelineError::UnsupportedCapability {
            step: short_type_name::<Self>().to_string(),
            capability: Capability::Fit,
        })
    }

    /// Produce a new table from the input table. The input is never mutated.
    ///
    /// The default implementation reports the step as lacking the transform
    /// capability.
    fn transform(&self, table: &DataFrame) -> Result<DataFrame, PipelineError> {
        let _ = table;
        Err(PipelineError::UnsupportedCapability {
            step: short_type_name::<Self>().to_string(),
            capability: Capability::Transform,
        })
    }
}

/// Extract a bare type name from a fully qualified one.
///
/// `framepipe::scaling::column::ColumnScaler` becomes `ColumnScaler`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full_name = type_name::<T>();

    // Strip a trailing generic argument list, then everything up to the last
    // path separator.
    let before_generic = match full_name.find('<') {
        Some(pos) => &full_name[..pos],
        None => full_name,
    };
    match before_generic.rfind("::") {
        Some(pos) => &before_generic[pos + 2..],
        None => before_generic,
    }
}
