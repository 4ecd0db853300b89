//! ColumnScaler implementation.
//!
//! Wraps an externally supplied fit/transform-capable scaler so that it only
//! sees, and only affects, a chosen subset of a table's columns.

use crate::error::PipelineError;
use crate::step::Step;
use ndarray::Array2;
use polars::prelude::*;

/// Contract for the wrapped scaler supplied by the caller.
///
/// `transform` must return an array with the same row count as its input and
/// one column per input column, in matching order. The scaler is otherwise
/// opaque: whatever error it raises during fit or transform propagates to the
/// caller unchanged.
pub trait Scaler {
    /// Learn scaling parameters from the (possibly column-restricted) table.
    fn fit(&mut self, data: &DataFrame) -> Result<(), PipelineError>;

    /// Scale the (possibly column-restricted) table into a plain numeric
    /// array, preserving row count and column order.
    fn transform(&self, data: &DataFrame) -> Result<Array2<f64>, PipelineError>;
}

/// Adapter that scopes a [`Scaler`] to a subset of a table's columns.
///
/// With no configured subset the adapter operates on every column of whatever
/// table it receives, resolved afresh on each fit/transform call. The active
/// set can therefore differ between fit time and transform time if the input
/// tables differ; callers that rely on consistency must pass tables with the
/// same columns to both.
///
/// Implements [`Step`], so instances drop straight into a
/// [`Pipeline`](crate::Pipeline).
pub struct ColumnScaler {
    scaler: Box<dyn Scaler>,
    columns: Option<Vec<String>>,
}

impl ColumnScaler {
    /// Wrap a scaler with no column restriction.
    pub fn new(scaler: impl Scaler + 'static) -> Self {
        Self {
            scaler: Box::new(scaler),
            columns: None,
        }
    }

    /// Restrict the adapter to the named columns, in the given order.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// The columns this adapter operates on for the given table, resolved at
    /// call time.
    fn active_columns(&self, table: &DataFrame) -> Vec<PlSmallStr> {
        match &self.columns {
            Some(columns) => columns.iter().map(|name| name.as_str().into()).collect(),
            None => table.get_column_names_owned(),
        }
    }
}

impl Step for ColumnScaler {
    fn fit(&mut self, features: &DataFrame) -> Result<(), PipelineError> {
        match &self.columns {
            None => self.scaler.fit(features),
            Some(columns) => {
                let subset = features.select(columns.iter().map(String::as_str))?;
                self.scaler.fit(&subset)
            }
        }
    }

    fn transform(&self, table: &DataFrame) -> Result<DataFrame, PipelineError> {
        let mut out = table.clone();
        let active = self.active_columns(&out);
        let subset = out.select(active.iter().cloned())?;

        let values = self.scaler.transform(&subset)?;

        // The write-back below pairs array columns with active column names by
        // position, so a scaler that drops or reorders columns would silently
        // corrupt the table. Reject any disagreement up front.
        let expected = (subset.height(), active.len());
        let got = (values.nrows(), values.ncols());
        if expected != got {
            return Err(PipelineError::ShapeMismatch { expected, got });
        }

        for (index, name) in active.iter().enumerate() {
            let column = values.column(index);
            out.with_column(Series::new(name.clone(), column.to_vec()))?;
        }
        Ok(out)
    }
}
