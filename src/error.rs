//! Error types for pipeline and scaling operations.

use polars::error::PolarsError;
use std::fmt;

/// The two operations a pipeline step may support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Learning internal state from a training table.
    Fit,
    /// Producing a new table from an input table.
    Transform,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Fit => write!(f, "fit"),
            Capability::Transform => write!(f, "transform"),
        }
    }
}

/// Error type for pipeline execution and column-scoped scaling.
#[derive(Debug)]
pub enum PipelineError {
    /// A name passed to [`Pipeline::remove`](crate::Pipeline::remove) is not in
    /// the step registry.
    UnknownStep(String),
    /// A step was asked for an operation it does not implement.
    UnsupportedCapability {
        /// Type name of the offending step.
        step: String,
        /// The operation the step lacks.
        capability: Capability,
    },
    /// A referenced column is absent from the table being processed.
    ///
    /// This is the one error kind `Pipeline::transform` recovers from: the
    /// failing step's output is discarded and execution continues with the
    /// previous table.
    MissingColumn(String),
    /// A wrapped scaler returned an array whose shape disagrees with the
    /// active column set. Shapes are `(rows, columns)`.
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Any other dataframe-level failure.
    Frame(PolarsError),
    /// Failure reported by a caller-supplied scaler.
    Scaler(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::UnknownStep(name) => {
                write!(f, "no step named '{}' in the registry", name)
            }
            PipelineError::UnsupportedCapability { step, capability } => {
                write!(f, "step '{}' does not support {}", step, capability)
            }
            PipelineError::MissingColumn(column) => {
                write!(f, "missing column: {}", column)
            }
            PipelineError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {:?}, got {:?}", expected, got)
            }
            PipelineError::Frame(err) => {
                write!(f, "dataframe error: {}", err)
            }
            PipelineError::Scaler(msg) => {
                write!(f, "scaler error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<PolarsError> for PipelineError {
    fn from(err: PolarsError) -> Self {
        // ColumnNotFound gets its own variant so the transform loop can
        // recover exactly this kind and no other.
        match err {
            PolarsError::ColumnNotFound(name) => {
                PipelineError::MissingColumn(name.to_string())
            }
            other => PipelineError::Frame(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_step() {
        let err = PipelineError::UnknownStep("impute".to_string());
        assert!(err.to_string().contains("impute"));
    }

    #[test]
    fn test_error_display_unsupported_capability() {
        let err = PipelineError::UnsupportedCapability {
            step: "Winsorizer".to_string(),
            capability: Capability::Transform,
        };
        let msg = err.to_string();
        assert!(msg.contains("Winsorizer"));
        assert!(msg.contains("transform"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = PipelineError::MissingColumn("fare".to_string());
        assert!(err.to_string().contains("fare"));
    }

    #[test]
    fn test_error_display_shape_mismatch() {
        let err = PipelineError::ShapeMismatch {
            expected: (4, 2),
            got: (4, 3),
        };
        let msg = err.to_string();
        assert!(msg.contains("(4, 2)"));
        assert!(msg.contains("(4, 3)"));
    }

    #[test]
    fn test_error_display_scaler() {
        let err = PipelineError::Scaler("singular matrix".to_string());
        assert!(err.to_string().contains("singular matrix"));
    }

    #[test]
    fn test_column_not_found_classified_as_missing_column() {
        let err: PipelineError = PolarsError::ColumnNotFound("age".into()).into();
        assert!(matches!(err, PipelineError::MissingColumn(ref c) if c.contains("age")));
    }

    #[test]
    fn test_other_polars_errors_classified_as_frame() {
        let err: PipelineError = PolarsError::ComputeError("bad cast".into()).into();
        assert!(matches!(err, PipelineError::Frame(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PipelineError::UnknownStep("scale".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
