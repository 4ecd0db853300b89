//! Named, ordered step pipelines over dataframes.
//!
//! A [`Pipeline`] holds a registry of named [`Step`]s and runs them in
//! insertion order, first in a fit pass over a training table and then in a
//! transform pass over arbitrary input. The transform pass is a strict
//! sequential chain: each step consumes the previous step's output.
//!
//! # Example
//! ```ignore
//! use framepipe::{ColumnScaler, Pipeline};
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.add("scale", ColumnScaler::new(scaler).with_columns(["age", "fare"]));
//! pipeline.add("ratios", AddFareRatio);
//!
//! pipeline.fit(&train, Some(&labels))?;
//! let prepared = pipeline.transform(&test)?;
//! ```

use crate::error::PipelineError;
use crate::step::Step;
use indexmap::IndexMap;
use polars::prelude::{DataFrame, Series};
use tracing::{debug, error, warn};

/// An ordered, named collection of transformation steps.
///
/// Steps are executed in first-insertion order; re-adding an existing name
/// replaces the step in place without changing its position. The pipeline owns
/// its steps and its transform cache exclusively; concurrent use from multiple
/// threads is unsupported.
#[derive(Default)]
pub struct Pipeline {
    steps: IndexMap<String, Box<dyn Step>>,
    features: Option<DataFrame>,
    targets: Option<Series>,
    cache: Option<DataFrame>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from an initial set of named steps.
    pub fn with_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = (S, Box<dyn Step>)>,
        S: Into<String>,
    {
        let mut pipeline = Self::new();
        pipeline.extend(steps);
        pipeline
    }

    /// Insert a step under `name`, or replace the step already registered
    /// under that name.
    ///
    /// A replacement keeps the original position in execution order; a fresh
    /// name appends at the end.
    pub fn add(&mut self, name: impl Into<String>, step: impl Step + 'static) {
        self.steps.insert(name.into(), Box::new(step));
    }

    /// Insert or replace a batch of named steps, in iteration order.
    pub fn extend<I, S>(&mut self, steps: I)
    where
        I: IntoIterator<Item = (S, Box<dyn Step>)>,
        S: Into<String>,
    {
        for (name, step) in steps {
            self.steps.insert(name.into(), step);
        }
    }

    /// Delete the named steps from the registry.
    ///
    /// Fails with [`PipelineError::UnknownStep`] on the first absent name.
    /// This operation is not atomic: names earlier in the call that were
    /// already deleted stay deleted.
    pub fn remove<I, S>(&mut self, names: I) -> Result<(), PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.steps.shift_remove(name).is_none() {
                return Err(PipelineError::UnknownStep(name.to_string()));
            }
        }
        Ok(())
    }

    /// Fit every step against `x`, in insertion order.
    ///
    /// Stores `x` as the pipeline's features and `y` as its targets, and
    /// clears the transform cache so a later transform can never consume a
    /// stale table from a previous run. The stored tables share their column
    /// buffers with the caller's (a structural share, not a deep copy).
    ///
    /// Fitting is strictly fail-fast: the first step whose fit call fails
    /// aborts the remaining sequence, with no partial-fit recovery.
    pub fn fit(&mut self, x: &DataFrame, y: Option<&Series>) -> Result<(), PipelineError> {
        self.features = Some(x.clone());
        self.targets = y.cloned();
        self.cache = None;

        for (name, step) in self.steps.iter_mut() {
            if let Err(err) = step.fit(x) {
                error!(step = %name, error = %err, "fit failed");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Run every step's transform against a working copy of `x`, in insertion
    /// order, each step consuming the previous step's output. `x` itself is
    /// never mutated.
    ///
    /// A step that fails with [`PipelineError::MissingColumn`] is skipped: the
    /// failure is logged and the chain continues with the table as it was
    /// before that step. Any other failure aborts the remaining chain.
    ///
    /// The final table is returned and also retained as the pipeline's
    /// [`cache`](Self::cache) until the next transform or fit overwrites it.
    /// A prior fit is not required; steps whose transform needs no fitted
    /// state work regardless.
    pub fn transform(&mut self, x: &DataFrame) -> Result<DataFrame, PipelineError> {
        let mut cache = x.clone();
        for (name, step) in &self.steps {
            debug!(step = %name, "attempting transform");
            match step.transform(&cache) {
                Ok(next) => cache = next,
                Err(PipelineError::MissingColumn(column)) => {
                    warn!(step = %name, column = %column, "missing column, step skipped");
                }
                Err(err) => {
                    error!(step = %name, error = %err, "transform failed");
                    return Err(err);
                }
            }
        }
        self.cache = Some(cache.clone());
        Ok(cache)
    }

    /// Fit the pipeline on `x`/`y`, then transform `x`.
    pub fn fit_transform(
        &mut self,
        x: &DataFrame,
        y: Option<&Series>,
    ) -> Result<DataFrame, PipelineError> {
        self.fit(x, y)?;
        self.transform(x)
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether a step is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(name)
    }

    /// Registered step names, in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.keys().map(String::as_str).collect()
    }

    /// The training features stored by the last fit.
    pub fn features(&self) -> Option<&DataFrame> {
        self.features.as_ref()
    }

    /// The training targets stored by the last fit.
    pub fn targets(&self) -> Option<&Series> {
        self.targets.as_ref()
    }

    /// The most recent transform output, or `None` after a fit.
    pub fn cache(&self) -> Option<&DataFrame> {
        self.cache.as_ref()
    }
}
