//! Feature scaling demo.
//!
//! Composes a pipeline from caller-supplied parts:
//! - a derived-feature step that adds an income-per-year column,
//! - a min-max scaler scoped to the numeric columns via `ColumnScaler`.
//!
//! Run with: cargo run --example scale_features

use framepipe::{ColumnScaler, Pipeline, PipelineError, Scaler, Step};
use ndarray::Array2;
use polars::df;
use polars::prelude::*;
use std::error::Error;

/// Per-column min-max scaling to [0, 1], sklearn-style.
struct MinMaxScaler {
    min: Vec<f64>,
    range: Vec<f64>,
}

impl MinMaxScaler {
    fn new() -> Self {
        Self {
            min: Vec::new(),
            range: Vec::new(),
        }
    }
}

impl Scaler for MinMaxScaler {
    fn fit(&mut self, data: &DataFrame) -> Result<(), PipelineError> {
        let values = data.to_ndarray::<Float64Type>(IndexOrder::C)?;
        self.min.clear();
        self.range.clear();
        for column in values.columns() {
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            self.min.push(min);
            let range = max - min;
            self.range.push(if range == 0.0 { 1.0 } else { range });
        }
        Ok(())
    }

    fn transform(&self, data: &DataFrame) -> Result<Array2<f64>, PipelineError> {
        let mut values = data.to_ndarray::<Float64Type>(IndexOrder::C)?;
        for (index, mut column) in values.columns_mut().into_iter().enumerate() {
            column.mapv_inplace(|v| (v - self.min[index]) / self.range[index]);
        }
        Ok(values)
    }
}

/// Adds an income-per-year column derived from income and age.
struct AddIncomePerYear;

impl Step for AddIncomePerYear {
    fn fit(&mut self, _features: &DataFrame) -> Result<(), PipelineError> {
        Ok(())
    }

    fn transform(&self, table: &DataFrame) -> Result<DataFrame, PipelineError> {
        let age = table.column("age")?.as_materialized_series().f64()?;
        let income = table.column("income")?.as_materialized_series().f64()?;
        let ratio: Vec<f64> = income
            .into_no_null_iter()
            .zip(age.into_no_null_iter())
            .map(|(income, age)| income / age)
            .collect();

        let mut out = table.clone();
        out.with_column(Series::new("income_per_year".into(), ratio))?;
        Ok(out)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let train = df!(
        "age" => &[25.0, 40.0, 31.0, 58.0],
        "income" => &[38_000.0, 72_000.0, 54_000.0, 91_000.0],
        "city_code" => &[3.0, 1.0, 1.0, 2.0]
    )?;

    println!("Training data:\n{}\n", train);

    let mut pipeline = Pipeline::new();
    pipeline.add("derive", AddIncomePerYear);
    pipeline.add(
        "scale",
        ColumnScaler::new(MinMaxScaler::new()).with_columns(["age", "income"]),
    );

    // Fit learns scaling parameters from the training table; transform chains
    // the derived-feature step into the scaler.
    pipeline.fit(&train, None)?;
    let prepared = pipeline.transform(&train)?;

    println!("Prepared features:\n{}\n", prepared);

    // New data flows through the same fitted steps. The batch is missing the
    // city_code column, which no step references, and keeps its own scale for
    // columns outside the scaler's scope.
    let batch = df!(
        "age" => &[33.0, 47.0],
        "income" => &[61_000.0, 83_000.0]
    )?;
    let scored = pipeline.transform(&batch)?;

    println!("Scored batch:\n{}", scored);
    Ok(())
}
