use crate::apriori::Apriori;
use crate::config::MinSupport;
use crate::error::MiningError;
use crate::fp::FpGrowth;
use crate::pattern::Pattern;
use crate::transaction::{Transaction, transactions_from_matrix};
use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PyPatterns = Vec<(Vec<usize>, usize)>;

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_tuples(patterns: Vec<Pattern>) -> PyPatterns {
    patterns.into_iter().map(|p| (p.items, p.support)).collect()
}

fn to_transactions(rows: Vec<Vec<usize>>) -> Vec<Transaction> {
    rows.into_iter().map(Transaction::new).collect()
}

#[pyfunction]
#[pyo3(name = "apriori")]
fn apriori_py(
    py: Python<'_>,
    transactions: Vec<Vec<usize>>,
    min_support_count: usize,
) -> PyResult<PyPatterns> {
    let transactions = to_transactions(transactions);
    let patterns = py.allow_threads(|| Apriori::new().run(&transactions, min_support_count))?;
    Ok(to_tuples(patterns))
}

#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py(
    py: Python<'_>,
    transactions: Vec<Vec<usize>>,
    min_support_count: usize,
) -> PyResult<PyPatterns> {
    let transactions = to_transactions(transactions);
    let patterns = py.allow_threads(|| FpGrowth::new().run(&transactions, min_support_count))?;
    Ok(to_tuples(patterns))
}

/// FP-Growth over a binary matrix; itemsets are returned as column indices.
#[pyfunction]
#[pyo3(name = "fp_growth_matrix")]
fn fp_growth_matrix_py<'py>(
    py: Python<'py>,
    matrix: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<PyPatterns> {
    let transactions = transactions_from_matrix(matrix.as_array());
    let min_count = MinSupport::Fraction(min_support).to_count(transactions.len())?;
    let patterns = py.allow_threads(|| FpGrowth::new().run(&transactions, min_count))?;

    Ok(patterns
        .into_iter()
        .map(|p| (p.items.into_iter().map(|item| item - 1).collect(), p.support))
        .collect())
}

#[pymodule]
fn priors_mine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_matrix_py, m)?)?;
    Ok(())
}
