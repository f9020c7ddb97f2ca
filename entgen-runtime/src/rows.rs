use std::collections::VecDeque;

use crate::{ScanError, ScanTarget, Value};

/// A forward-only cursor over the rows of a query result.
///
/// Implementations report their column names in the order values are
/// handed to [`Rows::scan`]. Generated decoders scan positionally, so that
/// order must match the entity's `COLUMNS`.
pub trait Rows {
    /// Column names of the result set
    fn columns(&self) -> &[String];

    /// Advance to the next row. Returns `false` once the rows are exhausted.
    fn next_row(&mut self) -> Result<bool, ScanError>;

    /// Scan the current row, one destination per column.
    fn scan(&mut self, dest: &mut [&mut dyn ScanTarget]) -> Result<(), ScanError>;
}

/// An in-memory result set, useful for tests and for adapting drivers that
/// buffer their rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
    columns: Vec<String>,
    pending: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl MemoryRows {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append a row to the result set
    pub fn with_row(mut self, values: Vec<Value>) -> Self {
        self.push_row(values);
        self
    }

    pub fn push_row(&mut self, values: Vec<Value>) {
        self.pending.push_back(values);
    }

    /// Number of rows not yet visited
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Rows for MemoryRows {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_row(&mut self) -> Result<bool, ScanError> {
        self.current = self.pending.pop_front();
        Ok(self.current.is_some())
    }

    fn scan(&mut self, dest: &mut [&mut dyn ScanTarget]) -> Result<(), ScanError> {
        let row = self.current.as_ref().ok_or(ScanError::NoRow)?;
        if row.len() != dest.len() {
            return Err(ScanError::ColumnCount {
                expected: row.len(),
                found: dest.len(),
            });
        }

        for (index, (target, value)) in dest.iter_mut().zip(row).enumerate() {
            target
                .scan_value(value.clone())
                .map_err(|source| ScanError::Column {
                    index,
                    column: self.columns.get(index).cloned().unwrap_or_default(),
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}
