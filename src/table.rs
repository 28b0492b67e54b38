//! Truth tables consumed by the renderer.
//!
//! A table is a list of variables and a body of rows. Each row holds one value per variable,
//! in variable order, followed by the value of the whole expression for that assignment.
//!
//! ```
//! use euler_rs::table::TruthTable;
//!
//! let table = TruthTable::from_fn(["A", "B"], |row| row[0] ^ row[1]);
//! assert_eq!(table.body.len(), 4);
//! assert_eq!(table.true_rows().count(), 2);
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::types::Variable;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<Variable>,
    pub body: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Creates a table, checking that every row has `variables.len() + 1` values.
    pub fn new<V>(variables: impl IntoIterator<Item = V>, body: Vec<Vec<bool>>) -> Result<Self>
    where
        V: Into<Variable>,
    {
        let table = Self {
            variables: variables.into_iter().map(Into::into).collect(),
            body,
        };
        table.validate()?;
        Ok(table)
    }

    /// Enumerates all `2^n` assignments and records `f(assignment)` as the result column.
    ///
    /// Row `r` assigns to variable `k` the bit `n-1-k` of `r`, so the first variable is the most
    /// significant one and rows go from all-false to all-true.
    ///
    /// # Panics
    ///
    /// Panics if there are [`usize::BITS`] or more variables, since `2^n` rows cannot be counted.
    pub fn from_fn<V, F>(variables: impl IntoIterator<Item = V>, mut f: F) -> Self
    where
        V: Into<Variable>,
        F: FnMut(&[bool]) -> bool,
    {
        let variables: Vec<Variable> = variables.into_iter().map(Into::into).collect();
        let n = variables.len();
        let rows = row_count(n).unwrap_or_else(|| panic!("Too many variables for a truth table: {}", n));
        let body = (0..rows)
            .map(|r| {
                let mut row: Vec<bool> = (0..n).map(|k| r & (1 << (n - 1 - k)) != 0).collect();
                let value = f(&row);
                row.push(value);
                row
            })
            .collect();
        Self { variables, body }
    }

    /// Builds the standard enumeration (see [`TruthTable::from_fn`]) from a result column.
    ///
    /// Fails with [`Error::UnsupportedVariableCount`] if `2^n` does not fit in `usize`, and with
    /// [`Error::MalformedRow`] if `outputs` does not hold exactly `2^n` values.
    pub fn from_outputs<V>(variables: impl IntoIterator<Item = V>, outputs: &[bool]) -> Result<Self>
    where
        V: Into<Variable>,
    {
        let variables: Vec<Variable> = variables.into_iter().map(Into::into).collect();
        let expected = row_count(variables.len()).ok_or(Error::UnsupportedVariableCount(variables.len()))?;
        if outputs.len() != expected {
            return Err(Error::MalformedRow {
                row: outputs.len().min(expected),
                expected,
                found: outputs.len(),
            });
        }
        let mut outputs = outputs.iter().copied();
        Ok(Self::from_fn(variables, |_| outputs.next().unwrap_or(false)))
    }

    /// Checks the row-length invariant of the whole body.
    pub fn validate(&self) -> Result<()> {
        let expected = self.variables.len() + 1;
        match self.body.iter().position(|row| row.len() != expected) {
            Some(row) => Err(Error::MalformedRow {
                row,
                expected,
                found: self.body[row].len(),
            }),
            None => Ok(()),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if the table has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the rows whose expression value (the last entry) is true.
    pub fn true_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.body
            .iter()
            .filter(|row| row.last().copied().unwrap_or(false))
            .map(Vec::as_slice)
    }
}

/// Number of rows of a full enumeration over `n` variables, or `None` if it overflows.
fn row_count(n: usize) -> Option<usize> {
    u32::try_from(n).ok().and_then(|n| 1usize.checked_shl(n))
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in self.variables.iter() {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| F")?;
        for row in self.body.iter() {
            let (result, assignment) = match row.split_last() {
                Some(split) => split,
                None => continue,
            };
            for (var, &value) in self.variables.iter().zip(assignment) {
                write!(f, "{:<width$} ", value as u8, width = var.name().chars().count())?;
            }
            writeln!(f, "| {}", *result as u8)?;
        }
        Ok(())
    }
}
