//! Raw clause rows as entered in the guard and invariant forms, and their conversion into clock
//! constraints.

use crate::error::EditorError;
use crate::ta::clock::Clock;
use crate::ta::clock_constraint::ClockConstraint;
use crate::ta::clock_constraint::clause::{Clause, ClockComparator};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseRow {
    pub id: u32,
    pub clock_value: String,
    pub comparison_value: String,
    /// Kept as text so that the input field can be empty.
    pub number_input: String,
    pub is_clock_invalid: bool,
    pub is_comparison_invalid: bool,
    pub is_number_invalid: bool,
}

impl ClauseRow {
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            clock_value: String::new(),
            comparison_value: String::new(),
            number_input: String::from("0"),
            is_clock_invalid: true,
            is_comparison_invalid: true,
            is_number_invalid: false,
        }
    }

    fn from_clause(id: u32, clause: &Clause) -> Self {
        Self {
            id,
            clock_value: clause.lhs().name().clone(),
            comparison_value: String::from(clause.op().symbol()),
            number_input: clause.rhs().to_string(),
            is_clock_invalid: false,
            is_comparison_invalid: false,
            is_number_invalid: false,
        }
    }

    fn is_incomplete(&self) -> bool {
        self.clock_value.is_empty() || self.comparison_value.is_empty() || self.number_input.is_empty()
    }

    pub fn is_invalid(&self) -> bool {
        self.is_clock_invalid || self.is_comparison_invalid || self.is_number_invalid
    }

    /// # Errors
    /// Fails for an unknown comparator symbol or a bound that is not a non-negative integer. Rows
    /// must be validated before they are parsed.
    pub fn to_clause(&self) -> Result<Clause, EditorError> {
        let op = ClockComparator::from_str(&self.comparison_value)?;
        let rhs = self
            .number_input
            .parse::<u32>()
            .map_err(|_| EditorError::InvalidBound(self.number_input.clone()))?;
        Ok(Clause::new(&Clock::new(&self.clock_value), op, rhs))
    }
}

/// Converts rows into a constraint. `Ok(None)` if there are no rows or any row is incomplete.
pub fn transform_to_clock_constraint(
    rows: &[ClauseRow],
) -> Result<Option<ClockConstraint>, EditorError> {
    if rows.is_empty() || rows.iter().any(ClauseRow::is_incomplete) {
        return Ok(None);
    }
    let clauses = rows
        .iter()
        .map(ClauseRow::to_clause)
        .collect::<Result<Vec<Clause>, EditorError>>()?;
    Ok(ClockConstraint::from_clauses(clauses))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseField {
    Clock,
    Comparison,
    Number,
}

/// The rows of one constraint form. There is always at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseRows {
    rows: Vec<ClauseRow>,
    next_id: u32,
}

impl Default for ClauseRows {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseRows {
    pub fn new() -> Self {
        Self {
            rows: vec![ClauseRow::empty(0)],
            next_id: 1,
        }
    }

    /// Rows for editing an existing constraint; a single empty row if there is none.
    pub fn from_constraint(cc: Option<&ClockConstraint>) -> Self {
        let Some(cc) = cc else {
            return Self::new();
        };
        let rows: Vec<ClauseRow> = cc
            .clauses()
            .iter()
            .zip(0u32..)
            .map(|(clause, id)| ClauseRow::from_clause(id, clause))
            .collect();
        let next_id = rows.len() as u32;
        if rows.is_empty() {
            return Self::new();
        }
        Self { rows, next_id }
    }

    pub fn rows(&self) -> &Vec<ClauseRow> {
        &self.rows
    }

    pub fn add_row(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(ClauseRow::empty(id));
        id
    }

    /// Removes the row unless it is the last one left.
    pub fn delete_row(&mut self, id: u32) {
        if self.rows.len() <= 1 {
            return;
        }
        self.rows.retain(|row| row.id != id);
    }

    /// Sets a field and refreshes its validity flag. A non-empty number is clamped to be
    /// non-negative; anything unparsable is kept and marked invalid.
    pub fn change_row(&mut self, id: u32, field: ClauseField, value: &str) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return;
        };
        match field {
            ClauseField::Clock => {
                row.clock_value = String::from(value);
                row.is_clock_invalid = value.is_empty();
            }
            ClauseField::Comparison => {
                row.comparison_value = String::from(value);
                row.is_comparison_invalid = value.is_empty();
            }
            ClauseField::Number => match value.trim().parse::<i64>() {
                Ok(number) => {
                    row.number_input = number.clamp(0, u32::MAX as i64).to_string();
                    row.is_number_invalid = false;
                }
                Err(_) => {
                    row.number_input = String::from(value);
                    row.is_number_invalid = true;
                }
            },
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.rows.iter().any(ClauseRow::is_invalid)
    }

    pub fn to_clock_constraint(&self) -> Result<Option<ClockConstraint>, EditorError> {
        transform_to_clock_constraint(&self.rows)
    }
}
