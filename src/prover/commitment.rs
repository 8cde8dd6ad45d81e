//! Prover's per-round message

use crate::errors::Result;
use crate::formula::{Assignment, Clause, Formula};
use crate::transform::TransformationRecord;

/// Transformed formula plus the sealed material behind it. Only the formula
/// is visible up front; the verifier opens one of the two other parts.
#[derive(Debug, Clone)]
pub struct RoundCommitment {
    formula: Formula,
    assignment: Assignment,
    record: TransformationRecord,
}

/// Answer to a clause-check challenge
#[derive(Debug, Clone, Copy)]
pub struct ClauseOpening<'a> {
    pub clause: &'a Clause,
    pub assignment: &'a Assignment,
}

impl RoundCommitment {
    pub fn new(formula: Formula, assignment: Assignment, record: TransformationRecord) -> Self {
        Self {
            formula,
            assignment,
            record,
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Full reveal: the transformed formula and how it was produced
    pub fn open_full(&self) -> (&Formula, &TransformationRecord) {
        (&self.formula, &self.record)
    }

    /// Clause check: clause `index` of the transformed formula and the whole
    /// transformed assignment. Fails with `InvalidClauseIndex` out of range.
    pub fn open_clause(&self, index: usize) -> Result<ClauseOpening<'_>> {
        Ok(ClauseOpening {
            clause: self.formula.clause(index)?,
            assignment: &self.assignment,
        })
    }

    pub fn into_parts(self) -> (Formula, Assignment, TransformationRecord) {
        (self.formula, self.assignment, self.record)
    }
}
