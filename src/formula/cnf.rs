//! Formulas in 3-CNF

use std::collections::BTreeSet;

use crate::errors::{Result, SatZkError};

use super::{Assignment, Clause, Variable};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Parse from nested textual clauses, e.g.
    /// `&[&["a", "b", "~c"], &["~a", "~b", "d"]]`
    pub fn parse(clauses: &[&[&str]]) -> Result<Self> {
        let clauses = clauses
            .iter()
            .map(|c| Clause::parse(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(clauses))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Clause at `index`, bounds checked
    pub fn clause(&self, index: usize) -> Result<&Clause> {
        self.clauses.get(index).ok_or(SatZkError::InvalidClauseIndex {
            index,
            clause_count: self.clauses.len(),
        })
    }

    /// Distinct variables in order of first occurrence
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = BTreeSet::new();
        self.clauses
            .iter()
            .flat_map(|c| c.iter())
            .filter(|l| seen.insert(l.variable.clone()))
            .map(|l| l.variable.clone())
            .collect()
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> Result<bool> {
        for clause in &self.clauses {
            if !clause.is_satisfied_by(assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Apply `f` to every clause, keeping clause positions
    pub fn map_clauses<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&Clause) -> Result<Clause>,
    {
        Ok(Self::new(
            self.clauses.iter().map(f).collect::<Result<Vec<_>>>()?,
        ))
    }
}
