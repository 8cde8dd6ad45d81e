//! Three-literal clauses

use crate::errors::{Result, SatZkError};

use super::{Assignment, Literal};

/// Number of literals in every clause
pub const CLAUSE_WIDTH: usize = 3;

/// Disjunction of exactly three literals. The fixed-size array makes the
/// width invariant hold at every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: [Literal; CLAUSE_WIDTH],
}

impl Clause {
    pub fn new(literals: [Literal; CLAUSE_WIDTH]) -> Self {
        Self { literals }
    }

    /// Build from a slice; anything other than three literals is rejected
    pub fn from_slice(literals: &[Literal]) -> Result<Self> {
        match literals {
            [a, b, c] => Ok(Self::new([a.clone(), b.clone(), c.clone()])),
            _ => Err(SatZkError::MalformedClause { len: literals.len() }),
        }
    }

    /// Parse from the textual literal form, e.g. `["a", "b", "~c"]`
    pub fn parse(literals: &[&str]) -> Result<Self> {
        let parsed = literals
            .iter()
            .map(|s| s.parse::<Literal>())
            .collect::<Result<Vec<_>>>()?;
        Self::from_slice(&parsed)
    }

    pub fn literals(&self) -> &[Literal; CLAUSE_WIDTH] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Apply `f` to every literal, keeping positions
    pub fn map_literals<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&Literal) -> Result<Literal>,
    {
        let [a, b, c] = &self.literals;
        Ok(Self::new([f(a)?, f(b)?, f(c)?]))
    }

    /// Satisfied iff at least one literal is true. A variable missing from
    /// the assignment is an error rather than `false`.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> Result<bool> {
        for literal in &self.literals {
            if literal.evaluate(assignment.value(&literal.variable)?) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl TryFrom<Vec<Literal>> for Clause {
    type Error = SatZkError;

    fn try_from(literals: Vec<Literal>) -> Result<Self> {
        Self::from_slice(&literals)
    }
}
