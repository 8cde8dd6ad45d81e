//! Variables and literals

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SatZkError};

/// Opaque variable symbol. Ordered so it can key a `BTreeMap`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A variable together with its polarity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub variable: Variable,
    pub negated: bool,
}

impl Literal {
    pub fn new(variable: Variable, negated: bool) -> Self {
        Self { variable, negated }
    }

    pub fn positive(variable: impl Into<Variable>) -> Self {
        Self::new(variable.into(), false)
    }

    pub fn negative(variable: impl Into<Variable>) -> Self {
        Self::new(variable.into(), true)
    }

    /// Same variable, opposite polarity
    pub fn flipped(&self) -> Self {
        Self::new(self.variable.clone(), !self.negated)
    }

    /// Truth value of the literal given the value of its variable
    pub fn evaluate(&self, value: bool) -> bool {
        value != self.negated
    }
}

/// Parses `a`, `~a` or `¬a`.
impl FromStr for Literal {
    type Err = SatZkError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (negated, name) = match s.strip_prefix('~').or_else(|| s.strip_prefix('¬')) {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if name.is_empty() || name.starts_with(['~', '¬']) {
            return Err(SatZkError::InvalidParameter(format!(
                "cannot parse literal from {:?}",
                s
            )));
        }
        Ok(Self::new(Variable::new(name), negated))
    }
}
