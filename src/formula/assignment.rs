//! Truth assignments

use std::collections::BTreeMap;

use crate::errors::{Result, SatZkError};

use super::Variable;

/// Mapping variable → boolean value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, bool)>,
        V: Into<Variable>,
    {
        Self {
            values: pairs.into_iter().map(|(v, b)| (v.into(), b)).collect(),
        }
    }

    pub fn value(&self, variable: &Variable) -> Result<bool> {
        self.values
            .get(variable)
            .copied()
            .ok_or_else(|| SatZkError::UnknownVariable(variable.clone()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
