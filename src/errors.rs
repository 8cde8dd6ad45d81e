//! Error types for the 3-SAT zero-knowledge protocol

use thiserror::Error;

use crate::formula::Variable;
use crate::verifier::VerifierState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SatZkError {
    #[error("Invalid clause index {index}: formula has {clause_count} clauses")]
    InvalidClauseIndex { index: usize, clause_count: usize },

    #[error("Malformed clause: expected exactly 3 literals, got {len}")]
    MalformedClause { len: usize },

    #[error("Unknown variable: {0}")]
    UnknownVariable(Variable),

    #[error("Verifier cannot {operation} in state {state:?}")]
    UnexpectedState {
        operation: &'static str,
        state: VerifierState,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SatZkError>;
