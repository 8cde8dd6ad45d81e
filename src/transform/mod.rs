//! Isomorphism-preserving formula transformations
//!
//! One round of the protocol re-randomizes the formula through four
//! invertible stages, each consuming the previous stage's output:
//!
//! 1. negate a random subset of variables (formula and assignment)
//! 2. rename variables through a random bijection of the alphabet
//! 3. permute the clauses
//! 4. permute the literals inside every clause
//!
//! The [`TransformationRecord`] captures all four choices, so the
//! transformed formula can be mapped back onto the original by undoing
//! the stages in reverse order.

mod permutation;
mod record;
mod stages;

pub use permutation::{is_permutation, LiteralPermutation, Permutation};
pub use record::{RecordDefect, TransformationRecord};
pub use stages::{
    apply_negation, negate_randomly, permute_clauses, permute_literals, relabel_assignment,
    rename_variables, substitute_variables, undo_clause_permutation, undo_literal_permutations,
    NegationMap, Renaming,
};
