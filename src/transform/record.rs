//! Per-round transformation record

use std::collections::BTreeSet;

use thiserror::Error;

use crate::errors::Result;
use crate::formula::{Formula, Variable};

use super::permutation::{is_permutation, LiteralPermutation, Permutation};
use super::stages::{
    apply_negation, substitute_variables, undo_clause_permutation, undo_literal_permutations,
    NegationMap, Renaming,
};

/// Everything needed to map one round's transformed formula back onto the
/// original. Drawn fresh every round and dropped with the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformationRecord {
    /// Stage 1, keyed by original variable name
    pub negations: NegationMap,
    /// Stage 2, new name → old name
    pub renaming: Renaming,
    /// Stage 3, destination index → source index
    pub clause_permutation: Permutation,
    /// Stage 4, indexed by clause position after stage 3
    pub literal_permutations: Vec<LiteralPermutation>,
}

/// Reason a received record cannot describe an isomorphism of the original
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    #[error("transformed formula has {got} clauses, original has {expected}")]
    ClauseCount { expected: usize, got: usize },

    #[error("clause permutation has {got} entries for {expected} clauses")]
    ClausePermutationLength { expected: usize, got: usize },

    #[error("clause permutation is not a bijection")]
    ClausePermutationNotBijective,

    #[error("{got} literal permutations for {expected} clauses")]
    LiteralPermutationCount { expected: usize, got: usize },

    #[error("literal permutation of clause {clause} is not a bijection")]
    LiteralPermutationNotBijective { clause: usize },

    #[error("renaming covers {got} variables, alphabet has {expected}")]
    RenamingSize { expected: usize, got: usize },

    #[error("renaming mentions {0}, which is outside the alphabet")]
    RenamingOutsideAlphabet(Variable),

    #[error("renaming maps two names onto the same variable")]
    RenamingNotBijective,

    #[error("negation map does not cover exactly the alphabet")]
    NegationDomain,
}

impl TransformationRecord {
    /// Check that every component is a genuine bijection/permutation over
    /// the original alphabet and clause positions.
    pub fn check_well_formed(
        &self,
        alphabet: &[Variable],
        clause_count: usize,
    ) -> std::result::Result<(), RecordDefect> {
        if self.clause_permutation.len() != clause_count {
            return Err(RecordDefect::ClausePermutationLength {
                expected: clause_count,
                got: self.clause_permutation.len(),
            });
        }
        if !self.clause_permutation.is_valid() {
            return Err(RecordDefect::ClausePermutationNotBijective);
        }

        if self.literal_permutations.len() != clause_count {
            return Err(RecordDefect::LiteralPermutationCount {
                expected: clause_count,
                got: self.literal_permutations.len(),
            });
        }
        if let Some(clause) = self
            .literal_permutations
            .iter()
            .position(|p| !is_permutation(p))
        {
            return Err(RecordDefect::LiteralPermutationNotBijective { clause });
        }

        let domain: BTreeSet<&Variable> = alphabet.iter().collect();
        if self.renaming.len() != domain.len() {
            return Err(RecordDefect::RenamingSize {
                expected: domain.len(),
                got: self.renaming.len(),
            });
        }
        let mut targets = BTreeSet::new();
        for (new, old) in &self.renaming {
            for v in [new, old] {
                if !domain.contains(v) {
                    return Err(RecordDefect::RenamingOutsideAlphabet(v.clone()));
                }
            }
            if !targets.insert(old) {
                return Err(RecordDefect::RenamingNotBijective);
            }
        }

        if !self.negations.keys().eq(domain.iter().copied()) {
            return Err(RecordDefect::NegationDomain);
        }
        Ok(())
    }

    /// Undo the four stages in reverse pipeline order: literal permutation,
    /// clause permutation, renaming, negation.
    pub fn invert(&self, transformed: &Formula) -> Result<Formula> {
        let formula = undo_literal_permutations(transformed, &self.literal_permutations)?;
        let formula = undo_clause_permutation(&formula, &self.clause_permutation)?;
        let formula = substitute_variables(&formula, &self.renaming)?;
        apply_negation(&formula, &self.negations)
    }
}
