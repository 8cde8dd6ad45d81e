//! Prover engine
//!
//! Each round the prover re-randomizes the formula and its solution:
//! 1. P: negate, rename, permute clauses, permute literals → (F', A', τ)
//! 2. P → V: F' (τ and A' stay sealed inside the [`RoundCommitment`])
//! 3. V → P: challenge
//! 4. P → V: either τ (full reveal) or one clause of F' together with A'
//!
//! The prover only ever borrows the original formula and assignment.

mod commitment;

pub use commitment::{ClauseOpening, RoundCommitment};

use std::collections::BTreeSet;

use rand::Rng;
use tracing::trace;

use crate::errors::{Result, SatZkError};
use crate::formula::{Assignment, Formula, Variable};
use crate::transform::{
    negate_randomly, permute_clauses, permute_literals, relabel_assignment, rename_variables,
    TransformationRecord,
};

/// Anything that can answer the verifier's per-round challenges.
///
/// [`HonestProver`] is the only implementation shipped; the trait exists so
/// the round driver can be exercised against provers that cheat.
pub trait ProverStrategy {
    /// Draw a fresh transformation and commit to the transformed formula
    fn prepare_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RoundCommitment>;
}

/// Prover that knows a satisfying assignment and follows the protocol
#[derive(Debug, Clone, Copy)]
pub struct HonestProver<'a> {
    formula: &'a Formula,
    alphabet: &'a [Variable],
    assignment: &'a Assignment,
}

impl<'a> HonestProver<'a> {
    /// `alphabet` must be distinct and contain every variable of `formula`.
    /// The assignment is trusted to satisfy the formula and is not checked.
    pub fn new(
        formula: &'a Formula,
        alphabet: &'a [Variable],
        assignment: &'a Assignment,
    ) -> Result<Self> {
        let distinct: BTreeSet<&Variable> = alphabet.iter().collect();
        if distinct.len() != alphabet.len() {
            return Err(SatZkError::InvalidParameter(
                "variable alphabet contains duplicates".to_string(),
            ));
        }
        if let Some(missing) = formula.variables().into_iter().find(|v| !distinct.contains(v)) {
            return Err(SatZkError::UnknownVariable(missing));
        }
        Ok(Self {
            formula,
            alphabet,
            assignment,
        })
    }
}

impl ProverStrategy for HonestProver<'_> {
    #[tracing::instrument(skip_all, name = "HonestProver::prepare_round", fields(clauses = self.formula.clause_count()))]
    fn prepare_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RoundCommitment> {
        let (negated, negated_assignment, negations) =
            negate_randomly(self.formula, self.alphabet, self.assignment, rng)?;
        let (renamed, renaming) = rename_variables(&negated, self.alphabet, rng)?;
        let (shuffled, clause_permutation) = permute_clauses(&renamed, rng)?;
        let (transformed, literal_permutations) = permute_literals(&shuffled, rng)?;
        let assignment = relabel_assignment(&negated_assignment, &renaming)?;

        trace!(
            clauses = transformed.clause_count(),
            negated = negations.values().filter(|n| **n).count(),
            "prepared round commitment"
        );

        let record = TransformationRecord {
            negations,
            renaming,
            clause_permutation,
            literal_permutations,
        };
        Ok(RoundCommitment::new(transformed, assignment, record))
    }
}
