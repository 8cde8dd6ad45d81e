//! Verifier engine
//!
//! Per-round state machine:
//! AwaitingChallengeChoice → Challenged(FullReveal | ClauseCheck) → Resolved
//!
//! The challenge is drawn before any sealed material is opened, so the
//! prover cannot tailor the round to it. A failed check is final.

mod challenge;
mod check;

pub use challenge::Challenge;
pub use check::{check_clause, check_full_reveal};

use rand::Rng;
use tracing::warn;

use crate::errors::{Result, SatZkError};
use crate::formula::{Formula, Variable};
use crate::prover::RoundCommitment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierState {
    AwaitingChallengeChoice,
    Challenged(Challenge),
    Resolved { challenge: Challenge, passed: bool },
}

/// Verifier for a single round. Holds the original formula and alphabet it
/// compares full reveals against.
#[derive(Debug)]
pub struct Verifier<'a> {
    original: &'a Formula,
    alphabet: &'a [Variable],
    state: VerifierState,
}

impl<'a> Verifier<'a> {
    pub fn new(original: &'a Formula, alphabet: &'a [Variable]) -> Self {
        Self {
            original,
            alphabet,
            state: VerifierState::AwaitingChallengeChoice,
        }
    }

    pub fn state(&self) -> VerifierState {
        self.state
    }

    /// Draw this round's challenge
    pub fn choose_challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Challenge> {
        if self.state != VerifierState::AwaitingChallengeChoice {
            return Err(SatZkError::UnexpectedState {
                operation: "choose_challenge",
                state: self.state,
            });
        }
        let challenge = Challenge::draw(self.original.clause_count(), rng);
        self.state = VerifierState::Challenged(challenge);
        Ok(challenge)
    }

    /// Open the part of `commitment` the challenge asks for and check it.
    /// Returns the round verdict; `Err` only for structural defects.
    ///
    /// A published formula whose clause count differs from the original's
    /// fails the round under either challenge.
    pub fn respond(&mut self, commitment: &RoundCommitment) -> Result<bool> {
        let challenge = match self.state {
            VerifierState::Challenged(challenge) => challenge,
            state => {
                return Err(SatZkError::UnexpectedState {
                    operation: "respond",
                    state,
                })
            }
        };

        let passed = match challenge {
            Challenge::FullReveal => {
                let (transformed, record) = commitment.open_full();
                check_full_reveal(self.original, self.alphabet, transformed, record)
            }
            Challenge::ClauseCheck { .. }
                if commitment.formula().clause_count() != self.original.clause_count() =>
            {
                warn!(
                    expected = self.original.clause_count(),
                    got = commitment.formula().clause_count(),
                    "clause check rejected: published formula has the wrong clause count"
                );
                false
            }
            Challenge::ClauseCheck { index } => {
                let opening = commitment.open_clause(index)?;
                check_clause(opening.clause, opening.assignment)?
            }
        };

        self.state = VerifierState::Resolved { challenge, passed };
        Ok(passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Assignment;
    use crate::prover::{HonestProver, ProverStrategy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn example() -> (Formula, Vec<Variable>, Assignment) {
        let formula = Formula::parse(&[
            &["a", "b", "~c"],
            &["~a", "~b", "d"],
            &["~a", "b", "~d"],
            &["b", "~c", "d"],
        ])
        .unwrap();
        let alphabet = formula.variables();
        let assignment =
            Assignment::from_pairs([("a", true), ("b", false), ("c", false), ("d", false)]);
        (formula, alphabet, assignment)
    }

    #[test]
    fn test_state_machine() {
        let (formula, alphabet, assignment) = example();
        let prover = HonestProver::new(&formula, &alphabet, &assignment).unwrap();
        let mut rng = StdRng::seed_from_u64(21);

        let commitment = prover.prepare_round(&mut rng).unwrap();
        let mut verifier = Verifier::new(&formula, &alphabet);
        assert_eq!(verifier.state(), VerifierState::AwaitingChallengeChoice);
        assert!(matches!(
            verifier.respond(&commitment),
            Err(SatZkError::UnexpectedState { operation: "respond", .. })
        ));

        let challenge = verifier.choose_challenge(&mut rng).unwrap();
        assert_eq!(verifier.state(), VerifierState::Challenged(challenge));
        assert_eq!(
            verifier.choose_challenge(&mut rng),
            Err(SatZkError::UnexpectedState {
                operation: "choose_challenge",
                state: VerifierState::Challenged(challenge),
            })
        );

        assert_eq!(verifier.respond(&commitment), Ok(true));
        assert_eq!(
            verifier.state(),
            VerifierState::Resolved { challenge, passed: true }
        );
        assert!(verifier.respond(&commitment).is_err());
    }

    #[test]
    fn test_honest_rounds_pass_both_challenges() {
        let (formula, alphabet, assignment) = example();
        let prover = HonestProver::new(&formula, &alphabet, &assignment).unwrap();
        let mut rng = StdRng::seed_from_u64(22);
        let (mut reveals, mut spot_checks) = (0, 0);

        for _ in 0..64 {
            let commitment = prover.prepare_round(&mut rng).unwrap();
            let mut verifier = Verifier::new(&formula, &alphabet);
            match verifier.choose_challenge(&mut rng).unwrap() {
                Challenge::FullReveal => reveals += 1,
                Challenge::ClauseCheck { .. } => spot_checks += 1,
            }
            assert_eq!(verifier.respond(&commitment), Ok(true));
        }
        assert!(reveals > 0 && spot_checks > 0);
    }

    #[test]
    fn test_short_formula_fails_clause_check() {
        let (formula, alphabet, assignment) = example();
        let prover = HonestProver::new(&formula, &alphabet, &assignment).unwrap();
        let mut rng = StdRng::seed_from_u64(23);

        let (published, values, record) = prover.prepare_round(&mut rng).unwrap().into_parts();
        let mut clauses = published.clauses().to_vec();
        clauses.pop();
        let short = RoundCommitment::new(Formula::new(clauses), values, record);

        // every index, including the one past the shortened formula
        for index in 0..formula.clause_count() {
            let mut verifier = Verifier::new(&formula, &alphabet);
            verifier.state = VerifierState::Challenged(Challenge::ClauseCheck { index });
            assert_eq!(verifier.respond(&short), Ok(false));
        }
    }
}
