//! # sat3-zk: interactive zero-knowledge proof of 3-SAT satisfiability
//!
//! A prover convinces a verifier that it knows a satisfying assignment of a
//! 3-CNF formula without revealing it. Every round the prover publishes an
//! isomorphic copy of the formula (random negations, renaming, clause and
//! literal shuffles) and the verifier either asks for the full
//! transformation or spot-checks one clause against the transformed
//! assignment.
//!
//! ## Structure
//!
//! - `formula`: variables, literals, 3-literal clauses, formulas, assignments
//! - `transform`: the four invertible stages and the per-round record
//! - `prover`: honest prover and the per-round commitment
//! - `verifier`: challenge selection and the two round checks
//! - `protocol`: round driver and the top-level `run_protocol`
//!
//! ## Usage
//! ```ignore
//! let formula = Formula::parse(&[&["a", "b", "~c"], &["~a", "~b", "d"]])?;
//! let variables = formula.variables();
//! let assignment = Assignment::from_pairs([("a", true), ("b", false), ("c", false), ("d", false)]);
//! assert!(run_protocol(&formula, &variables, &assignment)?.is_trusted());
//! ```
//!
//! This is a teaching model of the isomorphism-style proof: there are no
//! cryptographic commitments, hiding rests on re-randomization alone.

pub mod formula;
pub mod transform;
pub mod prover;
pub mod verifier;
pub mod protocol;

pub mod errors;

// Re-exports
pub use errors::{Result, SatZkError};
pub use formula::{Assignment, Clause, Formula, Literal, Variable};
pub use transform::TransformationRecord;
pub use prover::{HonestProver, ProverStrategy, RoundCommitment};
pub use verifier::{Challenge, Verifier};
pub use protocol::{run_protocol, run_protocol_with, ProtocolConfig, ProtocolOutcome, Verdict};
