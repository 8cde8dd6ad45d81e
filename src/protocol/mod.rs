//! Round driver
//!
//! Repeats commit → challenge → open → check for `(m − 1)²` rounds, where
//! `m` is the clause count. A cheating prover survives one round with
//! probability at most ½, so surviving `R` independent rounds happens with
//! probability at most `2^-R`. The first failed round ends the run.

mod config;
mod runner;

pub use config::ProtocolConfig;
pub use runner::{
    rounds_for, soundness_error, ProtocolOutcome, ProtocolRunner, RoundReport, Verdict,
};

use rand::rngs::OsRng;

use crate::errors::Result;
use crate::formula::{Assignment, Formula, Variable};
use crate::prover::HonestProver;

/// Run the whole protocol with an honest prover holding `assignment`,
/// drawing randomness from the operating system.
///
/// The caller guarantees `assignment` satisfies `formula`; this is not
/// re-checked. `variables` is the alphabet the renaming permutes.
pub fn run_protocol(
    formula: &Formula,
    variables: &[Variable],
    assignment: &Assignment,
) -> Result<Verdict> {
    run_protocol_with(&ProtocolConfig::default(), formula, variables, assignment)
        .map(|outcome| outcome.verdict)
}

/// [`run_protocol`] with explicit configuration, returning diagnostics
pub fn run_protocol_with(
    config: &ProtocolConfig,
    formula: &Formula,
    variables: &[Variable],
    assignment: &Assignment,
) -> Result<ProtocolOutcome> {
    let prover = HonestProver::new(formula, variables, assignment)?;
    let runner = ProtocolRunner::new(config.clone());
    if config.parallel {
        runner.run_parallel(&prover, formula, variables)
    } else {
        runner.run(&prover, formula, variables, &mut OsRng)
    }
}
