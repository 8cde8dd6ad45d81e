use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::formula::{Formula, Variable};
use crate::prover::ProverStrategy;
use crate::verifier::{Challenge, Verifier};

use super::ProtocolConfig;

/// Final outcome of a protocol run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Trusted,
    NotTrusted,
}

impl Verdict {
    pub fn is_trusted(&self) -> bool {
        matches!(self, Verdict::Trusted)
    }
}

/// Diagnostics for one resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub index: usize,
    pub challenge: Challenge,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolOutcome {
    pub verdict: Verdict,
    pub rounds_planned: usize,
    pub reports: Vec<RoundReport>,
}

/// `(m − 1)²` rounds for `m` clauses; zero for an empty formula
pub fn rounds_for(clause_count: usize) -> usize {
    let m = clause_count.saturating_sub(1);
    m.saturating_mul(m)
}

/// Upper bound on the probability that a cheating prover passes `rounds`
/// independent rounds
pub fn soundness_error(rounds: usize) -> f64 {
    (-(rounds as f64)).exp2()
}

pub struct ProtocolRunner {
    config: ProtocolConfig,
}

impl ProtocolRunner {
    pub fn new(config: ProtocolConfig) -> Self {
        Self { config }
    }

    /// Run rounds sequentially on the calling thread, stopping at the first
    /// failure. Errors are structural defects, never verification failures.
    pub fn run<P, R>(
        &self,
        prover: &P,
        original: &Formula,
        alphabet: &[Variable],
        rng: &mut R,
    ) -> Result<ProtocolOutcome>
    where
        P: ProverStrategy,
        R: Rng + ?Sized,
    {
        let rounds = self.config.rounds_for(original.clause_count());
        info!(
            clauses = original.clause_count(),
            rounds,
            soundness_error = soundness_error(rounds),
            "starting protocol"
        );

        let mut reports = Vec::new();
        for index in 0..rounds {
            let report = run_round(index, prover, original, alphabet, rng)?;
            if self.config.record_reports {
                reports.push(report);
            }
            if !report.passed {
                return Ok(self.finish(Verdict::NotTrusted, rounds, reports));
            }
        }
        Ok(self.finish(Verdict::Trusted, rounds, reports))
    }

    /// Run rounds on the rayon pool. Every round draws from its worker's
    /// thread-local CSPRNG; the first failure found cancels the remaining
    /// rounds. Only the deciding failure is reported, since the set of
    /// rounds that resolved before cancellation is nondeterministic.
    pub fn run_parallel<P>(
        &self,
        prover: &P,
        original: &Formula,
        alphabet: &[Variable],
    ) -> Result<ProtocolOutcome>
    where
        P: ProverStrategy + Sync,
    {
        let rounds = self.config.rounds_for(original.clause_count());
        info!(clauses = original.clause_count(), rounds, "starting parallel protocol");

        let failure = (0..rounds)
            .into_par_iter()
            .map(|index| {
                run_round(index, prover, original, alphabet, &mut rand::thread_rng())
            })
            .find_any(|result| !matches!(result, Ok(report) if report.passed));

        match failure {
            None => Ok(self.finish(Verdict::Trusted, rounds, Vec::new())),
            Some(Ok(report)) => {
                let reports = if self.config.record_reports {
                    vec![report]
                } else {
                    Vec::new()
                };
                Ok(self.finish(Verdict::NotTrusted, rounds, reports))
            }
            Some(Err(err)) => Err(err),
        }
    }

    fn finish(&self, verdict: Verdict, rounds: usize, reports: Vec<RoundReport>) -> ProtocolOutcome {
        info!(?verdict, rounds_planned = rounds, "protocol finished");
        ProtocolOutcome {
            verdict,
            rounds_planned: rounds,
            reports,
        }
    }
}

/// Commit, challenge, open, check
#[tracing::instrument(skip_all, name = "run_round", fields(round = index))]
fn run_round<P, R>(
    index: usize,
    prover: &P,
    original: &Formula,
    alphabet: &[Variable],
    rng: &mut R,
) -> Result<RoundReport>
where
    P: ProverStrategy,
    R: Rng + ?Sized,
{
    let commitment = prover.prepare_round(rng)?;
    let mut verifier = Verifier::new(original, alphabet);
    let challenge = verifier.choose_challenge(rng)?;
    let passed = verifier.respond(&commitment)?;

    if passed {
        debug!(challenge = challenge.name(), "round passed");
    } else {
        warn!(?challenge, "round failed");
    }
    Ok(RoundReport {
        index,
        challenge,
        passed,
    })
}
