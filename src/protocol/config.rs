//! Protocol parameters

use super::runner::rounds_for;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Overrides the `(m − 1)²` round schedule when set
    pub rounds: Option<usize>,
    /// Dispatch rounds on the rayon pool, one CSPRNG per worker thread
    pub parallel: bool,
    /// Keep a [`RoundReport`](super::RoundReport) per resolved round
    pub record_reports: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            rounds: None,
            parallel: false,
            record_reports: true,
        }
    }
}

impl ProtocolConfig {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_reports(mut self, record_reports: bool) -> Self {
        self.record_reports = record_reports;
        self
    }

    /// Number of rounds to run for a formula with `clause_count` clauses
    pub fn rounds_for(&self, clause_count: usize) -> usize {
        self.rounds.unwrap_or_else(|| rounds_for(clause_count))
    }
}
