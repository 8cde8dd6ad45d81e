use rand::Rng;

/// What the verifier asks the prover to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Challenge {
    /// Reveal the whole transformation; the verifier undoes it and compares
    /// against the original formula.
    FullReveal,
    /// Reveal clause `index` of the transformed formula and the transformed
    /// assignment; the verifier checks that the clause is satisfied.
    ClauseCheck { index: usize },
}

impl Challenge {
    /// One fair bit picks the challenge type: 0 → full reveal, 1 → clause
    /// check. An empty formula has no clause to spot-check and always gets a
    /// full reveal.
    pub fn draw<R: Rng + ?Sized>(clause_count: usize, rng: &mut R) -> Self {
        if rng.gen::<bool>() && clause_count > 0 {
            Challenge::ClauseCheck {
                index: rng.gen_range(0..clause_count),
            }
        } else {
            Challenge::FullReveal
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Challenge::FullReveal => "full-reveal",
            Challenge::ClauseCheck { .. } => "clause-check",
        }
    }
}
