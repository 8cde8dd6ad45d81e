//! Property-based tests for the per-round transformation pipeline
//!
//! Formulas are generated together with a satisfying assignment: any clause
//! the random assignment falsifies gets its first literal flipped.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sat3_zk::protocol::ProtocolRunner;
use sat3_zk::transform::{negate_randomly, permute_clauses, permute_literals, rename_variables};
use sat3_zk::{
    Assignment, Clause, Formula, HonestProver, Literal, ProtocolConfig, ProverStrategy, Variable,
    Verdict,
};

// ============================================================================
// Generators
// ============================================================================

fn satisfiable_instance() -> impl Strategy<Value = (Formula, Vec<Variable>, Assignment)> {
    (3usize..8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(prop::array::uniform3((0..n, any::<bool>())), 1..12),
            )
        })
        .prop_map(|(values, raw_clauses)| {
            let alphabet: Vec<Variable> = (0..values.len())
                .map(|i| Variable::new(format!("x{}", i)))
                .collect();
            let assignment: Assignment =
                alphabet.iter().cloned().zip(values.iter().copied()).collect();
            let clauses = raw_clauses
                .into_iter()
                .map(|raw| {
                    let satisfied = raw.iter().any(|&(i, negated)| values[i] != negated);
                    let mut literals =
                        raw.map(|(i, negated)| Literal::new(alphabet[i].clone(), negated));
                    if !satisfied {
                        literals[0] = literals[0].flipped();
                    }
                    Clause::new(literals)
                })
                .collect();
            (Formula::new(clauses), alphabet, assignment)
        })
}

// ============================================================================
// Pipeline properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_generated_instances_are_satisfied((formula, _, assignment) in satisfiable_instance()) {
        prop_assert_eq!(formula.is_satisfied_by(&assignment), Ok(true));
    }

    #[test]
    fn prop_full_reveal_round_trips(
        (formula, alphabet, assignment) in satisfiable_instance(),
        seed in any::<u64>(),
    ) {
        let prover = HonestProver::new(&formula, &alphabet, &assignment).unwrap();
        let round = prover.prepare_round(&mut StdRng::seed_from_u64(seed)).unwrap();
        let (transformed, record) = round.open_full();
        prop_assert_eq!(record.check_well_formed(&alphabet, formula.clause_count()), Ok(()));
        prop_assert_eq!(record.invert(transformed).unwrap(), formula);
    }

    #[test]
    fn prop_transformed_assignment_satisfies(
        (formula, alphabet, assignment) in satisfiable_instance(),
        seed in any::<u64>(),
    ) {
        let prover = HonestProver::new(&formula, &alphabet, &assignment).unwrap();
        let round = prover.prepare_round(&mut StdRng::seed_from_u64(seed)).unwrap();
        let (transformed, transformed_assignment, _) = round.into_parts();
        prop_assert_eq!(transformed.is_satisfied_by(&transformed_assignment), Ok(true));
    }

    #[test]
    fn prop_negation_flips_exactly_marked_variables(
        (formula, alphabet, assignment) in satisfiable_instance(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (negated, values, map) =
            negate_randomly(&formula, &alphabet, &assignment, &mut rng).unwrap();
        for (before, after) in formula.clauses().iter().zip(negated.clauses()) {
            for (l0, l1) in before.iter().zip(after.iter()) {
                prop_assert_eq!(&l0.variable, &l1.variable);
                prop_assert_eq!(l0.negated != l1.negated, map[&l0.variable]);
            }
        }
        for v in &alphabet {
            prop_assert_eq!(values.value(v).unwrap(), assignment.value(v).unwrap() != map[v]);
        }
    }

    #[test]
    fn prop_stages_keep_shape_and_inputs(
        (formula, alphabet, assignment) in satisfiable_instance(),
        seed in any::<u64>(),
    ) {
        let snapshot = (formula.clone(), assignment.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        let (negated, _, _) = negate_randomly(&formula, &alphabet, &assignment, &mut rng).unwrap();
        let (renamed, _) = rename_variables(&negated, &alphabet, &mut rng).unwrap();
        let (shuffled, _) = permute_clauses(&renamed, &mut rng).unwrap();
        let (mixed, _) = permute_literals(&shuffled, &mut rng).unwrap();

        for stage in [&negated, &renamed, &shuffled, &mixed] {
            prop_assert_eq!(stage.clause_count(), formula.clause_count());
            prop_assert!(stage.clauses().iter().all(|c| c.literals().len() == 3));
        }
        prop_assert_eq!((formula, assignment), snapshot);
    }

    #[test]
    fn prop_honest_prover_always_trusted(
        (formula, alphabet, assignment) in satisfiable_instance(),
        seed in any::<u64>(),
    ) {
        let prover = HonestProver::new(&formula, &alphabet, &assignment).unwrap();
        let runner = ProtocolRunner::new(ProtocolConfig::default().with_reports(false));
        let outcome = runner
            .run(&prover, &formula, &alphabet, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(outcome.verdict, Verdict::Trusted);
    }
}
