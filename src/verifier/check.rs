//! The two round checks

use tracing::{debug, warn};

use crate::errors::Result;
use crate::formula::{Assignment, Clause, Formula, Variable};
use crate::transform::{RecordDefect, TransformationRecord};

/// Undo `record` on `transformed` and compare structurally with `original`:
/// same clause order, literal order, names and polarities.
///
/// The record is validated first. A malformed record, or one that fails to
/// invert against the transformed formula, is a failed round rather than an
/// error because it can only come from the prover.
pub fn check_full_reveal(
    original: &Formula,
    alphabet: &[Variable],
    transformed: &Formula,
    record: &TransformationRecord,
) -> bool {
    if transformed.clause_count() != original.clause_count() {
        let defect = RecordDefect::ClauseCount {
            expected: original.clause_count(),
            got: transformed.clause_count(),
        };
        warn!(%defect, "full reveal rejected");
        return false;
    }
    if let Err(defect) = record.check_well_formed(alphabet, original.clause_count()) {
        warn!(%defect, "full reveal rejected");
        return false;
    }
    match record.invert(transformed) {
        Ok(restored) if restored == *original => true,
        Ok(_) => {
            debug!("restored formula differs from the original");
            false
        }
        Err(err) => {
            warn!(error = %err, "transformed formula does not invert");
            false
        }
    }
}

/// Satisfied iff at least one of the three literals is true under
/// `assignment`. A variable missing from the assignment is an error.
pub fn check_clause(clause: &Clause, assignment: &Assignment) -> Result<bool> {
    clause.is_satisfied_by(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SatZkError;
    use crate::formula::Literal;
    use crate::transform::Permutation;

    fn identity_record(alphabet: &[Variable], clause_count: usize) -> TransformationRecord {
        TransformationRecord {
            negations: alphabet.iter().map(|v| (v.clone(), false)).collect(),
            renaming: alphabet.iter().map(|v| (v.clone(), v.clone())).collect(),
            clause_permutation: Permutation::identity(clause_count),
            literal_permutations: vec![[0, 1, 2]; clause_count],
        }
    }

    #[test]
    fn test_clause_check_scenario() {
        let clause = Clause::parse(&["~a", "b", "~c"]).unwrap();
        let assignment = Assignment::from_pairs([("a", true), ("b", false), ("c", false)]);
        assert_eq!(check_clause(&clause, &assignment), Ok(true));

        let falsified = Assignment::from_pairs([("a", true), ("b", false), ("c", true)]);
        assert_eq!(check_clause(&clause, &falsified), Ok(false));

        let partial = Assignment::from_pairs([("a", true)]);
        assert_eq!(
            check_clause(&clause, &partial),
            Err(SatZkError::UnknownVariable(Variable::new("b")))
        );
    }

    #[test]
    fn test_full_reveal_structural_equality() {
        let original = Formula::parse(&[&["a", "b", "~c"], &["~a", "c", "b"]]).unwrap();
        let alphabet = original.variables();
        let record = identity_record(&alphabet, 2);
        assert!(check_full_reveal(&original, &alphabet, &original, &record));

        // same clauses, different order: semantically equal, structurally not
        let swapped = Formula::new(vec![
            original.clauses()[1].clone(),
            original.clauses()[0].clone(),
        ]);
        assert!(!check_full_reveal(&original, &alphabet, &swapped, &record));

        // one polarity flipped
        let mut clauses = original.clauses().to_vec();
        clauses[0] = Clause::new([
            Literal::negative("a"),
            Literal::positive("b"),
            Literal::negative("c"),
        ]);
        let tampered = Formula::new(clauses);
        assert!(!check_full_reveal(&original, &alphabet, &tampered, &record));
    }

    #[test]
    fn test_full_reveal_rejects_malformed_record() {
        let original = Formula::parse(&[&["a", "b", "~c"], &["~a", "c", "b"]]).unwrap();
        let alphabet = original.variables();

        let mut record = identity_record(&alphabet, 2);
        record.clause_permutation = Permutation::from_mapping(vec![0, 0]);
        assert!(!check_full_reveal(&original, &alphabet, &original, &record));

        // collapses every name onto `a`
        let mut record = identity_record(&alphabet, 2);
        for old in record.renaming.values_mut() {
            *old = Variable::new("a");
        }
        assert!(!check_full_reveal(&original, &alphabet, &original, &record));

        let record = identity_record(&alphabet, 2);
        let shorter = Formula::new(vec![original.clauses()[0].clone()]);
        assert!(!check_full_reveal(&original, &alphabet, &shorter, &record));
    }
}
