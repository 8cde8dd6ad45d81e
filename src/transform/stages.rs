//! Forward stages of the per-round pipeline and their inverses
//!
//! Every stage borrows its input and returns a freshly owned formula, so
//! the caller's original is never touched.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{Result, SatZkError};
use crate::formula::{Assignment, Clause, Formula, Literal, Variable};

use super::permutation::{LiteralPermutation, Permutation};

/// Variable → "was negated this round"
pub type NegationMap = BTreeMap<Variable, bool>;

/// Variable name substitution. The record stores it new name → old name.
pub type Renaming = BTreeMap<Variable, Variable>;

/// Stage 1: flip a fair coin per variable of the alphabet; negated
/// variables have every occurrence flipped and their value flipped.
pub fn negate_randomly<R: Rng + ?Sized>(
    formula: &Formula,
    alphabet: &[Variable],
    assignment: &Assignment,
    rng: &mut R,
) -> Result<(Formula, Assignment, NegationMap)> {
    let negations: NegationMap = alphabet
        .iter()
        .map(|v| (v.clone(), rng.gen_bool(0.5)))
        .collect();

    let negated_formula = apply_negation(formula, &negations)?;
    let negated_assignment = alphabet
        .iter()
        .map(|v| -> Result<(Variable, bool)> {
            Ok((v.clone(), assignment.value(v)? != negations[v]))
        })
        .collect::<Result<Assignment>>()?;

    Ok((negated_formula, negated_assignment, negations))
}

/// Flip every literal whose variable is marked in `negations`. Negation is
/// an involution, so this also undoes stage 1.
pub fn apply_negation(formula: &Formula, negations: &NegationMap) -> Result<Formula> {
    formula.map_clauses(|clause| {
        clause.map_literals(|literal| match negations.get(&literal.variable) {
            Some(true) => Ok(literal.flipped()),
            Some(false) => Ok(literal.clone()),
            None => Err(SatZkError::UnknownVariable(literal.variable.clone())),
        })
    })
}

/// Stage 2: substitute variables through a uniformly random bijection of
/// the alphabet. Returns the renaming as new name → old name.
pub fn rename_variables<R: Rng + ?Sized>(
    formula: &Formula,
    alphabet: &[Variable],
    rng: &mut R,
) -> Result<(Formula, Renaming)> {
    let mut shuffled = alphabet.to_vec();
    shuffled.shuffle(rng);

    let forward: Renaming = alphabet.iter().cloned().zip(shuffled.iter().cloned()).collect();
    let renamed = substitute_variables(formula, &forward)?;
    let inverse = shuffled.into_iter().zip(alphabet.iter().cloned()).collect();
    Ok((renamed, inverse))
}

/// Replace each variable `v` by `mapping[v]`, keeping polarity. Called with
/// the recorded new → old renaming it undoes stage 2.
pub fn substitute_variables(formula: &Formula, mapping: &Renaming) -> Result<Formula> {
    formula.map_clauses(|clause| {
        clause.map_literals(|literal| {
            mapping
                .get(&literal.variable)
                .map(|v| Literal::new(v.clone(), literal.negated))
                .ok_or_else(|| SatZkError::UnknownVariable(literal.variable.clone()))
        })
    })
}

/// Stage 3: reorder clauses by a uniformly random permutation
pub fn permute_clauses<R: Rng + ?Sized>(
    formula: &Formula,
    rng: &mut R,
) -> Result<(Formula, Permutation)> {
    let permutation = Permutation::random(formula.clause_count(), rng);
    let clauses = permutation.apply(formula.clauses())?;
    Ok((Formula::new(clauses), permutation))
}

pub fn undo_clause_permutation(formula: &Formula, permutation: &Permutation) -> Result<Formula> {
    Ok(Formula::new(permutation.invert(formula.clauses())?))
}

/// Stage 4: independently shuffle the three literals of every clause
pub fn permute_literals<R: Rng + ?Sized>(
    formula: &Formula,
    rng: &mut R,
) -> Result<(Formula, Vec<LiteralPermutation>)> {
    let mut permutations = Vec::with_capacity(formula.clause_count());
    let permuted = formula.map_clauses(|clause| {
        let mut p: LiteralPermutation = [0, 1, 2];
        p.shuffle(rng);
        permutations.push(p);
        reorder_clause(clause, &Permutation::from_mapping(p.to_vec()), false)
    })?;
    Ok((permuted, permutations))
}

pub fn undo_literal_permutations(
    formula: &Formula,
    permutations: &[LiteralPermutation],
) -> Result<Formula> {
    if permutations.len() != formula.clause_count() {
        return Err(SatZkError::InvalidParameter(format!(
            "{} literal permutations for {} clauses",
            permutations.len(),
            formula.clause_count()
        )));
    }
    let clauses = formula
        .clauses()
        .iter()
        .zip(permutations)
        .map(|(clause, p)| reorder_clause(clause, &Permutation::from_mapping(p.to_vec()), true))
        .collect::<Result<Vec<_>>>()?;
    Ok(Formula::new(clauses))
}

fn reorder_clause(clause: &Clause, permutation: &Permutation, inverse: bool) -> Result<Clause> {
    let literals = if inverse {
        permutation.invert(clause.literals())?
    } else {
        permutation.apply(clause.literals())?
    };
    Clause::try_from(literals)
}

/// Stage 5: re-key the (negated) assignment under the new names.
/// `renaming` is new name → old name, as recorded.
pub fn relabel_assignment(assignment: &Assignment, renaming: &Renaming) -> Result<Assignment> {
    renaming
        .iter()
        .map(|(new, old)| -> Result<(Variable, bool)> {
            Ok((new.clone(), assignment.value(old)?))
        })
        .collect()
}
