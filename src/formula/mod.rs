//! 3-CNF formula model
//!
//! A formula is an ordered list of clauses, each clause exactly three
//! literals, each literal a variable with a polarity:
//! (a ∨ b ∨ ¬c) ∧ (¬a ∨ ¬b ∨ d) ∧ ...
//!
//! Clause order and literal order are not semantically meaningful, but the
//! protocol treats them as obfuscation dimensions, so equality here is
//! structural.

mod assignment;
mod clause;
mod cnf;
mod literal;

pub use assignment::Assignment;
pub use clause::{Clause, CLAUSE_WIDTH};
pub use cnf::Formula;
pub use literal::{Literal, Variable};
