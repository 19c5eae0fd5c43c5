//! Clauses, literals, and the formula they accumulate into.
//!
//! Literals take their DIMACS representation directly: a non-zero integer whose absolute value is
//! a [variable](crate::db::variables) and whose sign is the polarity.

/// A boolean variable, a dense positive integer allocated by a
/// [VariableMap](crate::db::variables::VariableMap).
pub type Var = u32;

/// A signed reference to a variable: positive for the variable, negative for its negation.
pub type Literal = i32;

/// A disjunction of literals.
pub type Clause = Vec<Literal>;

/// The positive literal of a variable.
pub fn literal(var: Var) -> Literal {
    var as Literal
}

/// A conjunction of clauses, built once per translation run.
///
/// The variable count of the instance is not stored here.
/// It is read from the variable map at write time, so that the invariant "variable count equals
/// the number of distinct (signal, timeframe) pairs referenced" holds by construction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CnfFormula {
    clauses: Vec<Clause>,
}

impl CnfFormula {
    /// Appends a clause to the formula.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Appends a unit clause to the formula.
    pub fn add_unit(&mut self, literal: Literal) {
        self.clauses.push(vec![literal]);
    }

    /// The clauses of the formula, in the order they were added.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The number of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}
