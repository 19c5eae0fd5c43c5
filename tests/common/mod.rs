//! Shared helpers: exhaustive satisfiability checks over small formulas.

#![allow(dead_code)]

use reachcnf::context::Context;
use reachcnf::structures::clause::Clause;

/// Whether the assignment satisfies every clause.
///
/// `assignment[i]` is the value of variable `i + 1`.
pub fn satisfies(clauses: &[Clause], assignment: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            let value = assignment[(literal.unsigned_abs() as usize) - 1];
            if literal.is_positive() {
                value
            } else {
                !value
            }
        })
    })
}

/// Every satisfying assignment of the context's formula, by exhaustive enumeration.
///
/// Only suitable for the small instances used in tests.
pub fn models(ctx: &Context) -> Vec<Vec<bool>> {
    let count = ctx.variable_db.count();
    assert!(count <= 20, "too many variables to enumerate");

    let clauses = ctx.formula.clauses();
    let mut found = Vec::new();

    for mask in 0_u32..(1 << count) {
        let assignment: Vec<bool> = (0..count).map(|i| mask & (1 << i) != 0).collect();
        if satisfies(clauses, &assignment) {
            found.push(assignment);
        }
    }

    found
}

/// Whether the context's formula is satisfiable, by exhaustive enumeration.
pub fn satisfiable(ctx: &Context) -> bool {
    !models(ctx).is_empty()
}
