//! Structures representing the abstract elements of a translation.
//!
//! - A formula is a conjunction of [clauses](clause), each clause a disjunction of literals.
//! - A [netlist](netlist) is the static hardware description the formula is derived from.
//! - A [gate](gate) is a pure combinational primitive within a netlist.

pub mod clause;
pub mod gate;
pub mod netlist;
