//! Tseitin encoding of gates and equivalences.
//!
//! Each relation is lowered to clauses over variables already allocated by the caller; no
//! auxiliary variables are introduced here.
//! The encodings are sound in both directions (the defined variable implies its relation and the
//! relation implies the variable), so the emitted clauses are logically equivalent to the
//! relation.

use log::trace;

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        clause::{literal, Var},
        gate::{Gate, GateKind},
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// Encodes `y ↔ ¬a` as the two clauses `(a ∨ y)` and `(¬a ∨ ¬y)`.
    pub fn encode_not(&mut self, y: Var, a: Var) {
        self.formula.add_clause(vec![literal(a), literal(y)]);
        self.formula.add_clause(vec![-literal(a), -literal(y)]);
    }

    /// Encodes `y ↔ (x1 ∧ … ∧ xn)` as `(¬x1 ∨ … ∨ ¬xn ∨ y)` plus `(xi ∨ ¬y)` for each input:
    /// n + 1 clauses in total.
    pub fn encode_and(&mut self, y: Var, xs: &[Var]) {
        let mut big: Vec<_> = xs.iter().map(|x| -literal(*x)).collect();
        big.push(literal(y));
        self.formula.add_clause(big);

        for x in xs {
            self.formula.add_clause(vec![literal(*x), -literal(y)]);
        }
    }

    /// Encodes `a ↔ b` as the two clauses `(¬a ∨ b)` and `(a ∨ ¬b)`.
    pub fn encode_equiv(&mut self, a: Var, b: Var) {
        self.formula.add_clause(vec![-literal(a), literal(b)]);
        self.formula.add_clause(vec![literal(a), -literal(b)]);
    }

    /// Encodes the given gate's defining relation at the given timeframe.
    ///
    /// The output variable is allocated before the input variables, in keeping with the
    /// first-reference numbering contract.
    /// Arity violations are fatal: the encoder never guesses an interpretation.
    pub fn encode_gate(&mut self, gate: &Gate, frame: u32) -> Result<(), ErrorKind> {
        let y = self.var_of(&gate.out, frame);
        let xs: Vec<Var> = gate.ins.iter().map(|name| self.var_of(name, frame)).collect();

        trace!(target: targets::ENCODING, "{} {} at timeframe {frame}", gate.kind, gate.out);

        match gate.kind {
            GateKind::Not => {
                if xs.len() != 1 {
                    return Err(ErrorKind::from(err::UnsupportedGate::NotArity {
                        out: gate.out.clone(),
                        found: xs.len(),
                    }));
                }
                self.encode_not(y, xs[0]);
            }

            GateKind::And => {
                if xs.len() < 2 {
                    return Err(ErrorKind::from(err::UnsupportedGate::AndArity {
                        out: gate.out.clone(),
                        found: xs.len(),
                    }));
                }
                self.encode_and(y, &xs);
            }
        }

        Ok(())
    }
}
