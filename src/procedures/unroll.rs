//! Unrolling the transition relation across timeframes.
//!
//! For each timeframe `t` in `0..k` the combinational logic is instantiated over timeframe-`t`
//! variables, and each update pair becomes an equivalence between the register at `t + 1` and its
//! next-state signal at `t`.
//! State registers therefore exist at timeframes `0..=k`, with no outgoing transition at `k`.
//! The boundary constraints pin the registers at timeframe `k` to the target bits and at
//! timeframe 0 to the initial bits.
//!
//! With `k = 0` there are no transition clauses and both boundary constraints pin the same
//! timeframe-0 variables: a well-formed instance which is satisfiable exactly when the two bit
//! strings agree.

use log::{debug, trace};

use crate::{
    context::Context,
    misc::log::targets,
    structures::{clause::literal, netlist::Netlist},
    types::err::{self, BitRole, ErrorKind},
};

/// Checks a boundary bit string against the register count and decodes it.
///
/// Called before any boundary clause is emitted, so a violation aborts the run with the formula
/// free of boundary constraints.
fn decode_bits(bits: &str, registers: usize, role: BitRole) -> Result<Vec<bool>, ErrorKind> {
    if bits.chars().count() != registers {
        return Err(ErrorKind::from(err::InvalidBoundaryConstraint::LengthMismatch {
            role,
            found: bits.chars().count(),
            expected: registers,
        }));
    }

    bits.chars()
        .map(|character| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(ErrorKind::from(err::InvalidBoundaryConstraint::BadCharacter {
                role,
                character,
            })),
        })
        .collect()
}

impl Context {
    /// Translates the netlist into the reachability instance described by the configuration.
    ///
    /// On success the context's formula holds every transition and boundary clause, and the
    /// variable database every node the clauses mention.
    pub fn translate(&mut self) -> Result<(), ErrorKind> {
        let k = self.config.unroll_depth;
        let register_count = self.netlist.register_count();

        // Both strings are validated before any clause could depend on them.
        let target = decode_bits(&self.config.target_bits, register_count, BitRole::Target)?;
        let init = decode_bits(&self.config.init_bits, register_count, BitRole::Init)?;

        // A read-only copy, as encoding borrows the context mutably throughout.
        let netlist = self.netlist.clone();

        for t in 0..k {
            self.encode_timeframe(&netlist, t)?;
        }

        debug!(target: targets::UNROLL,
            "Unrolled {k} timeframes: {} variables, {} clauses before boundary constraints",
            self.variable_db.count(),
            self.formula.clause_count()
        );

        self.pin_registers(&netlist, k, &target);
        self.pin_registers(&netlist, 0, &init);

        Ok(())
    }

    /// Encodes one transition copy: every gate at timeframe `t`, then every update pair as
    /// `register@(t+1) ↔ next@t`.
    ///
    /// Registers and declared inputs are seeded into the variable database first, so their
    /// numbering per timeframe does not depend on where gates happen to mention them.
    fn encode_timeframe(&mut self, netlist: &Netlist, t: u32) -> Result<(), ErrorKind> {
        trace!(target: targets::UNROLL, "Encoding transition copy at timeframe {t}");

        for register in netlist.state_registers() {
            self.var_of(register, t);
        }

        for input in &netlist.inputs {
            self.var_of(input, t);
        }

        for gate in &netlist.gates {
            self.encode_gate(gate, t)?;
        }

        for (register, next) in &netlist.updates {
            let register_next = self.var_of(register, t + 1);
            let next_now = self.var_of(next, t);
            self.encode_equiv(register_next, next_now);
        }

        Ok(())
    }

    /// Pins each state register at the given timeframe to the corresponding bit, as unit clauses.
    fn pin_registers(&mut self, netlist: &Netlist, frame: u32, bits: &[bool]) {
        for (register, bit) in netlist.state_registers().zip(bits) {
            let var = self.var_of(register, frame);
            match bit {
                true => self.formula.add_unit(literal(var)),
                false => self.formula.add_unit(-literal(var)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch() {
        let result = decode_bits("101", 2, BitRole::Target);
        assert_eq!(
            result,
            Err(ErrorKind::Boundary(
                err::InvalidBoundaryConstraint::LengthMismatch {
                    role: BitRole::Target,
                    found: 3,
                    expected: 2,
                }
            ))
        );
    }

    #[test]
    fn bad_character() {
        let result = decode_bits("1x", 2, BitRole::Init);
        assert_eq!(
            result,
            Err(ErrorKind::Boundary(
                err::InvalidBoundaryConstraint::BadCharacter {
                    role: BitRole::Init,
                    character: 'x',
                }
            ))
        );
    }

    #[test]
    fn decoded_bits() {
        assert_eq!(decode_bits("10", 2, BitRole::Init), Ok(vec![true, false]));
        assert_eq!(decode_bits("", 0, BitRole::Init), Ok(vec![]));
    }
}
