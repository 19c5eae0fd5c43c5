//! The netlist, a static description of the hardware to unroll.

use crate::structures::gate::Gate;

/// The static hardware description produced by [extraction](crate::builder) and read-only for the
/// remainder of a translation run.
///
/// Declaration lists and gates keep source order.
/// Update pairs keep the order their assignments appear in the synchronous block, and this order
/// is the single source of truth correlating external bit strings to registers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Netlist {
    /// Names declared with the `input` keyword.
    pub inputs: Vec<String>,

    /// Names declared with the `output` keyword.
    pub outputs: Vec<String>,

    /// Names declared with the `reg` keyword.
    pub regs: Vec<String>,

    /// Names declared with the `wire` keyword.
    pub wires: Vec<String>,

    /// The combinational primitives of the netlist.
    pub gates: Vec<Gate>,

    /// (register, next-state signal) pairs from the synchronous block, e.g. `S0 <= NS0;`.
    pub updates: Vec<(String, String)>,
}

impl Netlist {
    /// The state registers, in the order their updates appear in the synchronous block.
    ///
    /// Bit `i` of an initial- or target-state string refers to the `i`-th name returned here.
    pub fn state_registers(&self) -> impl Iterator<Item = &str> {
        self.updates.iter().map(|(register, _)| register.as_str())
    }

    /// The number of state registers, equally the required length of a boundary bit string.
    pub fn register_count(&self) -> usize {
        self.updates.len()
    }
}
