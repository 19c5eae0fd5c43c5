//! The context of a translation run.

use crate::{
    config::Config,
    db::variables::VariableMap,
    structures::{
        clause::{CnfFormula, Var},
        netlist::Netlist,
    },
};

/// The owning structure of one translation run.
///
/// A context pairs the immutable inputs of a run (the netlist and the configuration) with the
/// structures the run populates (the variable map and the formula).
/// Nothing is shared across runs: a context's lifetime is exactly one translation.
pub struct Context {
    /// The configuration of the run.
    pub config: Config,

    /// The netlist to unroll, read-only from construction on.
    pub netlist: Netlist,

    /// The variable database, populated on first reference during encoding.
    pub variable_db: VariableMap,

    /// The clauses of the instance, populated during encoding.
    pub formula: CnfFormula,
}

impl Context {
    /// A fresh context for translating the given netlist under the given configuration.
    pub fn from_netlist(netlist: Netlist, config: Config) -> Self {
        Context {
            config,
            netlist,
            variable_db: VariableMap::default(),
            formula: CnfFormula::default(),
        }
    }

    /// The variable of the given signal at the given timeframe, allocated if fresh.
    pub fn var_of(&mut self, name: &str, frame: u32) -> Var {
        self.variable_db.var_of(name, frame)
    }

    /// The state registers of the run, in inferred (update-pair) order.
    ///
    /// Bit `i` of the configured init and target strings refers to the `i`-th name returned.
    /// Callers are expected to surface this order, as the crate has no way to detect bit strings
    /// supplied in some other order.
    pub fn registers(&self) -> Vec<&str> {
        self.netlist.state_registers().collect()
    }
}
