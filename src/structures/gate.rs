//! Gates, the combinational primitives of a netlist.
//!
//! Only AND and NOT gates are recognised.
//! Arity is checked when a gate is encoded rather than when it is parsed, as the source dialect
//! places no bound on the inputs listed in an instantiation.

/// The kind of a combinational primitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GateKind {
    /// Conjunction of two or more inputs.
    And,

    /// Negation of a single input.
    Not,
}

impl GateKind {
    /// The kind named by an instantiation keyword, if the keyword is recognised.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "and" => Some(Self::And),
            "not" => Some(Self::Not),
            _ => None,
        }
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// A combinational primitive: one output signal defined as a function of some input signals.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gate {
    /// The kind of the gate.
    pub kind: GateKind,

    /// The name of the signal the gate defines.
    pub out: String,

    /// The names of the signals the gate reads, in instantiation order.
    pub ins: Vec<String>,
}
