//! Error types used in the library.
//!
//! Every error here is fatal to the translation run it occurs in: a silently-wrong CNF instance
//! would produce a meaningless and undetectable SAT/UNSAT answer downstream, so nothing is
//! recovered from.
//!
//! Two conditions are deliberately *not* errors:
//! - Source lines outside the recognised dialect are skipped during [extraction](crate::builder),
//!   with a debug-level count of skips.
//! - A non-zero exit status from the external [solver](crate::solver) is a warning only, as solver
//!   exit codes conventionally encode SAT/UNSAT rather than tool failure.

use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Source(MalformedSource),
    Gate(UnsupportedGate),
    Boundary(InvalidBoundaryConstraint),
    Write(OutputWriteFailure),
}

/// Noted errors while extracting a netlist from source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedSource {
    /// No `register <= signal;` assignments were found in a synchronous block.
    /// Without at least one state register there is no transition relation to unroll.
    NoStateUpdates,
}

impl From<MalformedSource> for ErrorKind {
    fn from(e: MalformedSource) -> Self {
        ErrorKind::Source(e)
    }
}

/// Noted errors while encoding a gate.
///
/// A gate whose keyword is neither `and` nor `not` never reaches the encoder, as its
/// instantiation line is not recognised as a gate during extraction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnsupportedGate {
    /// A NOT gate with an input count other than one.
    NotArity {
        /// The signal the gate defines.
        out: String,

        /// The number of inputs found.
        found: usize,
    },

    /// An AND gate with fewer than two inputs.
    AndArity {
        /// The signal the gate defines.
        out: String,

        /// The number of inputs found.
        found: usize,
    },
}

impl From<UnsupportedGate> for ErrorKind {
    fn from(e: UnsupportedGate) -> Self {
        ErrorKind::Gate(e)
    }
}

/// The boundary bit string an [InvalidBoundaryConstraint] complains about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BitRole {
    /// The initial-state bits, pinned at timeframe 0.
    Init,

    /// The target-state bits, pinned at timeframe k.
    Target,
}

impl std::fmt::Display for BitRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "init_bits"),
            Self::Target => write!(f, "target_bits"),
        }
    }
}

/// Noted errors while validating boundary bit strings.
///
/// Both are raised before any boundary clause is added to the formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidBoundaryConstraint {
    /// A bit string whose length differs from the inferred register count.
    LengthMismatch {
        role: BitRole,

        /// The length of the supplied string.
        found: usize,

        /// The number of inferred state registers.
        expected: usize,
    },

    /// A character other than `0` or `1` in a bit string.
    BadCharacter { role: BitRole, character: char },
}

impl From<InvalidBoundaryConstraint> for ErrorKind {
    fn from(e: InvalidBoundaryConstraint) -> Self {
        ErrorKind::Boundary(e)
    }
}

/// Noted errors while writing the instance artifacts.
///
/// A partially written instance is meaningless to a solver, so any I/O failure aborts the run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OutputWriteFailure {
    /// Failure writing the variable dictionary.
    Dictionary {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },

    /// Failure writing the DIMACS CNF file.
    Dimacs {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },
}

impl From<OutputWriteFailure> for ErrorKind {
    fn from(e: OutputWriteFailure) -> Self {
        ErrorKind::Write(e)
    }
}
