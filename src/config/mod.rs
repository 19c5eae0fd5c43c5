//! The configuration of a translation run.

/// Parameters of one translation run, fixed before the run begins.
///
/// Paths for the artifacts and the external solver are a concern of the caller (see the cli) and
/// are deliberately absent: the core only needs the source name for provenance comments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// The name of the source file, echoed into the provenance comments of the CNF instance.
    pub source_name: String,

    /// The number of clock transitions to unroll.
    ///
    /// Zero is legal, and produces an instance with no transition clauses whose initial and
    /// target constraints both pin timeframe-0 variables.
    pub unroll_depth: u32,

    /// The initial-state bits, one `0`/`1` character per inferred state register.
    pub init_bits: String,

    /// The target-state bits, one `0`/`1` character per inferred state register.
    pub target_bits: String,
}
