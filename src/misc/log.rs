/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [netlist extraction](crate::builder), including skipped-line counts.
    pub const EXTRACTION: &str = "extraction";

    /// Logs related to [unrolling](crate::context::Context::translate) the transition relation.
    pub const UNROLL: &str = "unroll";

    /// Logs related to [gate encoding](crate::procedures)
    pub const ENCODING: &str = "encoding";

    /// Logs related to [writing the instance artifacts](crate::reports)
    pub const WRITER: &str = "writer";

    /// Logs related to the external [solver](crate::solver)
    pub const SOLVER: &str = "solver";
}
