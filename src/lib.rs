//! A library for translating restricted gate-level netlists into bounded-model-checking queries written in conjunctive normal form.
//!
//! reachcnf reads a structural hardware description built from AND and NOT primitive gates together
//! with a single synchronous state-update block, unrolls the transition relation a fixed number of
//! timeframes, and emits the reachability question "can the target state be reached from the
//! initial state within k clock transitions?" as a DIMACS CNF instance for an external SAT solver.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context).
//!
//! A context is built from a [Netlist](crate::structures::netlist::Netlist) and a
//! [Config](crate::config::Config), and owns every structure touched by one translation run:
//! - The netlist itself, read-only after [extraction](crate::builder).
//! - A [variable map](crate::db::variables::VariableMap) pairing each (signal, timeframe) node
//!   with a dense DIMACS variable, allocated on first reference.
//! - The [formula](crate::structures::clause::CnfFormula) the clauses accumulate into.
//!
//! Useful starting points:
//! - The [translate procedure](crate::context::Context::translate) to inspect the dynamics of an
//!   unrolling run.
//! - The [builder](crate::builder) to see which slice of netlist syntax is recognised.
//! - The [reports](crate::reports) for the on-disk shape of the variable dictionary and the CNF
//!   instance.
//!
//! # Example
//!
//! ```rust
//! # use reachcnf::builder;
//! # use reachcnf::config::Config;
//! # use reachcnf::context::Context;
//! let source = "
//! module toggle(clock);
//!   input clock;
//!   reg S0;
//!   wire NS0;
//!   not g0(NS0, S0); // the next state is the complement
//!   always @(posedge clock)
//!   begin
//!     S0 <= NS0;
//!   end
//! endmodule
//! ";
//!
//! let netlist = builder::extract(source).unwrap();
//! let config = Config {
//!     source_name: "toggle.v".to_string(),
//!     unroll_depth: 1,
//!     init_bits: "0".to_string(),
//!     target_bits: "1".to_string(),
//! };
//!
//! let mut ctx = Context::from_netlist(netlist, config);
//! assert!(ctx.translate().is_ok());
//!
//! // S0@0, clock@0, NS0@0, S0@1.
//! assert_eq!(ctx.variable_db.count(), 4);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the translation, with a target per stage so output can
//! be narrowed to relevant parts of the pipeline. The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of
//! skipped source lines can be found with `RUST_LOG=extraction=debug …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
pub mod solver;
