//! The procedures of a translation, written as methods on a [Context](crate::context::Context).
//!
//! - [encode](encode) lowers single gates and equivalences to clauses.
//! - [unroll](unroll) drives the encoder across timeframes and pins the boundary states.

pub mod encode;
pub mod unroll;
