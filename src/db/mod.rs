//! Databases owned by a [context](crate::context::Context) for the lifetime of a run.

pub mod variables;
