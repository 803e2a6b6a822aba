//! Subcommand entrypoints, one module per CLI verb.

pub mod add;
pub mod connect;
pub mod delete;
pub mod show;
