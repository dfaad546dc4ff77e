//! Run configuration
//!
//! Everything the binary needs comes from the command line; there is no
//! config file layer for a tool this small.

pub mod cli;

pub use cli::Cli;
