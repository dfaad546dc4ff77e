//! Report rendering
//!
//! The pipeline's only output surface: a human-readable text report written
//! to any `io::Write` sink (stdout in the binary, a byte buffer in tests).

pub mod text;

pub use text::write_report;
