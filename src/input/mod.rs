//! Input loading
//!
//! The pipeline consumes places from a row-oriented source; CSV is the only
//! format supported. Loading happens exactly once, before the pipeline runs,
//! and every malformed row fails the whole load with a typed error carrying
//! the offending line number.

pub mod csv;

pub use csv::{read_places, PlaceTable};
