//! Shared terminal utilities.
//!
//! Box drawing and colored strength labels.

mod output;

pub use output::*;
