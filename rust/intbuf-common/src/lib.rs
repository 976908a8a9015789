//! Core definitions (errors and results), relied upon by the intbuf crates.

pub mod error;
pub mod result;

pub use result::Result;
