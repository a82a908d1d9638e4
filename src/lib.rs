#![allow(unused_assignments)]

pub mod calculator;
pub mod demo;
pub mod error;
pub mod name;
pub mod repl;

// Re-export error types for convenience
pub use error::{CalcError, ExprError};
