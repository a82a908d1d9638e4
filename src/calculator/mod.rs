pub mod expr;

use serde::Serialize;

use crate::error::CalcError;

/// The four binary operations the calculator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
}

impl BinaryOp {
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Exact float comparison against zero, so `-0.0` is rejected too.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Print integral results without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
