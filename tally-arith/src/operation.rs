//! Textual operations and their dispatch onto a [`Calculator`].
//!
//! An expression is an operator name followed by whitespace separated operands:
//!
//! ```text
//! add 10 5
//! root 27 3
//! factorial 5
//! to_radians 45
//! ```
//!
//! Operator names are case insensitive and most have a short alias or symbol
//! (`sub`, `*`, `÷`, `!`, ...). Evaluating a parsed [`Operation`] goes through
//! the same [`Calculator`] methods as direct calls, so validation and logging
//! are identical.

use crate::calculator::Calculator;
use crate::display;
use crate::error::{ArithError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single request for the arithmetic service
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add(f64, f64),
    Subtract(f64, f64),
    Multiply(f64, f64),
    Divide(f64, f64),
    Modulo(f64, f64),
    Power(f64, f64),
    Sqrt(f64),
    NthRoot(f64, f64),
    AbsoluteValue(f64),
    Factorial(i64),
    Percentage(f64, f64),
    NaturalLog(f64),
    Log10(f64),
    Sin(f64),
    Cos(f64),
    Tan(f64),
    DegreesToRadians(f64),
    RadiansToDegrees(f64),
}

/// Result of evaluating an [`Operation`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Real(f64),
    /// Only produced by factorial
    Integer(i64),
}

/// Serializes as a bare number. JSON has no literal for non-finite numbers,
/// so those become the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Real(v) => match display::non_finite(v) {
                Some(text) => serializer.serialize_str(text),
                None => serializer.serialize_f64(v),
            },
            Value::Integer(v) => serializer.serialize_i64(v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
        }
    }
}

impl Operation {
    /// Canonical operator name, as accepted by [`Operation::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add(..) => "add",
            Operation::Subtract(..) => "subtract",
            Operation::Multiply(..) => "multiply",
            Operation::Divide(..) => "divide",
            Operation::Modulo(..) => "modulo",
            Operation::Power(..) => "power",
            Operation::Sqrt(..) => "sqrt",
            Operation::NthRoot(..) => "root",
            Operation::AbsoluteValue(..) => "abs",
            Operation::Factorial(..) => "factorial",
            Operation::Percentage(..) => "percentage",
            Operation::NaturalLog(..) => "ln",
            Operation::Log10(..) => "log10",
            Operation::Sin(..) => "sin",
            Operation::Cos(..) => "cos",
            Operation::Tan(..) => "tan",
            Operation::DegreesToRadians(..) => "to_radians",
            Operation::RadiansToDegrees(..) => "to_degrees",
        }
    }
}

impl FromStr for Operation {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let Some(op) = tokens.next() else {
            return Err(ArithError::invalid_expression(s, "empty expression"));
        };
        let operands: Vec<&str> = tokens.collect();

        let real = |i: usize| -> Result<f64> {
            operands[i].parse::<f64>().map_err(|_| {
                ArithError::invalid_expression(s, format!("'{}' is not a number", operands[i]))
            })
        };
        let arity = |expected: usize| -> Result<()> {
            if operands.len() == expected {
                Ok(())
            } else {
                Err(ArithError::invalid_expression(
                    s,
                    format!("'{op}' takes {expected} operand(s), got {}", operands.len()),
                ))
            }
        };
        let unary = |f: fn(f64) -> Operation| -> Result<Operation> {
            arity(1)?;
            Ok(f(real(0)?))
        };
        let binary = |f: fn(f64, f64) -> Operation| -> Result<Operation> {
            arity(2)?;
            Ok(f(real(0)?, real(1)?))
        };

        match op.to_lowercase().as_str() {
            "add" | "+" => binary(Operation::Add),
            "subtract" | "sub" | "-" => binary(Operation::Subtract),
            "multiply" | "mul" | "*" | "×" => binary(Operation::Multiply),
            "divide" | "div" | "/" | "÷" => binary(Operation::Divide),
            "modulo" | "mod" | "%" => binary(Operation::Modulo),
            "power" | "pow" | "^" => binary(Operation::Power),
            "sqrt" | "√" => unary(Operation::Sqrt),
            "root" | "nth_root" => binary(Operation::NthRoot),
            "abs" => unary(Operation::AbsoluteValue),
            "factorial" | "fact" | "!" => {
                arity(1)?;
                let n = operands[0].parse::<i64>().map_err(|_| {
                    ArithError::invalid_expression(
                        s,
                        format!("'{}' is not an integer", operands[0]),
                    )
                })?;
                Ok(Operation::Factorial(n))
            }
            "percentage" | "percent" => binary(Operation::Percentage),
            "ln" => unary(Operation::NaturalLog),
            "log10" | "log" => unary(Operation::Log10),
            "sin" => unary(Operation::Sin),
            "cos" => unary(Operation::Cos),
            "tan" => unary(Operation::Tan),
            "to_radians" | "deg2rad" => unary(Operation::DegreesToRadians),
            "to_degrees" | "rad2deg" => unary(Operation::RadiansToDegrees),
            _ => Err(ArithError::invalid_expression(s, format!("unknown operator '{op}'"))),
        }
    }
}

impl Calculator {
    /// Evaluate a parsed operation with the same validation and logging as
    /// calling the corresponding method directly.
    pub fn apply(&mut self, operation: &Operation) -> Result<Value> {
        let value = match *operation {
            Operation::Add(a, b) => Value::Real(self.add(a, b)),
            Operation::Subtract(a, b) => Value::Real(self.subtract(a, b)),
            Operation::Multiply(a, b) => Value::Real(self.multiply(a, b)),
            Operation::Divide(a, b) => Value::Real(self.divide(a, b)?),
            Operation::Modulo(a, b) => Value::Real(self.modulo(a, b)?),
            Operation::Power(base, exponent) => Value::Real(self.power(base, exponent)),
            Operation::Sqrt(x) => Value::Real(self.sqrt(x)?),
            Operation::NthRoot(x, n) => Value::Real(self.nth_root(x, n)?),
            Operation::AbsoluteValue(x) => Value::Real(self.absolute_value(x)),
            Operation::Factorial(n) => Value::Integer(self.factorial(n)?),
            Operation::Percentage(p, total) => Value::Real(self.percentage(p, total)),
            Operation::NaturalLog(x) => Value::Real(self.natural_log(x)?),
            Operation::Log10(x) => Value::Real(self.log10(x)?),
            Operation::Sin(x) => Value::Real(self.sin(x)),
            Operation::Cos(x) => Value::Real(self.cos(x)),
            Operation::Tan(x) => Value::Real(self.tan(x)),
            Operation::DegreesToRadians(d) => Value::Real(self.degrees_to_radians(d)),
            Operation::RadiansToDegrees(r) => Value::Real(self.radians_to_degrees(r)),
        };
        Ok(value)
    }
}
