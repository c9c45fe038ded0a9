//! # tally-arith
//!
//! An arithmetic service over IEEE-754 doubles with domain validation and an
//! optional, append-only log of human-readable operation records.
//!
//! ## Quick Start
//!
//! ```
//! use tally_arith::{ArithError, Calculator};
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(10.0, 5.0), 15.0);
//! assert_eq!(calc.divide(10.0, 5.0).unwrap(), 2.0);
//! assert!(matches!(calc.sqrt(-4.0), Err(ArithError::InvalidDomain { .. })));
//!
//! let history: Vec<String> = calc.history().into_iter().map(String::from).collect();
//! assert_eq!(history, vec!["10.00 + 5.00 = 15.00", "10.00 ÷ 5.00 = 2.00"]);
//! ```
//!
//! Expressions can also be parsed from text and applied:
//!
//! ```
//! use tally_arith::{Calculator, Operation, Value};
//!
//! let mut calc = Calculator::new();
//! let op: Operation = "factorial 5".parse().unwrap();
//! assert_eq!(calc.apply(&op).unwrap(), Value::Integer(120));
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: the service itself
//! - [`history`]: operation records and the log
//! - [`operation`]: expression parsing and dispatch
//! - [`config`]: service configuration, loadable from TOML
//! - [`error`]: error types and result handling

pub mod calculator;
pub mod config;
mod display;
pub mod error;
pub mod history;
pub mod operation;

pub use calculator::{Calculator, MAX_FACTORIAL_INPUT};
pub use config::{ArithConfig, ArithConfigBuilder};
pub use error::{ArithError, Result};
pub use history::{OperationLog, OperationRecord};
pub use operation::{Operation, Value};
