//! The arithmetic service.
//!
//! [`Calculator`] performs one operation per call, validates domain constraints
//! before computing anything, and appends a formatted [`OperationRecord`] to its
//! [`OperationLog`] for every successful logged operation. A rejected call
//! leaves the log untouched.
//!
//! Logged operations take `&mut self` and there is no internal locking. To
//! share one calculator between threads, wrap it in a `Mutex`.

use crate::config::ArithConfig;
use crate::display;
use crate::error::{ArithError, Result};
use crate::history::{OperationLog, OperationRecord};

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Arithmetic service with an optional operation log.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: ArithConfig,
    log: OperationLog,
}

impl Calculator {
    /// Create a calculator with the default configuration (history enabled,
    /// two decimals in records).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ArithConfig) -> Self {
        Self {
            config,
            log: OperationLog::new(),
        }
    }

    pub fn config(&self) -> &ArithConfig {
        &self.config
    }

    /// Append a record. `format` receives a function that renders an operand
    /// or result at the configured display precision, and only runs when
    /// history is enabled.
    fn record<F>(&mut self, format: F)
    where
        F: FnOnce(&dyn Fn(f64) -> String) -> String,
    {
        if self.config.history_enabled {
            let precision = self.config.display_precision;
            let text = format(&|value| display::fixed(value, precision));
            self.log.push(OperationRecord::new(text));
        }
    }

    fn reject<T>(err: ArithError) -> Result<T> {
        tracing::warn!(error = %err, "Rejected operation");
        Err(err)
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let r = a + b;
        self.record(|f| format!("{} + {} = {}", f(a), f(b), f(r)));
        r
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let r = a - b;
        self.record(|f| format!("{} - {} = {}", f(a), f(b), f(r)));
        r
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let r = a * b;
        self.record(|f| format!("{} × {} = {}", f(a), f(b), f(r)));
        r
    }

    /// `a / b`. Fails with [`ArithError::DivisionByZero`] when `b` is zero.
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Self::reject(ArithError::division_by_zero("divide"));
        }
        let r = a / b;
        self.record(|f| format!("{} ÷ {} = {}", f(a), f(b), f(r)));
        Ok(r)
    }

    /// Floating point remainder of `a / b`, with the sign of `a`.
    pub fn modulo(&mut self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Self::reject(ArithError::division_by_zero("modulo"));
        }
        let r = a % b;
        self.record(|f| format!("{} mod {} = {}", f(a), f(b), f(r)));
        Ok(r)
    }

    /// `base` raised to `exponent`. Edge cases follow IEEE-754, so a negative
    /// base with a fractional exponent yields NaN rather than an error.
    pub fn power(&mut self, base: f64, exponent: f64) -> f64 {
        let r = base.powf(exponent);
        self.record(|f| format!("{} ^ {} = {}", f(base), f(exponent), f(r)));
        r
    }

    pub fn sqrt(&mut self, x: f64) -> Result<f64> {
        if x < 0.0 {
            return Self::reject(ArithError::invalid_domain(
                "sqrt",
                "cannot take the square root of a negative number",
            ));
        }
        let r = x.sqrt();
        self.record(|f| format!("√{} = {}", f(x), f(r)));
        Ok(r)
    }

    /// `x^(1/n)`. Even roots of negative numbers are rejected; odd roots of
    /// negative numbers follow `powf` and produce NaN.
    pub fn nth_root(&mut self, x: f64, n: f64) -> Result<f64> {
        if x < 0.0 && n % 2.0 == 0.0 {
            return Self::reject(ArithError::invalid_domain(
                "nth_root",
                "cannot take an even root of a negative number",
            ));
        }
        let r = x.powf(1.0 / n);
        // The root index is shown without decimals
        let index = display::fixed(n, 0);
        self.record(|f| format!("{index}√{} = {}", f(x), f(r)));
        Ok(r)
    }

    pub fn absolute_value(&mut self, x: f64) -> f64 {
        let r = x.abs();
        self.record(|f| format!("|{}| = {}", f(x), f(r)));
        r
    }

    /// `n!` for `0 <= n <= 20`.
    ///
    /// Negative input fails with [`ArithError::InvalidDomain`]; anything above
    /// [`MAX_FACTORIAL_INPUT`] fails with [`ArithError::OutOfRange`] because the
    /// result would overflow an `i64`.
    pub fn factorial(&mut self, n: i64) -> Result<i64> {
        if n < 0 {
            return Self::reject(ArithError::invalid_domain(
                "factorial",
                "cannot take the factorial of a negative number",
            ));
        }
        if n > MAX_FACTORIAL_INPUT {
            return Self::reject(ArithError::OutOfRange {
                operation: "factorial",
                value: n,
                max: MAX_FACTORIAL_INPUT,
            });
        }
        let r: i64 = (2..=n).product();
        self.record(|_| format!("{n}! = {r}"));
        Ok(r)
    }

    /// `percent` percent of `total`.
    pub fn percentage(&mut self, percent: f64, total: f64) -> f64 {
        let r = (percent / 100.0) * total;
        self.record(|f| format!("{}% of {} = {}", f(percent), f(total), f(r)));
        r
    }

    pub fn natural_log(&mut self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            return Self::reject(ArithError::invalid_domain(
                "natural_log",
                "logarithm is only defined for positive numbers",
            ));
        }
        let r = x.ln();
        self.record(|f| format!("ln({}) = {}", f(x), f(r)));
        Ok(r)
    }

    pub fn log10(&mut self, x: f64) -> Result<f64> {
        if x <= 0.0 {
            return Self::reject(ArithError::invalid_domain(
                "log10",
                "logarithm is only defined for positive numbers",
            ));
        }
        let r = x.log10();
        self.record(|f| format!("log₁₀({}) = {}", f(x), f(r)));
        Ok(r)
    }

    pub fn sin(&mut self, radians: f64) -> f64 {
        let r = radians.sin();
        self.record(|f| format!("sin({}) = {}", f(radians), f(r)));
        r
    }

    pub fn cos(&mut self, radians: f64) -> f64 {
        let r = radians.cos();
        self.record(|f| format!("cos({}) = {}", f(radians), f(r)));
        r
    }

    pub fn tan(&mut self, radians: f64) -> f64 {
        let r = radians.tan();
        self.record(|f| format!("tan({}) = {}", f(radians), f(r)));
        r
    }

    // Unit conversions are never logged.

    pub fn degrees_to_radians(&self, degrees: f64) -> f64 {
        degrees.to_radians()
    }

    pub fn radians_to_degrees(&self, radians: f64) -> f64 {
        radians.to_degrees()
    }

    /// Copy of the operation log, oldest record first.
    pub fn history(&self) -> Vec<OperationRecord> {
        self.log.snapshot()
    }

    /// Read-only view of the log, for callers that want positions or counts
    /// without copying.
    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    pub fn clear_history(&mut self) {
        self.log.clear();
    }
}
