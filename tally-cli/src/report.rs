use crate::OutputFormat;
use serde::Serialize;
use tally_arith::{ArithError, Calculator, Operation, OperationRecord, Value};

/// Why an expression produced no value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The operation was understood but its arguments are outside its domain
    Domain,
    /// The text could not be parsed into an operation
    Input,
}

impl From<&ArithError> for ErrorKind {
    fn from(err: &ArithError) -> Self {
        if err.is_domain_error() {
            ErrorKind::Domain
        } else {
            ErrorKind::Input
        }
    }
}

/// Outcome of evaluating one expression
#[derive(Debug, Serialize)]
pub struct ExpressionResult {
    pub expression: String,
    /// Canonical operator name, when the expression parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl ExpressionResult {
    fn evaluate(calc: &mut Calculator, expression: String) -> Self {
        let parsed = expression.parse::<Operation>();
        let operation = parsed.as_ref().ok().map(Operation::name);
        match parsed.and_then(|op| calc.apply(&op)) {
            Ok(value) => Self {
                expression,
                operation,
                value: Some(value),
                error: None,
                error_kind: None,
            },
            Err(e) => Self {
                expression,
                operation,
                value: None,
                error: Some(e.to_string()),
                error_kind: Some(ErrorKind::from(&e)),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub results: Vec<ExpressionResult>,
    pub history_enabled: bool,
    pub history: Vec<OperationRecord>,
}

impl EvaluationReport {
    /// Evaluate every expression on `calc` in order. A failing expression is
    /// reported and does not stop the rest.
    pub fn evaluate_all<I>(calc: &mut Calculator, expressions: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let results = expressions
            .into_iter()
            .map(|expression| ExpressionResult::evaluate(calc, expression))
            .collect();

        Self {
            results,
            history_enabled: calc.config().history_enabled,
            history: calc.history(),
        }
    }

    pub fn print(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(self)?);
            }
            OutputFormat::Summary => {
                for result in &self.results {
                    match (&result.value, &result.error) {
                        (Some(value), _) => println!("{} = {}", result.expression, value),
                        (None, Some(error)) => {
                            println!("{} -> Error: {}", result.expression, error)
                        }
                        (None, None) => {}
                    }
                }
                println!();
                if !self.history_enabled {
                    println!("History disabled");
                    return Ok(());
                }
                println!("History ({} records):", self.history.len());
                for (i, record) in self.history.iter().enumerate() {
                    println!("  {}. {}", i + 1, record);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_arith::ArithConfig;

    #[test]
    fn test_evaluate_all_continues_after_errors() {
        let mut calc = Calculator::new();
        let report = EvaluationReport::evaluate_all(
            &mut calc,
            ["add 10 5", "divide 10 0", "bogus", "sqrt 16"].map(String::from),
        );

        assert_eq!(report.results.len(), 4);
        assert_eq!(report.results[0].value, Some(Value::Real(15.0)));
        assert_eq!(
            report.results[1].error.as_deref(),
            Some("divide: cannot divide by zero")
        );
        assert!(report.results[2].error.is_some());
        assert_eq!(report.results[3].value, Some(Value::Real(4.0)));

        let history: Vec<&str> = report.history.iter().map(|r| r.as_str()).collect();
        assert_eq!(history, vec!["10.00 + 5.00 = 15.00", "√16.00 = 4.00"]);
    }

    #[test]
    fn test_operation_names_and_error_kinds() {
        let mut calc = Calculator::new();
        let report = EvaluationReport::evaluate_all(
            &mut calc,
            ["pow 2 3", "÷ 1 0", "bogus 1"].map(String::from),
        );

        let names: Vec<_> = report.results.iter().map(|r| r.operation).collect();
        assert_eq!(names, vec![Some("power"), Some("divide"), None]);

        let kinds: Vec<_> = report.results.iter().map(|r| r.error_kind).collect();
        assert_eq!(
            kinds,
            vec![None, Some(ErrorKind::Domain), Some(ErrorKind::Input)]
        );
    }

    #[test]
    fn test_json_shape() {
        let mut calc = Calculator::new();
        let expressions = ["factorial 5", "ln 0", "power -8 0.5"].map(String::from);
        let report = EvaluationReport::evaluate_all(&mut calc, expressions);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["results"][0]["value"], 120);
        assert_eq!(json["results"][0]["operation"], "factorial");
        assert!(json["results"][0].get("error").is_none());
        assert!(json["results"][1].get("value").is_none());
        assert_eq!(json["results"][1]["error_kind"], "domain");
        assert_eq!(json["results"][2]["value"], "NaN");
        assert_eq!(json["history_enabled"], true);
        assert_eq!(json["history"][0], "5! = 120");
    }

    #[test]
    fn test_history_disabled_is_reported() {
        let mut calc = Calculator::with_config(ArithConfig::default().with_history(false));
        let report = EvaluationReport::evaluate_all(&mut calc, ["add 1 2".to_string()]);
        assert!(!report.history_enabled);
        assert!(report.history.is_empty());
        assert_eq!(report.results[0].value, Some(Value::Real(3.0)));
    }
}
