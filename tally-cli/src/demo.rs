//! Demonstration walk-through of the calculator.

use std::fmt::Display;
use std::io::{self, Write};
use tally_arith::Calculator;

/// Number of trailing history records shown at the end of the demo.
const RECENT_RECORDS: usize = 5;

fn show<W, T>(out: &mut W, label: &str, result: tally_arith::Result<T>) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    match result {
        Ok(value) => writeln!(out, "{label} = {value}"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

pub fn run<W: Write>(calc: &mut Calculator, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== Calculator ===")?;
    writeln!(out)?;

    writeln!(out, "--- Basic Operations ---")?;
    writeln!(out, "10 + 5 = {}", calc.add(10.0, 5.0))?;
    writeln!(out, "10 - 5 = {}", calc.subtract(10.0, 5.0))?;
    writeln!(out, "10 × 5 = {}", calc.multiply(10.0, 5.0))?;
    show(out, "10 ÷ 5", calc.divide(10.0, 5.0))?;
    show(out, "10 mod 3", calc.modulo(10.0, 3.0))?;

    writeln!(out)?;
    writeln!(out, "--- Powers and Roots ---")?;
    writeln!(out, "2 ^ 3 = {}", calc.power(2.0, 3.0))?;
    writeln!(out, "5 ^ 2 = {}", calc.power(5.0, 2.0))?;
    show(out, "√16", calc.sqrt(16.0))?;
    show(out, "√25", calc.sqrt(25.0))?;
    show(out, "∛27", calc.nth_root(27.0, 3.0))?;

    writeln!(out)?;
    writeln!(out, "--- Other Operations ---")?;
    writeln!(out, "|-15| = {}", calc.absolute_value(-15.0))?;
    show(out, "5!", calc.factorial(5))?;
    writeln!(out, "20% of 150 = {}", calc.percentage(20.0, 150.0))?;
    let ln = calc.natural_log(10.0).map(|v| format!("{v:.4}"));
    show(out, "ln(10)", ln)?;
    show(out, "log₁₀(100)", calc.log10(100.0))?;

    writeln!(out)?;
    writeln!(out, "--- Trigonometry ---")?;
    let angle = calc.degrees_to_radians(45.0);
    writeln!(out, "sin(45°) = {:.4}", calc.sin(angle))?;
    writeln!(out, "cos(45°) = {:.4}", calc.cos(angle))?;
    writeln!(out, "tan(45°) = {:.4}", calc.tan(angle))?;

    writeln!(out)?;
    writeln!(out, "--- Error Handling ---")?;
    show(out, "10 ÷ 0", calc.divide(10.0, 0.0))?;
    show(out, "√-4", calc.sqrt(-4.0))?;
    show(out, "(-1)!", calc.factorial(-1))?;

    writeln!(out)?;
    writeln!(out, "--- Operation History ---")?;
    let log = calc.log();
    writeln!(out, "Total operations: {}", log.len())?;
    writeln!(out)?;
    writeln!(out, "Last {RECENT_RECORDS} operations:")?;
    for (position, record) in log.tail(RECENT_RECORDS) {
        writeln!(out, "{position}. {record}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_arith::ArithConfig;

    fn run_to_string(calc: &mut Calculator) -> String {
        let mut buffer = Vec::new();
        run(calc, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_demo_output() {
        let mut calc = Calculator::new();
        let output = run_to_string(&mut calc);

        assert!(output.contains("10 + 5 = 15\n"));
        assert!(
            output.contains("∛27 = 3\n") || output.contains("∛27 = 3.0000000000000004\n")
        );
        assert!(output.contains("5! = 120\n"));
        assert!(output.contains("ln(10) = 2.3026\n"));
        assert!(output.contains("tan(45°) = 1.0000\n"));
        assert!(output.contains("Error: divide: cannot divide by zero\n"));
        assert!(
            output.contains("Error: sqrt: cannot take the square root of a negative number\n")
        );
        assert!(
            output.contains("Error: factorial: cannot take the factorial of a negative number\n")
        );
        assert!(output.contains("Total operations: 18\n"));
        assert!(output.ends_with(
            "14. ln(10.00) = 2.30\n\
             15. log₁₀(100.00) = 2.00\n\
             16. sin(0.79) = 0.71\n\
             17. cos(0.79) = 0.71\n\
             18. tan(0.79) = 1.00\n"
        ));
        assert_eq!(calc.history().len(), 18);
    }

    #[test]
    fn test_demo_without_history() {
        let mut calc = Calculator::with_config(ArithConfig::default().with_history(false));
        let output = run_to_string(&mut calc);
        assert!(output.contains("Total operations: 0\n"));
        assert!(output.ends_with("Last 5 operations:\n"));
    }
}
