use std::io::{self, BufRead, Write};

use crate::calculator::{self, expr};
use crate::name;

/// Run the interactive loop. `name <full name>` analyzes a name; anything
/// else is evaluated as a calculator expression.
pub fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().expect("flush stdout");

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // Ctrl-D / EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match eval_line(trimmed) {
            Ok(output) => println!("{output}"),
            Err(e) => eprintln!("{e:?}"),
        }
    }
}

/// Evaluate one REPL line to its printed output.
fn eval_line(line: &str) -> Result<String, miette::Report> {
    if let Some(rest) = line.strip_prefix("name ") {
        return Ok(name::analyze_name(rest.trim()).to_string());
    }
    let (a, op, b) = expr::parse_expr(line)?;
    let result = op.apply(a, b)?;
    Ok(calculator::format_number(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_expressions() {
        assert_eq!(eval_line("2 + 3").unwrap(), "5");
        assert_eq!(eval_line("6 / 4").unwrap(), "1.5");
    }

    #[test]
    fn analyzes_names() {
        let output = eval_line("name James Bond").unwrap();
        assert!(output.contains("firstName: James"));
        assert!(output.contains("lastName: Bond"));
    }

    #[test]
    fn division_by_zero_reports_canonical_message() {
        let err = eval_line("6 / 0").unwrap_err();
        assert_eq!(err.to_string(), "Division by zero is not allowed");
    }

    #[test]
    fn garbage_reports_parse_error() {
        let err = eval_line("what even").unwrap_err();
        assert!(err.to_string().contains("expression error"));
    }
}
