use winnow::combinator::{alt, opt};
use winnow::error::ContextError;
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::take_while;

use crate::calculator::BinaryOp;
use crate::error::ExprError;

type Input<'a> = LocatingSlice<&'a str>;

fn spaces(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

fn number(input: &mut Input<'_>) -> ModalResult<f64> {
    let sign = opt('-').parse_next(input)?;
    let whole: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let mut lexeme = String::new();
    if sign.is_some() {
        lexeme.push('-');
    }
    lexeme.push_str(whole);

    let checkpoint = input.checkpoint();
    let dot_result: Result<char, winnow::error::ErrMode<ContextError>> = '.'.parse_next(input);
    if dot_result.is_ok() {
        match take_while::<_, _, ContextError>(1.., |c: char| c.is_ascii_digit()).parse_next(input)
        {
            Ok(frac) => {
                lexeme.push('.');
                lexeme.push_str(frac);
            }
            Err(_) => {
                input.reset(&checkpoint);
            }
        }
    }

    lexeme
        .parse::<f64>()
        .map_err(|_| winnow::error::ErrMode::Cut(ContextError::new()))
}

fn operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    alt((
        '+'.value(BinaryOp::Add),
        '-'.value(BinaryOp::Subtract),
        '*'.value(BinaryOp::Multiply),
        '/'.value(BinaryOp::Divide),
    ))
    .parse_next(input)
}

fn expression(input: &mut Input<'_>) -> ModalResult<(f64, BinaryOp, f64)> {
    spaces(input)?;
    let a = number(input)?;
    spaces(input)?;
    let op = operator(input)?;
    spaces(input)?;
    let b = number(input)?;
    spaces(input)?;
    Ok((a, op, b))
}

/// Parse a calculator line of the form `NUMBER OP NUMBER`.
pub fn parse_expr(line: &str) -> Result<(f64, BinaryOp, f64), ExprError> {
    let mut input = LocatingSlice::new(line);
    let parsed = expression(&mut input).map_err(|_| error_at(line, input.current_token_start()))?;
    if !input.is_empty() {
        return Err(error_at(line, input.current_token_start()));
    }
    Ok(parsed)
}

fn error_at(line: &str, offset: usize) -> ExprError {
    let len = line.len().saturating_sub(offset).min(1);
    ExprError::parse("expected `NUMBER OP NUMBER`", offset, len).with_source_code("input", line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2 + 3", (2.0, BinaryOp::Add, 3.0))]
    #[case("5 - 3", (5.0, BinaryOp::Subtract, 3.0))]
    #[case("2*3", (2.0, BinaryOp::Multiply, 3.0))]
    #[case("6 / 3", (6.0, BinaryOp::Divide, 3.0))]
    #[case("  2.5 * 4  ", (2.5, BinaryOp::Multiply, 4.0))]
    #[case("-1 - -2", (-1.0, BinaryOp::Subtract, -2.0))]
    #[case("007 + 0.5", (7.0, BinaryOp::Add, 0.5))]
    fn parses_valid_expressions(#[case] line: &str, #[case] want: (f64, BinaryOp, f64)) {
        assert_eq!(parse_expr(line).unwrap(), want);
    }

    #[rstest]
    #[case("")]
    #[case("2")]
    #[case("2 +")]
    #[case("+ 2 3")]
    #[case("2 ? 3")]
    #[case("2 + 3 extra")]
    #[case("abc + 1")]
    #[case("2 + 3.")]
    fn rejects_invalid_expressions(#[case] line: &str) {
        assert!(parse_expr(line).is_err());
    }

    #[test]
    fn trailing_dot_without_digits_is_rejected_at_the_dot() {
        // `3.` backtracks to `3`, leaving the dot as trailing input.
        let err = parse_expr("1 + 3.").unwrap_err();
        assert!(err.to_string().contains("expected"));
    }
}
