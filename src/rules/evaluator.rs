//! Integer expression evaluation
//!
//! Evaluates one side of an equation: integers joined by `+ - * /`, with
//! multiplication and division resolved before addition and subtraction, both
//! left to right. A single leading `+` or `-` is accepted as a unary sign.
//! There are no parentheses and no exponents.

use thiserror::Error;

/// Result of any division by zero
///
/// Two undefined sides compare equal, so `8/0=9/0` balances.
pub const UNDEFINED: i64 = i64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    fn apply(self, left: i64, right: i64) -> Result<i64, EvaluationError> {
        let value = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div if right == 0 => Some(UNDEFINED),
            Self::Div => left.checked_div(right),
        };
        value.ok_or(EvaluationError::Overflow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Operator(Operator),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("two numbers without an operator between them")]
    MissingOperator,
    #[error("integer overflow")]
    Overflow,
}

/// Evaluate an expression such as `12+3*4` or `-5+6`
///
/// Whitespace is ignored. Division truncates toward zero; division by zero
/// yields [`UNDEFINED`] rather than an error.
pub fn evaluate(expr: &str) -> Result<i64, EvaluationError> {
    let tokens = tokenize(expr)?;
    let tokens = resolve_products(&tokens)?;
    resolve_sums(&tokens)
}

fn tokenize(expr: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut digits = String::new();

    for ch in expr.chars().filter(|c| !c.is_whitespace()) {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        flush_number(&mut digits, &mut tokens)?;
        let op = Operator::from_char(ch).ok_or(EvaluationError::UnexpectedCharacter(ch))?;
        tokens.push(Token::Operator(op));
    }
    flush_number(&mut digits, &mut tokens)?;

    if tokens.is_empty() {
        return Err(EvaluationError::Empty);
    }
    Ok(tokens)
}

fn flush_number(digits: &mut String, tokens: &mut Vec<Token>) -> Result<(), EvaluationError> {
    if digits.is_empty() {
        return Ok(());
    }
    let value = digits.parse().map_err(|_| EvaluationError::Overflow)?;
    tokens.push(Token::Number(value));
    digits.clear();
    Ok(())
}

/// Collapse every `left (*|/) right` triple into its value in a single scan
fn resolve_products(tokens: &[Token]) -> Result<Vec<Token>, EvaluationError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter().copied();

    while let Some(token) = iter.next() {
        match token {
            Token::Operator(op) if op.is_multiplicative() => {
                let Some(Token::Number(left)) = out.pop() else {
                    return Err(EvaluationError::MissingOperand);
                };
                let Some(Token::Number(right)) = iter.next() else {
                    return Err(EvaluationError::MissingOperand);
                };
                out.push(Token::Number(op.apply(left, right)?));
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Fold the remaining `+`/`-` chain left to right, honouring a leading sign
fn resolve_sums(tokens: &[Token]) -> Result<i64, EvaluationError> {
    let mut iter = tokens.iter().copied();

    let mut total = match iter.next() {
        Some(Token::Number(n)) => n,
        Some(Token::Operator(sign @ (Operator::Add | Operator::Sub))) => match iter.next() {
            Some(Token::Number(n)) if sign == Operator::Sub => {
                n.checked_neg().ok_or(EvaluationError::Overflow)?
            }
            Some(Token::Number(n)) => n,
            _ => return Err(EvaluationError::MissingOperand),
        },
        Some(Token::Operator(_)) => return Err(EvaluationError::MissingOperand),
        None => return Err(EvaluationError::Empty),
    };

    while let Some(token) = iter.next() {
        let Token::Operator(op) = token else {
            return Err(EvaluationError::MissingOperator);
        };
        let Some(Token::Number(right)) = iter.next() else {
            return Err(EvaluationError::MissingOperand);
        };
        total = op.apply(total, right)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_number() {
        assert_eq!(evaluate("42"), Ok(42));
        assert_eq!(evaluate("007"), Ok(7));
    }

    #[test]
    fn addition_and_subtraction_left_to_right() {
        assert_eq!(evaluate("1+2+3"), Ok(6));
        assert_eq!(evaluate("10-4-3"), Ok(3));
        assert_eq!(evaluate("3-6+8"), Ok(5));
    }

    #[test]
    fn multiplication_before_addition() {
        assert_eq!(evaluate("2+3*4"), Ok(14));
        assert_eq!(evaluate("2*3+4"), Ok(10));
        assert_eq!(evaluate("20-6/2"), Ok(17));
    }

    #[test]
    fn multiplication_and_division_left_to_right() {
        assert_eq!(evaluate("8/4*4"), Ok(8));
        assert_eq!(evaluate("8*4/4"), Ok(8));
        assert_eq!(evaluate("100/10/5"), Ok(2));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(evaluate("7/2"), Ok(3));
        assert_eq!(evaluate("-7/2"), Ok(-3));
    }

    #[test]
    fn leading_unary_sign() {
        assert_eq!(evaluate("-1-2"), Ok(-3));
        assert_eq!(evaluate("+5+6"), Ok(11));
        assert_eq!(evaluate("-5*2"), Ok(-10));
        assert_eq!(evaluate("-3"), Ok(-3));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(evaluate(" 1 + 2 * 3 "), Ok(7));
    }

    #[test]
    fn division_by_zero_is_undefined() {
        assert_eq!(evaluate("8/0"), Ok(UNDEFINED));
        assert_eq!(evaluate("9/0"), evaluate("8/0"));
        assert_eq!(evaluate("0/0"), Ok(UNDEFINED));
    }

    #[test]
    fn arithmetic_on_undefined_overflows_or_moves_off_sentinel() {
        assert_eq!(evaluate("8/0+1"), Err(EvaluationError::Overflow));
        assert_eq!(evaluate("8/0*2"), Err(EvaluationError::Overflow));
        assert_eq!(evaluate("8/0-1"), Ok(UNDEFINED - 1));
    }

    #[test]
    fn empty_expression() {
        assert_eq!(evaluate(""), Err(EvaluationError::Empty));
        assert_eq!(evaluate("   "), Err(EvaluationError::Empty));
    }

    #[test]
    fn unexpected_characters() {
        assert_eq!(
            evaluate("2=2"),
            Err(EvaluationError::UnexpectedCharacter('='))
        );
        assert_eq!(
            evaluate("2^3"),
            Err(EvaluationError::UnexpectedCharacter('^'))
        );
    }

    #[test]
    fn malformed_sequences() {
        assert_eq!(evaluate("*5"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("12+"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("3*"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("1+*2"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("1*-2"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("1--2"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("-"), Err(EvaluationError::MissingOperand));
        assert_eq!(evaluate("+-1"), Err(EvaluationError::MissingOperand));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            evaluate("99999999999999999999"),
            Err(EvaluationError::Overflow)
        );
        assert_eq!(
            evaluate("9223372036854775807+1"),
            Err(EvaluationError::Overflow)
        );
    }

    #[test]
    fn tokens_are_tagged() {
        assert_eq!(
            tokenize("12*3").unwrap(),
            vec![
                Token::Number(12),
                Token::Operator(Operator::Mul),
                Token::Number(3),
            ]
        );
    }
}
