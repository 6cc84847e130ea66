//! Arithmetic expression evaluation
//!
//! A tokenizer plus recursive-descent evaluator over the character set
//! `{0-9, '.', '+', '-', '*', '/', '(', ')'}`. User text is never routed
//! through any general execution facility.
//!
//! Sanitization strictness is configurable: strict mode rejects input
//! containing characters outside the allowed set, lenient mode strips them
//! before parsing. ASCII whitespace is skipped in both modes.

use thiserror::Error;

/// Errors produced by the expression evaluator
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// Strict mode only: input contained a character outside the allowed set
    #[error("unsupported character '{0}' in expression")]
    UnsupportedChar(char),

    /// Nothing left to evaluate after tokenization
    #[error("expression is empty")]
    Empty,

    /// A number literal could not be parsed (e.g. "1.2.3")
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The token stream did not match the grammar
    #[error("unexpected '{0}' in expression")]
    UnexpectedToken(String),

    /// Input ended mid-expression (e.g. "1+" or unclosed parenthesis)
    #[error("unexpected end of expression")]
    UnexpectedEnd,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression.
///
/// Division by zero follows IEEE 754 float semantics and yields an
/// infinity rather than an error.
pub fn evaluate(input: &str, strict: bool) -> Result<f64, CalcError> {
    let tokens = tokenize(input, strict)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    match parser.peek() {
        None => Ok(value),
        Some(tok) => Err(CalcError::UnexpectedToken(describe(tok))),
    }
}

/// Format an evaluation result as the tool's response text.
///
/// f64 display prints integral values without a fractional part, so
/// `4.0` renders as `Result: 4`.
pub fn format_result(value: f64) -> String {
    format!("Result: {}", value)
}

fn tokenize(input: &str, strict: bool) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else if !strict && !is_allowed(d) {
                        // Lenient mode strips interior junk, so "1,000"
                        // merges to "1000" exactly as character-stripping
                        // on the raw string would.
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = literal
                    .parse()
                    .map_err(|_| CalcError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_whitespace() => {
                chars.next();
            }
            c => {
                if strict {
                    return Err(CalcError::UnsupportedChar(c));
                }
                chars.next();
            }
        }
    }

    Ok(tokens)
}

fn is_allowed(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

fn describe(tok: &Token) -> String {
    match tok {
        Token::Number(n) => n.to_string(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::Slash => "/".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Token::Minus => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Star => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.pos += 1;
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    // factor := ('+' | '-') factor | number | '(' expression ')'
    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::LParen) => {
                let value = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    Some(tok) => Err(CalcError::UnexpectedToken(describe(&tok))),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some(tok) => Err(CalcError::UnexpectedToken(describe(&tok))),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_addition() {
        assert_eq!(evaluate("2+2", true).unwrap(), 4.0);
        assert_eq!(format_result(evaluate("2+2", true).unwrap()), "Result: 4");
    }

    #[test]
    fn test_operator_precedence() {
        assert_eq!(evaluate("2+3*4", true).unwrap(), 14.0);
        assert_eq!(evaluate("2*3+4", true).unwrap(), 10.0);
        assert_eq!(evaluate("10-4/2", true).unwrap(), 8.0);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(evaluate("(2+3)*4", true).unwrap(), 20.0);
        assert_eq!(evaluate("2*(3+(4-1))", true).unwrap(), 12.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-3+5", true).unwrap(), 2.0);
        assert_eq!(evaluate("2*-3", true).unwrap(), -6.0);
        assert_eq!(evaluate("-(2+3)", true).unwrap(), -5.0);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("1.5+2.5", true).unwrap(), 4.0);
        assert_eq!(evaluate("0.1*10", true).unwrap(), 0.1 * 10.0);
        assert_eq!(format_result(evaluate("7/2", true).unwrap()), "Result: 3.5");
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(evaluate(" 2 + 2 ", true).unwrap(), 4.0);
    }

    #[test]
    fn test_division_by_zero_is_infinity() {
        let value = evaluate("1/0", true).unwrap();
        assert!(value.is_infinite());
        assert_eq!(format_result(value), "Result: inf");
    }

    #[test]
    fn test_strict_rejects_letters() {
        assert_eq!(
            evaluate("DROP TABLE x;1+1", true),
            Err(CalcError::UnsupportedChar('D'))
        );
        assert_eq!(evaluate("1,000+1", true), Err(CalcError::UnsupportedChar(',')));
    }

    #[test]
    fn test_lenient_strips_letters() {
        // Character-stripping leaves "1+1"
        assert_eq!(evaluate("DROP TABLE x;1+1", false).unwrap(), 2.0);
        // Stripped separators merge digits
        assert_eq!(evaluate("1,000+1", false).unwrap(), 1001.0);
        assert_eq!(evaluate("1 000+1", false).unwrap(), 1001.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate("", true), Err(CalcError::Empty));
        assert_eq!(evaluate("abc", false), Err(CalcError::Empty));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(evaluate("1+", true), Err(CalcError::UnexpectedEnd));
        assert_eq!(evaluate("(1+2", true), Err(CalcError::UnexpectedEnd));
        assert!(matches!(
            evaluate("1 2", true),
            Err(CalcError::UnexpectedToken(_))
        ));
        assert!(matches!(
            evaluate("*3", true),
            Err(CalcError::UnexpectedToken(_))
        ));
        assert_eq!(
            evaluate("1.2.3", true),
            Err(CalcError::InvalidNumber("1.2.3".to_string()))
        );
    }
}
