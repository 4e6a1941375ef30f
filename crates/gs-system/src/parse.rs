//! Equation text parser.
//!
//! Input is whitespace-tokenized standard form: `10x + y - 3z = 12`.
//! Tokens drive a small state machine:
//!
//! ```text
//! ExpectTerm --sign--> ExpectTerm(after sign) --term--> ExpectOperator
//! ExpectTerm(after sign) --sign--> ExpectTerm(after sign)
//! ExpectOperator --sign--> ExpectTerm(after sign)
//! ExpectOperator --'='--> ExpectConstant --number--> Done
//! ```
//!
//! A standalone `-` negates the coefficient of the following term, a
//! standalone `+` is dropped. Consecutive signs combine, so `x + - y`
//! reads as `x - y`. Within a term token the leading run of
//! `[0-9.-]` is the coefficient and the rest is the variable symbol.

use crate::equation::{Equation, Term};
use crate::error::{ParseError, ParseResult};
use gs_core::{Real, ensure_finite};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn apply(self, value: Real) -> Real {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }

    fn then(self, next: Sign) -> Sign {
        if self == next { Sign::Plus } else { Sign::Minus }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Sign(Sign),
    Equals,
    Word(&'a str),
}

impl<'a> Token<'a> {
    fn classify(raw: &'a str) -> Self {
        match raw {
            "+" => Token::Sign(Sign::Plus),
            "-" => Token::Sign(Sign::Minus),
            "=" => Token::Equals,
            word => Token::Word(word),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    /// Waiting for a term. `signed` is true once an explicit sign was consumed.
    ExpectTerm { sign: Sign, signed: bool },
    ExpectOperator,
    ExpectConstant,
    Done(Real),
}

/// Parse one equation in standard form.
pub fn parse_equation(source: &str) -> ParseResult<Equation> {
    let malformed = |what: &'static str| ParseError::MalformedEquation {
        equation: source.to_string(),
        what,
    };

    let mut terms: Vec<Term> = Vec::new();
    let mut state = State::ExpectTerm {
        sign: Sign::Plus,
        signed: false,
    };

    for raw in source.split_whitespace() {
        state = match (state, Token::classify(raw)) {
            (State::ExpectTerm { sign, .. }, Token::Sign(next)) => State::ExpectTerm {
                sign: sign.then(next),
                signed: true,
            },
            (State::ExpectTerm { signed: true, .. }, Token::Equals) => {
                return Err(malformed("operator has no term before '='"));
            }
            (State::ExpectTerm { signed: false, .. }, Token::Equals) => {
                return Err(malformed("no terms before '='"));
            }
            (State::ExpectTerm { sign, .. }, Token::Word(word)) => {
                let term = scan_term(word)?;
                terms.push(Term {
                    coefficient: sign.apply(term.coefficient),
                    ..term
                });
                State::ExpectOperator
            }
            (State::ExpectOperator, Token::Sign(sign)) => State::ExpectTerm { sign, signed: true },
            (State::ExpectOperator, Token::Equals) => State::ExpectConstant,
            (State::ExpectOperator, Token::Word(_)) => {
                return Err(ParseError::MalformedTerm {
                    token: raw.to_string(),
                    what: "missing '+' or '-' before term",
                });
            }
            (State::ExpectConstant, Token::Word(word)) => State::Done(scan_constant(word)?),
            (State::ExpectConstant, _) => {
                return Err(malformed("expected a single constant after '='"));
            }
            (State::Done(_), _) => {
                return Err(malformed("unexpected token after the constant"));
            }
        };
    }

    match state {
        State::Done(constant) => Ok(Equation::new(terms, constant)?),
        State::ExpectConstant => Err(malformed("missing constant after '='")),
        State::ExpectTerm { signed: true, .. } => Err(malformed("trailing operator")),
        State::ExpectTerm { .. } | State::ExpectOperator => Err(malformed("missing '='")),
    }
}

fn is_coefficient_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '.'
}

/// Split `-3x` into coefficient `-3` and symbol `x`.
fn scan_term(token: &str) -> ParseResult<Term> {
    let malformed = |what: &'static str| ParseError::MalformedTerm {
        token: token.to_string(),
        what,
    };

    let split = token
        .find(|c: char| !is_coefficient_char(c))
        .unwrap_or(token.len());
    let (digits, symbol) = token.split_at(split);

    if symbol.is_empty() {
        return Err(malformed("missing variable symbol"));
    }
    if !symbol.chars().all(char::is_alphabetic) {
        return Err(malformed("variable symbol must be alphabetic"));
    }

    let coefficient = match digits {
        "" => 1.0,
        "-" => -1.0,
        text => text
            .parse::<Real>()
            .map_err(|_| malformed("invalid coefficient"))?,
    };

    Ok(Term::new(symbol, ensure_finite(coefficient, "coefficient")?))
}

fn scan_constant(token: &str) -> ParseResult<Real> {
    let value = token
        .parse::<Real>()
        .map_err(|_| ParseError::MalformedTerm {
            token: token.to_string(),
            what: "invalid constant",
        })?;
    Ok(ensure_finite(value, "constant")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coefficients(eq: &Equation) -> Vec<(&str, Real)> {
        eq.terms()
            .iter()
            .map(|t| (t.symbol.as_str(), t.coefficient))
            .collect()
    }

    #[test]
    fn mixed_signs_and_omitted_coefficients() {
        let eq = parse_equation("x - y + 7z = 3").unwrap();
        assert_eq!(coefficients(&eq), [("x", 1.0), ("y", -1.0), ("z", 7.0)]);
        assert_eq!(eq.constant(), 3.0);
    }

    #[test]
    fn omitted_coefficients_default_to_one() {
        let eq = parse_equation("10x + y + z = 12").unwrap();
        assert_eq!(coefficients(&eq), [("x", 10.0), ("y", 1.0), ("z", 1.0)]);
        assert_eq!(eq.constant(), 12.0);
    }

    #[test]
    fn separated_and_concatenated_negatives_agree() {
        let separated = parse_equation("x - 3y = 1").unwrap();
        let concatenated = parse_equation("x + -3y = 1").unwrap();
        assert_eq!(separated.coefficient("y"), Some(-3.0));
        assert_eq!(separated, concatenated);
    }

    #[test]
    fn bare_negated_variable() {
        assert_eq!(parse_equation("- x + y = 0").unwrap().coefficient("x"), Some(-1.0));
        assert_eq!(parse_equation("-x + y = 0").unwrap().coefficient("x"), Some(-1.0));
        assert_eq!(parse_equation("y - x = 0").unwrap().coefficient("x"), Some(-1.0));
    }

    #[test]
    fn minus_sign_before_negative_coefficient_flips_it() {
        let eq = parse_equation("x - -2y = 5").unwrap();
        assert_eq!(eq.coefficient("y"), Some(2.0));
    }

    #[test]
    fn decimal_coefficients_and_constants() {
        let eq = parse_equation("2.5x - 0.5y = -1.25").unwrap();
        assert_eq!(coefficients(&eq), [("x", 2.5), ("y", -0.5)]);
        assert_eq!(eq.constant(), -1.25);
    }

    #[test]
    fn multi_letter_symbols() {
        let eq = parse_equation("3alpha + beta = 2").unwrap();
        assert_eq!(coefficients(&eq), [("alpha", 3.0), ("beta", 1.0)]);
    }

    #[test]
    fn missing_equals_is_malformed_equation() {
        let err = parse_equation("x + y").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedEquation {
                what: "missing '='",
                ..
            }
        ));
    }

    #[test]
    fn missing_constant_is_malformed_equation() {
        let err = parse_equation("x + y =").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEquation { .. }));
    }

    #[test]
    fn digits_after_letters_is_malformed_term() {
        let err = parse_equation("x2 + y = 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedTerm {
                token: "x2".to_string(),
                what: "variable symbol must be alphabetic",
            }
        );
    }

    #[test]
    fn number_without_symbol_is_malformed_term() {
        let err = parse_equation("x + 4 = 1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTerm { what: "missing variable symbol", .. }));
    }

    #[test]
    fn garbage_coefficient_is_malformed_term() {
        let err = parse_equation("3-2x = 1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTerm { what: "invalid coefficient", .. }));
    }

    #[test]
    fn adjacent_terms_need_an_operator() {
        let err = parse_equation("x y = 1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTerm { .. }));
    }

    #[test]
    fn consecutive_signs_combine() {
        let eq = parse_equation("x + - y = 1").unwrap();
        assert_eq!(coefficients(&eq), [("x", 1.0), ("y", -1.0)]);
        assert_eq!(parse_equation("x - - 2y = 1").unwrap().coefficient("y"), Some(2.0));
        assert_eq!(parse_equation("x - + y = 1").unwrap().coefficient("y"), Some(-1.0));
        assert_eq!(parse_equation("+ - x = 1").unwrap().coefficient("x"), Some(-1.0));
    }

    #[test]
    fn sign_without_term_is_malformed() {
        assert!(parse_equation("x + = 1").is_err());
        assert!(parse_equation("x + - = 1").is_err());
        assert!(parse_equation("x = 1 -").is_err());
    }

    #[test]
    fn extra_tokens_after_constant() {
        let err = parse_equation("x = 1 2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEquation { .. }));
    }

    #[test]
    fn empty_left_hand_side() {
        let err = parse_equation("= 4").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedEquation {
                what: "no terms before '='",
                ..
            }
        ));
    }

    #[test]
    fn infinite_constant_rejected() {
        let err = parse_equation("x = inf").unwrap_err();
        assert!(matches!(err, ParseError::Numeric(_)));
    }

    #[test]
    fn repeated_variable_rejected() {
        let err = parse_equation("x + 2x = 1").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateVariable { .. }));
    }

    #[test]
    fn display_reparses_to_same_equation() {
        let eq = parse_equation("-x - 3y + 0.5z = -2").unwrap();
        assert_eq!(parse_equation(&eq.to_string()).unwrap(), eq);
    }

    proptest! {
        #[test]
        fn parsing_is_pure(
            coeffs in prop::collection::vec(-50i32..50, 1..4),
            constant in -100i32..100,
        ) {
            let symbols = ["a", "b", "c"];
            let lhs: Vec<String> = coeffs
                .iter()
                .zip(symbols)
                .map(|(c, s)| format!("{c}{s}"))
                .collect();
            let text = format!("{} = {}", lhs.join(" + "), constant);

            let first = parse_equation(&text);
            let second = parse_equation(&text);
            prop_assert_eq!(&first, &second);

            let eq = first.unwrap();
            for (c, s) in coeffs.iter().zip(symbols) {
                prop_assert_eq!(eq.coefficient(s), Some(f64::from(*c)));
            }
        }
    }
}
