//! Typed equation records.

use crate::error::{ParseError, ParseResult};
use crate::parse::parse_equation;
use gs_core::Real;
use std::fmt;
use std::str::FromStr;

/// One left-hand-side term: a variable symbol with its coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// Non-empty alphabetic variable symbol
    pub symbol: String,
    /// Coefficient (1.0 when omitted in source text)
    pub coefficient: Real,
}

impl Term {
    pub fn new(symbol: impl Into<String>, coefficient: Real) -> Self {
        Self {
            symbol: symbol.into(),
            coefficient,
        }
    }
}

/// A linear equation `c1*v1 + c2*v2 + ... = constant`.
///
/// Terms keep their source order. Symbols are unique within one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    terms: Vec<Term>,
    constant: Real,
}

impl Equation {
    /// Build an equation, rejecting repeated symbols.
    pub fn new(terms: Vec<Term>, constant: Real) -> ParseResult<Self> {
        for (i, term) in terms.iter().enumerate() {
            if terms[..i].iter().any(|t| t.symbol == term.symbol) {
                return Err(ParseError::DuplicateVariable {
                    symbol: term.symbol.clone(),
                });
            }
        }
        Ok(Self { terms, constant })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn constant(&self) -> Real {
        self.constant
    }

    /// Coefficient of `symbol`, or `None` when the equation does not mention it.
    pub fn coefficient(&self, symbol: &str) -> Option<Real> {
        self.terms
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| t.coefficient)
    }

    /// Symbols in source order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.symbol.as_str())
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_equation(s)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let magnitude = if i == 0 {
                term.coefficient
            } else {
                let op = if term.coefficient < 0.0 { '-' } else { '+' };
                write!(f, " {op} ")?;
                term.coefficient.abs()
            };
            if magnitude == 1.0 {
                write!(f, "{}", term.symbol)?;
            } else if magnitude == -1.0 {
                write!(f, "-{}", term.symbol)?;
            } else {
                write!(f, "{}{}", magnitude, term.symbol)?;
            }
        }
        write!(f, " = {}", self.constant)
    }
}
