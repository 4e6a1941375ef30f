//! Linear system assembly.
//!
//! Equations are kept in input order. Variables are indexed by first
//! appearance while scanning the equations, and equation `i` is the one used
//! to update variable `i`. That positional pairing is a precondition on the
//! input order: nothing here matches variables to their largest coefficient.

use crate::equation::Equation;
use crate::error::{SystemError, SystemResult};
use crate::parse::parse_equation;
use gs_core::{Real, Tolerances, VarId, nearly_equal};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Parsed equations plus the canonical variable order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    equations: Vec<Equation>,

    /// Canonical variable order (index -> symbol).
    variables: Vec<String>,

    /// Reverse lookup: symbol -> id.
    var_ids: HashMap<String, VarId>,

    /// Per-equation sparse rows, in term order.
    rows: Vec<Vec<(VarId, Real)>>,
}

impl LinearSystem {
    /// Parse and assemble equations from raw text, one string per equation.
    pub fn assemble<S: AsRef<str>>(sources: &[S]) -> SystemResult<Self> {
        let equations = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                parse_equation(source.as_ref())
                    .map_err(|source| SystemError::Parse { index, source })
            })
            .collect::<SystemResult<Vec<_>>>()?;
        Ok(Self::from_equations(equations))
    }

    /// Assemble already-parsed equations.
    pub fn from_equations(equations: Vec<Equation>) -> Self {
        let mut variables: Vec<String> = Vec::new();
        let mut var_ids: HashMap<String, VarId> = HashMap::new();

        for symbol in equations.iter().flat_map(Equation::symbols) {
            if !var_ids.contains_key(symbol) {
                var_ids.insert(symbol.to_string(), VarId::from_index(variables.len()));
                variables.push(symbol.to_string());
            }
        }

        let rows = equations
            .iter()
            .map(|eq| {
                eq.terms()
                    .iter()
                    .map(|t| (var_ids[t.symbol.as_str()], t.coefficient))
                    .collect()
            })
            .collect();

        debug!(
            equations = equations.len(),
            variables = variables.len(),
            "assembled linear system"
        );

        Self {
            equations,
            variables,
            var_ids,
            rows,
        }
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Variable symbols in canonical (first appearance) order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn num_equations(&self) -> usize {
        self.equations.len()
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Canonical id for a symbol.
    pub fn var_id(&self, symbol: &str) -> Option<VarId> {
        self.var_ids.get(symbol).copied()
    }

    /// Symbol for a canonical id (panics if out of bounds).
    pub fn symbol(&self, id: VarId) -> &str {
        &self.variables[id.index()]
    }

    /// Sparse row of equation `eq` (panics if out of bounds).
    pub fn row(&self, eq: usize) -> &[(VarId, Real)] {
        &self.rows[eq]
    }

    /// Coefficient of `var` in equation `eq`; 0.0 when the equation omits it.
    pub fn coefficient(&self, eq: usize, var: VarId) -> Real {
        self.rows[eq]
            .iter()
            .find(|(id, _)| *id == var)
            .map_or(0.0, |&(_, c)| c)
    }

    /// Right-hand side of equation `eq` (panics if out of bounds).
    pub fn constant(&self, eq: usize) -> Real {
        self.equations[eq].constant()
    }

    /// Check the one-equation-per-variable precondition.
    pub fn validate(&self) -> SystemResult<()> {
        if self.num_equations() != self.num_variables() {
            return Err(SystemError::Structural {
                equations: self.num_equations(),
                variables: self.num_variables(),
            });
        }
        Ok(())
    }

    /// Dense coefficient matrix, one row per equation, one column per variable.
    pub fn coefficient_matrix(&self) -> DMatrix<Real> {
        let mut a = DMatrix::zeros(self.num_equations(), self.num_variables());
        for (i, row) in self.rows.iter().enumerate() {
            for &(id, c) in row {
                a[(i, id.index())] = c;
            }
        }
        a
    }

    /// Right-hand side vector.
    pub fn constants(&self) -> DVector<Real> {
        DVector::from_iterator(
            self.num_equations(),
            self.equations.iter().map(Equation::constant),
        )
    }

    /// Residual `A*x - b` for values given in canonical order.
    pub fn residuals(&self, values: &[Real]) -> SystemResult<DVector<Real>> {
        if values.len() != self.num_variables() {
            return Err(SystemError::Dimension {
                what: "residual input",
                expected: self.num_variables(),
                actual: values.len(),
            });
        }
        let x = DVector::from_column_slice(values);
        Ok(self.coefficient_matrix() * x - self.constants())
    }

    /// Whether every equation's left-hand side matches its constant within `tol`.
    pub fn satisfied_by(&self, values: &[Real], tol: Tolerances) -> SystemResult<bool> {
        let residuals = self.residuals(values)?;
        Ok(residuals
            .iter()
            .zip(self.equations.iter().map(Equation::constant))
            .all(|(&r, k)| nearly_equal(k + r, k, tol)))
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, eq) in self.equations.iter().enumerate() {
            let target = self.variables.get(i).map_or("?", String::as_str);
            writeln!(f, "[{i}] {target}: {eq}")?;
        }
        Ok(())
    }
}
