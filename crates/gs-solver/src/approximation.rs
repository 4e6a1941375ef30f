//! Approximation vector and per-sweep snapshots.

use gs_core::{Real, VarId};
use std::fmt;
use std::sync::Arc;

/// Current estimate for every variable of a system.
///
/// Values are indexed by [`VarId`]; the symbol list is shared between the
/// solver's working vector and every snapshot taken from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Approximation {
    variables: Arc<[String]>,
    values: Vec<Real>,
}

impl Approximation {
    /// All-zero starting point.
    pub fn zeros(variables: Arc<[String]>) -> Self {
        let values = vec![0.0; variables.len()];
        Self { variables, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Variable symbols in canonical order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Values in canonical order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Estimate for a variable id (panics if out of bounds).
    pub fn value(&self, id: VarId) -> Real {
        self.values[id.index()]
    }

    /// Estimate for a symbol.
    pub fn get(&self, symbol: &str) -> Option<Real> {
        self.variables
            .iter()
            .position(|s| s == symbol)
            .map(|i| self.values[i])
    }

    /// `(symbol, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.variables
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub(crate) fn set(&mut self, id: VarId, value: Real) {
        self.values[id.index()] = value;
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Approximation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (symbol, value) in self.iter() {
            map.serialize_entry(symbol, &value)?;
        }
        map.end()
    }
}

/// The approximation as it stood after a completed sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// 1-based sweep number
    pub iteration: usize,
    pub approximation: Approximation,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iteration {} is {}", self.iteration, self.approximation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz() -> Arc<[String]> {
        ["x", "y", "z"].map(String::from).into()
    }

    #[test]
    fn zeros_covers_every_variable() {
        let approx = Approximation::zeros(xyz());
        assert_eq!(approx.len(), 3);
        assert!(approx.values().iter().all(|v| *v == 0.0));
        assert_eq!(approx.get("y"), Some(0.0));
        assert_eq!(approx.get("w"), None);
    }

    #[test]
    fn snapshot_report_format() {
        let mut approx = Approximation::zeros(xyz());
        approx.set(VarId::from_index(0), 1.2);
        approx.set(VarId::from_index(1), 1.06);
        approx.set(VarId::from_index(2), 0.948);
        let snapshot = Snapshot {
            iteration: 1,
            approximation: approx,
        };
        assert_eq!(
            snapshot.to_string(),
            "Iteration 1 is {x: 1.2, y: 1.06, z: 0.948}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serializes_as_map() {
        let mut approx = Approximation::zeros(xyz());
        approx.set(VarId::from_index(2), 2.5);
        let snapshot = Snapshot {
            iteration: 3,
            approximation: approx,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"iteration":3,"approximation":{"x":0.0,"y":0.0,"z":2.5}}"#
        );
    }
}
