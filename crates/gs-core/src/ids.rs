use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a variable in a linear system.
///
/// The wrapped value is the variable's canonical position plus one, so
/// `Option<VarId>` stays the same size as `VarId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(NonZeroU32);

impl VarId {
    /// Create an id from a 0-based canonical position.
    pub fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new)
            .expect("variable index fits in u32");
        Self(raw)
    }

    /// Recover the 0-based canonical position.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarId({})", self.index())
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
