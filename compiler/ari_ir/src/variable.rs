//! Variable handles.

use std::fmt;

/// Handle to one slot of an [`Environment`](crate::Environment).
///
/// Variables are minted only by [`SymbolTable::variable`](crate::SymbolTable::variable),
/// so a handle's index is always in bounds for the environment owned by the
/// table that created it. Using a handle with a different table's
/// environment is a caller error that the type does not catch.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Variable(usize);

impl Variable {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Variable(index)
    }

    /// Slot index in the owning environment.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({})", self.0)
    }
}
