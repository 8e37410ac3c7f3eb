//! Numeric storage behind all variables.

use std::ops::Index;

use crate::Variable;

/// Ordered, index-addressable slots, one per declared variable.
///
/// Slots are appended by the [`SymbolTable`](crate::SymbolTable) and
/// mutated in place by assignment; they never shrink or move.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    slots: Vec<f64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot and return its index.
    #[inline]
    pub(crate) fn push(&mut self, value: f64) -> usize {
        let index = self.slots.len();
        self.slots.push(value);
        index
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value of slot `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.slots.get(index).copied()
    }

    /// Mutable access to a variable's slot.
    ///
    /// # Panics
    /// If `var` was minted by a symbol table that does not own this
    /// environment and its index is out of range.
    #[inline]
    pub fn slot_mut(&mut self, var: Variable) -> &mut f64 {
        &mut self.slots[var.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.slots.iter().copied()
    }
}

impl From<Vec<f64>> for Environment {
    fn from(slots: Vec<f64>) -> Self {
        Environment { slots }
    }
}

impl Index<usize> for Environment {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.slots[index]
    }
}

impl Index<Variable> for Environment {
    type Output = f64;

    #[inline]
    fn index(&self, var: Variable) -> &f64 {
        &self.slots[var.index()]
    }
}
