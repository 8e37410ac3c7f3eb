//! Symbol table: the only place variables come from.

use rustc_hash::FxHashMap;

use crate::{Environment, Variable};

/// Owns the [`Environment`] and the name of every slot in it.
///
/// Names and slots are index-aligned: `names.len() == env.len()` holds after
/// every call. Variables minted here index this table's environment and no
/// other; mixing handles across tables is not detected.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    env: Environment,
    /// Latest variable declared under each name.
    by_name: FxHashMap<String, Variable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable with an initial value.
    ///
    /// Names need not be unique; each call allocates a fresh slot.
    #[must_use]
    pub fn variable(&mut self, name: impl Into<String>, initial: f64) -> Variable {
        let name = name.into();
        let var = Variable::new(self.env.push(initial));
        tracing::trace!(%name, index = var.index(), initial, "declared variable");
        self.by_name.insert(name.clone(), var);
        self.names.push(name);
        var
    }

    /// Name `var` was declared with.
    ///
    /// # Panics
    /// If `var` came from a different, larger table.
    pub fn name_of(&self, var: Variable) -> &str {
        &self.names[var.index()]
    }

    /// Name of slot `index`, if it exists.
    pub fn get_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Most recently declared variable called `name`.
    pub fn lookup(&self, name: &str) -> Option<Variable> {
        self.by_name.get(name).copied()
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}

#[cfg(test)]
mod tests;
