use indexmap::IndexMap;
use std::collections::HashSet;

/// Declarations accumulated during one translation.
///
/// Names keep the slot of their first insertion; the map order is the
/// emission order of everything but the root record.
#[derive(Debug, Default)]
pub struct Registry {
    declarations: IndexMap<String, String>,
    pending: HashSet<String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` resolves as a named reference: declared or still being declared.
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name) || self.pending.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations.get(name).map(String::as_str)
    }

    /// Mark a record as being declared so its fields may refer back to it.
    pub fn reserve(&mut self, name: &str) {
        self.pending.insert(name.to_string());
    }

    /// Register `declaration` under `name`, replacing any previous text.
    ///
    /// A replaced declaration keeps its original position.
    pub fn declare(&mut self, name: &str, declaration: String) {
        self.pending.remove(name);
        if self
            .declarations
            .insert(name.to_string(), declaration)
            .is_some()
        {
            tracing::debug!(name, "replaced existing declaration");
        } else {
            tracing::debug!(name, "registered declaration");
        }
    }

    /// Register the output of `render` unless `name` is already known.
    ///
    /// Returns `true` when a new declaration was added.
    pub fn declare_once<F>(&mut self, name: &str, render: F) -> bool
    where
        F: FnOnce() -> String,
    {
        if self.contains(name) {
            tracing::trace!(name, "reusing existing declaration");
            return false;
        }
        self.declare(name, render());
        true
    }

    /// Remove and return the declaration for `name`, preserving the order of the rest.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.declarations.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in discovery order.
    pub fn into_declarations(self) -> impl Iterator<Item = String> {
        self.declarations.into_values()
    }
}
