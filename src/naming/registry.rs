use std::collections::HashMap;

use crate::diagnostics::{DUPLICATE_NAME, NamingError, UNKNOWN_NAME};

use super::builder::{FromEnclosingNamespace, FromLiteralName, build};
use super::Name;

/// Named types of one schema document, keyed by qualified name.
///
/// Names are kept in registration order. A qualified name can be registered once;
/// references are resolved against the namespace of the node that makes them.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: Vec<Name>,
    index: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` and returns its position, or fails when the qualified name is
    /// already taken.
    pub fn register(&mut self, name: Name) -> Result<usize, NamingError> {
        if self.index.contains_key(name.canonical_string()) {
            return Err(NamingError::make(
                &DUPLICATE_NAME,
                &[name.canonical_string()],
            ));
        }

        let position = self.names.len();
        self.index.insert(name.canonical_string().to_string(), position);
        self.names.push(name);
        Ok(position)
    }

    pub fn get(&self, qualified: &str) -> Option<&Name> {
        self.index.get(qualified).map(|&position| &self.names[position])
    }

    pub fn position(&self, qualified: &str) -> Option<usize> {
        self.index.get(qualified).copied()
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.index.contains_key(qualified)
    }

    /// Resolves a type reference made inside `enclosing_namespace`.
    ///
    /// The reference is qualified like any other name: a dotted reference is looked up
    /// verbatim, a bare one inside the enclosing namespace.
    pub fn resolve(&self, reference: &str, enclosing_namespace: &str) -> Result<&Name, NamingError> {
        let wanted = build(&[
            &FromLiteralName(reference),
            &FromEnclosingNamespace(enclosing_namespace),
        ])?;

        self.get(wanted.canonical_string())
            .ok_or_else(|| NamingError::make(&UNKNOWN_NAME, &[wanted.canonical_string()]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Name> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
