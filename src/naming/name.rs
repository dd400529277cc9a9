use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
};

use serde_json::{Map, Value};

use crate::diagnostics::NamingError;

use super::builder::{
    FromEnclosingNamespace, FromLiteralName, FromNamespace, NameBuilder, ValidateName, build,
};
use super::schema::FromSchemaFields;
use super::validate;

/// A resolved, fully-qualified name for a record, enum, or fixed type.
///
/// Names are created once by the builder and never change afterwards. Equality,
/// ordering, and hashing look at the qualified string only, so two names built from
/// different fragments are the same name when they resolve to the same string.
#[derive(Debug, Clone)]
pub struct Name {
    qualified: String,
    namespace: String,
    enclosing_namespace: String,
}

impl Name {
    pub(crate) fn from_parts(
        qualified: String,
        namespace: String,
        enclosing_namespace: String,
    ) -> Self {
        Self {
            qualified,
            namespace,
            enclosing_namespace,
        }
    }

    pub fn builder<'a>() -> NameBuilder<'a> {
        NameBuilder::new()
    }

    /// Builds a name from a literal that may already be dot-qualified.
    pub fn new(literal: &str) -> Result<Self, NamingError> {
        build(&[&FromLiteralName(literal)])
    }

    /// Builds `local` inside `namespace`, falling back to `enclosing_namespace` when
    /// `namespace` is empty.
    pub fn with_namespace(
        local: &str,
        namespace: &str,
        enclosing_namespace: &str,
    ) -> Result<Self, NamingError> {
        build(&[
            &FromLiteralName(local),
            &FromNamespace(namespace),
            &FromEnclosingNamespace(enclosing_namespace),
        ])
    }

    /// Builds the name of a schema node from its `name` and `namespace` keys, inheriting
    /// `enclosing_namespace` from the parent node. The name taken from the node is
    /// validated.
    pub fn from_schema(
        fields: &Map<String, Value>,
        enclosing_namespace: &str,
    ) -> Result<Self, NamingError> {
        build(&[
            &FromSchemaFields(fields),
            &ValidateName,
            &FromEnclosingNamespace(enclosing_namespace),
        ])
    }

    /// The qualified name, used for display and as the type-identity key.
    #[inline]
    pub fn canonical_string(&self) -> &str {
        &self.qualified
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.qualified
    }

    /// Everything before the last separator of the qualified name, or `""`.
    ///
    /// This is not necessarily the namespace the name was built with: the enclosing
    /// namespace may have been used, or the literal may have carried its own. Nested
    /// schema nodes inherit this value as their enclosing namespace.
    pub fn derived_namespace(&self) -> &str {
        validate::namespace_of(&self.qualified)
    }

    /// The segment after the last separator.
    pub fn local_name(&self) -> &str {
        validate::local_name(&self.qualified)
    }

    /// The explicit namespace fragment supplied at construction.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The inherited namespace fragment supplied at construction.
    pub fn enclosing_namespace(&self) -> &str {
        &self.enclosing_namespace
    }

    pub fn equals(&self, other: &Name) -> bool {
        self.qualified == other.qualified
    }

    pub fn into_string(self) -> String {
        self.qualified
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Name {}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.qualified == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.qualified == *other
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified.hash(state);
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.qualified.cmp(&other.qualified)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.qualified
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.qualified
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

impl std::str::FromStr for Name {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.qualified)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = <String as serde::Deserialize>::deserialize(deserializer)?;
        Name::new(&literal).map_err(serde::de::Error::custom)
    }
}
