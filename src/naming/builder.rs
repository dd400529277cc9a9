//! Step-wise construction of [`Name`] values.
//!
//! A name is assembled by applying an ordered list of [`NameSetter`] steps to an empty
//! [`PartialName`]. Each step sets or validates one raw field. The first failing step
//! aborts the build, so a partially built name never escapes. Once every step has
//! succeeded the raw fields are qualified into the final name.

use serde_json::{Map, Value};

use crate::diagnostics::{EMPTY_NAME, NamingError};

use super::{Name, NAMESPACE_SEPARATOR, schema::FromSchemaFields, validate};

/// Raw name fragments collected while the steps run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialName {
    name: String,
    namespace: String,
    enclosing_namespace: String,
}

impl PartialName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn enclosing_namespace(&self) -> &str {
        &self.enclosing_namespace
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = namespace.into();
    }

    pub fn set_enclosing_namespace(&mut self, namespace: impl Into<String>) {
        self.enclosing_namespace = namespace.into();
    }

    /// Qualifies the raw fields into a finished [`Name`].
    pub fn finish(self) -> Result<Name, NamingError> {
        if self.name.is_empty() {
            return Err(NamingError::make(&EMPTY_NAME, &[]));
        }
        let qualified = qualify(&self.name, &self.namespace, &self.enclosing_namespace);
        Ok(Name::from_parts(
            qualified,
            self.namespace,
            self.enclosing_namespace,
        ))
    }
}

/// Resolves the qualified string for a raw name.
///
/// A name that already contains a separator is used verbatim. Otherwise an explicit
/// namespace wins over the enclosing one, and with neither the name stays unqualified.
pub fn qualify(name: &str, namespace: &str, enclosing_namespace: &str) -> String {
    let prefix = if validate::is_qualified(name) {
        ""
    } else if !namespace.is_empty() {
        namespace
    } else {
        enclosing_namespace
    };

    if prefix.is_empty() {
        return name.to_string();
    }

    let mut qualified = String::with_capacity(prefix.len() + 1 + name.len());
    qualified.push_str(prefix);
    qualified.push(NAMESPACE_SEPARATOR);
    qualified.push_str(name);
    qualified
}

/// One configuration step of a name build.
pub trait NameSetter {
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError>;
}

impl<F> NameSetter for F
where
    F: Fn(&mut PartialName) -> Result<(), NamingError>,
{
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError> {
        self(name)
    }
}

/// Sets the raw name from a literal after checking its local part.
///
/// An embedded namespace is kept verbatim and is not validated.
#[derive(Debug, Clone, Copy)]
pub struct FromLiteralName<'a>(pub &'a str);

impl NameSetter for FromLiteralName<'_> {
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError> {
        validate::check_qualified_name(self.0)?;
        name.set_name(self.0);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FromNamespace<'a>(pub &'a str);

impl NameSetter for FromNamespace<'_> {
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError> {
        name.set_namespace(self.0);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FromEnclosingNamespace<'a>(pub &'a str);

impl NameSetter for FromEnclosingNamespace<'_> {
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError> {
        name.set_enclosing_namespace(self.0);
        Ok(())
    }
}

/// Checks the raw name set by an earlier step, the same way [`FromLiteralName`] does.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateName;

impl NameSetter for ValidateName {
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError> {
        validate::check_qualified_name(name.name())
    }
}

/// Applies `steps` in order to an empty [`PartialName`] and qualifies the result.
pub fn build(steps: &[&dyn NameSetter]) -> Result<Name, NamingError> {
    let mut partial = PartialName::new();
    for step in steps {
        step.apply(&mut partial)?;
    }
    partial.finish()
}

/// Fluent front end over [`build`].
///
/// # Example
/// ```
/// use fullname::naming::Name;
///
/// let name = Name::builder()
///     .name("Foo")
///     .enclosing_namespace("com.example")
///     .build()
///     .unwrap();
/// assert_eq!(name.canonical_string(), "com.example.Foo");
/// ```
#[derive(Default)]
pub struct NameBuilder<'a> {
    steps: Vec<Box<dyn NameSetter + 'a>>,
}

impl<'a> NameBuilder<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn name(self, literal: &'a str) -> Self {
        self.step(FromLiteralName(literal))
    }

    pub fn namespace(self, namespace: &'a str) -> Self {
        self.step(FromNamespace(namespace))
    }

    pub fn enclosing_namespace(self, namespace: &'a str) -> Self {
        self.step(FromEnclosingNamespace(namespace))
    }

    pub fn schema(self, fields: &'a Map<String, Value>) -> Self {
        self.step(FromSchemaFields(fields))
    }

    pub fn validate(self) -> Self {
        self.step(ValidateName)
    }

    pub fn step(mut self, step: impl NameSetter + 'a) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn build(self) -> Result<Name, NamingError> {
        let steps: Vec<&dyn NameSetter> = self.steps.iter().map(|step| step.as_ref()).collect();
        build(&steps)
    }
}
