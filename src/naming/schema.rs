use serde_json::{Map, Value};

use crate::diagnostics::{MISSING_NAME_KEY, NAME_NOT_STRING, NAMESPACE_NOT_STRING, NamingError};

use super::builder::{NameSetter, PartialName};

pub const NAME_KEY: &str = "name";
pub const NAMESPACE_KEY: &str = "namespace";

/// Reads the `name` and optional `namespace` keys of a parsed schema node.
///
/// The name must be a non-empty string and the namespace, when present, a string.
/// Neither value is checked against the character rules; chain
/// [`ValidateName`](super::ValidateName) for that.
#[derive(Debug, Clone, Copy)]
pub struct FromSchemaFields<'a>(pub &'a Map<String, Value>);

impl NameSetter for FromSchemaFields<'_> {
    fn apply(&self, name: &mut PartialName) -> Result<(), NamingError> {
        let value = self
            .0
            .get(NAME_KEY)
            .ok_or_else(|| NamingError::make(&MISSING_NAME_KEY, &[]))?;

        match value {
            Value::String(literal) if !literal.is_empty() => name.set_name(literal.as_str()),
            other => {
                return Err(NamingError::make(&NAME_NOT_STRING, &[describe_json(other)]));
            }
        }

        if let Some(value) = self.0.get(NAMESPACE_KEY) {
            let Value::String(namespace) = value else {
                return Err(NamingError::make(
                    &NAMESPACE_NOT_STRING,
                    &[describe_json(value)],
                ));
            };
            name.set_namespace(namespace.as_str());
        }

        Ok(())
    }
}

fn describe_json(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a JSON boolean",
        Value::Number(_) => "a JSON number",
        Value::String(s) if s.is_empty() => "an empty string",
        Value::String(_) => "a JSON string",
        Value::Array(_) => "a JSON array",
        Value::Object(_) => "a JSON object",
    }
}
