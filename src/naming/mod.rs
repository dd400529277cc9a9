//! Names of record, enum, and fixed types.

mod builder;
mod name;
mod registry;
mod schema;
pub mod validate;

pub use builder::{
    FromEnclosingNamespace, FromLiteralName, FromNamespace, NameBuilder, NameSetter,
    PartialName, ValidateName, build, qualify,
};
pub use name::Name;
pub use registry::NameRegistry;
pub use schema::{FromSchemaFields, NAME_KEY, NAMESPACE_KEY};
pub use validate::check_name;

/// Separates namespace segments in a qualified name.
pub const NAMESPACE_SEPARATOR: char = '.';
