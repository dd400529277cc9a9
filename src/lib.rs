pub mod diagnostics;
pub mod naming;

pub use diagnostics::NamingError;
pub use naming::{Name, NameBuilder, NameRegistry};
