//! Domain entities and the value objects they are built from.

pub mod contact;
pub mod types;
