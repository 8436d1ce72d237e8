//! JSON-deserializable schema description.
//!
//! These types describe the *shape* of a schema file and are converted into
//! [`crate::register::Register`]s by [`crate::schema::load`]. Keys not listed
//! here are ignored; every listed key is required.

use serde::Deserialize;

/// Top-level schema document.
#[derive(Debug, Deserialize, Clone)]
pub struct SchemaDef {
    /// Registers in the order they are reported.
    pub registers: Vec<RegisterDef>,
}

/// Description of a single register.
#[derive(Debug, Deserialize, Clone)]
pub struct RegisterDef {
    /// Name matched against the keys of the values document.
    pub name: String,
    /// Register address; must fit in 32 bits.
    pub address: u32,
    /// Bit-fields in the order they are reported.
    pub fields: Vec<FieldDef>,
}

/// Description of a single bit-field.
#[derive(Debug, Deserialize, Clone)]
pub struct FieldDef {
    pub name: String,
    /// Bit mask selecting the field; must fit in 32 bits.
    pub mask: u32,
    pub description: String,
}
