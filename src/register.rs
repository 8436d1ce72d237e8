//! In-memory registers and the bit-fields they are made of.

/// A named sub-range of a register's bits, located by a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label printed in the report.
    pub name: String,
    /// Set bits mark the bit positions belonging to this field. May be non-contiguous.
    pub mask: u32,
    /// Free-form text printed next to the decoded value.
    pub description: String,
}

impl Field {
    pub fn new(name: impl Into<String>, mask: u32, description: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            mask,
            description: description.into(),
        }
    }
}

impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            mask: value.mask,
            description: value.description,
        }
    }
}

/// A named, addressed register and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    /// Key used to look the register up in the values document.
    pub name: String,
    /// Display only.
    pub address: u32,
    /// Starts at 0; overwritten once by [crate::values::apply_values].
    pub raw_value: u32,
    pub fields: Vec<Field>,
}

impl Register {
    pub fn new(name: impl Into<String>, address: u32, fields: Vec<Field>) -> Self {
        Register {
            name: name.into(),
            address,
            raw_value: 0,
            fields,
        }
    }

    /// First field declared with `name`, if any.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl From<crate::serde::RegisterDef> for Register {
    fn from(value: crate::serde::RegisterDef) -> Self {
        Register::new(
            value.name,
            value.address,
            value.fields.into_iter().map(Into::into).collect(),
        )
    }
}
