//! Field extraction: turns merged [Register]s into their decoded field values.

use crate::{
    bits::{extract_bits, lowest_set_bit},
    errors::DecodeError,
    register::{Field, Register},
};

/// A field value right-shifted out of its mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub name: String,
    pub value: u32,
    pub description: String,
}

/// A register with every field decoded, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRegister {
    pub name: String,
    pub address: u32,
    pub raw_value: u32,
    pub fields: Vec<DecodedField>,
}

/// Extracts the bits of `raw` selected by `mask`, shifted down to bit 0.
///
/// Returns `None` when `mask` is zero. See [decode_field] for the error-reporting variant.
pub fn extract(raw: u32, mask: u32) -> Option<u32> {
    lowest_set_bit(mask).map(|shift| extract_bits(raw, mask, shift))
}

/// Like [extract], but a zero mask is reported as [DecodeError::ZeroMask] for the named field.
pub fn decode_field(register: &Register, field: &Field) -> Result<u32, DecodeError> {
    extract(register.raw_value, field.mask).ok_or_else(|| DecodeError::ZeroMask {
        register: register.name.clone(),
        field: field.name.clone(),
    })
}

/// Decodes every field of `register`. Fails on the first zero mask.
pub fn decode_register(register: &Register) -> Result<DecodedRegister, DecodeError> {
    let mut fields = Vec::with_capacity(register.fields.len());

    for field in &register.fields {
        fields.push(DecodedField {
            name: field.name.clone(),
            value: decode_field(register, field)?,
            description: field.description.clone(),
        });
    }

    Ok(DecodedRegister {
        name: register.name.clone(),
        address: register.address,
        raw_value: register.raw_value,
        fields,
    })
}

/// Decodes all registers, preserving order. Nothing is returned if any field fails.
pub fn decode_all(registers: &[Register]) -> Result<Vec<DecodedRegister>, DecodeError> {
    registers.iter().map(decode_register).collect()
}
