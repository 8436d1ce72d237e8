//! Plain-text rendering of decoded registers.

use std::io::{self, Write};

use crate::decode::DecodedRegister;

/// Writes one block per register, each followed by a blank line. Hex values are lowercase, unpadded.
pub fn write_report<W: Write>(out: &mut W, registers: &[DecodedRegister]) -> io::Result<()> {
    for register in registers {
        writeln!(out, "Register: {} (0x{:x})", register.name, register.address)?;
        writeln!(out, "RAW Value: 0x{:x}", register.raw_value)?;

        for field in &register.fields {
            writeln!(
                out,
                " {}: 0x{:x} ({})",
                field.name, field.value, field.description
            )?;
        }

        writeln!(out)?;
    }

    out.flush()
}
