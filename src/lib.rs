//! # regcraft
//!
//! Decodes raw hardware register values into named bit-fields using a
//! declarative JSON schema.
//!
//! A schema lists registers (name, address, fields); each field is located by
//! a bit mask, possibly non-contiguous. A second document gives the raw value
//! of each register by name. Field values are extracted as
//! `(raw & mask) >> mask.trailing_zeros()` and printed in schema order.
//!
//! ## Example
//!
//! ```
//! use regcraft::{decode, report, schema, values};
//!
//! let mut registers = schema::from_str(r#"{
//!     "registers": [{
//!         "name": "CTRL",
//!         "address": 64,
//!         "fields": [
//!             { "name": "ENABLE", "mask": 1, "description": "enable bit" },
//!             { "name": "MODE", "mask": 6, "description": "mode select" }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let raw = serde_json::from_str(r#"{ "CTRL": 5 }"#).unwrap();
//! values::apply_map(&mut registers, &raw, values::MergeMode::Lenient).unwrap();
//!
//! let decoded = decode::decode_all(&registers).unwrap();
//! let mut out = Vec::new();
//! report::write_report(&mut out, &decoded).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Register: CTRL (0x40)\nRAW Value: 0x5\n ENABLE: 0x1 (enable bit)\n MODE: 0x2 (mode select)\n\n"
//! );
//! ```

use std::{io::Write, path::PathBuf};

pub mod bits;
pub mod decode;
pub mod errors;
pub mod register;
pub mod report;
pub mod schema;
pub mod serde;
pub mod values;

pub use errors::Error;

/// Resolved inputs for one decoding run.
#[derive(Debug, Clone)]
pub struct Options {
    pub schema: PathBuf,
    pub values: PathBuf,
    pub mode: values::MergeMode,
}

/// Loads the schema, merges the values, decodes every field and writes the report to `out`.
///
/// All registers are decoded before anything is written, so a failing field leaves `out` untouched.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<(), Error> {
    let mut registers = schema::load(&options.schema)?;
    values::apply_values(&mut registers, &options.values, options.mode)?;

    let decoded = decode::decode_all(&registers)?;
    report::write_report(out, &decoded)?;

    Ok(())
}
