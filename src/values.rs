//! Merging raw register values from a `name -> integer` JSON object into a loaded schema.

use std::{collections::HashSet, fs, path::Path};

use log::{debug, info};
use serde_json::{Map, Value};

use crate::{errors::LoadError, register::Register};

/// How the values document is reconciled with the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Unknown keys are ignored and registers without a value stay at 0.
    #[default]
    Lenient,
    /// Unknown keys and registers without a value are errors.
    Strict,
}

/// Reads the values file at `path` and overwrites `raw_value` of every register named in it.
///
/// The document must be a JSON object. Arrays and scalars are rejected with
/// [LoadError::Parse] rather than treated as an empty mapping, even in
/// [MergeMode::Lenient].
pub fn apply_values(
    registers: &mut [Register],
    path: impl AsRef<Path>,
    mode: MergeMode,
) -> Result<(), LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values: Map<String, Value> =
        serde_json::from_str(&json).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let merged = apply_map(registers, &values, mode)?;
    info!("applied {} values from {}", merged, path.display());

    Ok(())
}

/// Merges an already parsed values object. Returns how many registers received a value.
///
/// In [MergeMode::Strict] every check runs before the first register is touched.
pub fn apply_map(
    registers: &mut [Register],
    values: &Map<String, Value>,
    mode: MergeMode,
) -> Result<usize, LoadError> {
    let known: HashSet<&str> = registers.iter().map(|reg| reg.name.as_str()).collect();

    for key in values.keys() {
        if !known.contains(key.as_str()) {
            if mode == MergeMode::Strict {
                return Err(LoadError::UnknownRegister(key.clone()));
            }
            debug!("ignoring value for unknown register {key}");
        }
    }

    let mut updates = Vec::with_capacity(registers.len());
    for (index, register) in registers.iter().enumerate() {
        match values.get(&register.name) {
            Some(value) => updates.push((index, to_raw(&register.name, value)?)),
            None if mode == MergeMode::Strict => {
                return Err(LoadError::MissingValue(register.name.clone()));
            }
            None => debug!(
                "no value for register {}, keeping 0x{:x}",
                register.name, register.raw_value
            ),
        }
    }

    for &(index, raw) in &updates {
        let register = &mut registers[index];
        register.raw_value = raw;
        debug!("register {} = 0x{:x}", register.name, raw);
    }

    Ok(updates.len())
}

/// Integers keep their low 32 bits; negative values wrap as two's complement.
fn to_raw(register: &str, value: &Value) -> Result<u32, LoadError> {
    if let Some(raw) = value.as_u64() {
        return Ok(raw as u32);
    }

    if let Some(raw) = value.as_i64() {
        return Ok(raw as u32);
    }

    Err(LoadError::InvalidValue {
        register: register.to_string(),
        found: value.to_string(),
    })
}
