//! Schema loading: JSON document to an ordered list of [Register]s.

use std::{fs, path::Path};

use log::info;

use crate::{errors::LoadError, register::Register, serde::SchemaDef};

/// Reads the schema file at `path`. Every returned register has a raw value of 0.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Register>, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let registers = from_str(&json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "loaded {} registers from {}",
        registers.len(),
        path.display()
    );

    Ok(registers)
}

/// Parses a schema document held in memory.
pub fn from_str(json: &str) -> Result<Vec<Register>, serde_json::Error> {
    let def: SchemaDef = serde_json::from_str(json)?;
    Ok(def.registers.into_iter().map(Register::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::Field;

    #[test]
    fn test_from_str_empty() {
        let registers = from_str(r#"{ "registers": [] }"#).unwrap();
        assert!(registers.is_empty());
    }

    #[test]
    fn test_from_str_keeps_declaration_order() {
        let json = r#"{
            "registers": [
                {
                    "name": "STATUS",
                    "address": 68,
                    "fields": [
                        { "name": "READY", "mask": 128, "description": "ready flag" },
                        { "name": "COUNT", "mask": 15, "description": "pending count" }
                    ]
                },
                { "name": "CTRL", "address": 64, "fields": [] }
            ]
        }"#;

        let registers = from_str(json).unwrap();
        assert_eq!(
            registers,
            vec![
                Register::new(
                    "STATUS",
                    0x44,
                    vec![
                        Field::new("READY", 0x80, "ready flag"),
                        Field::new("COUNT", 0xf, "pending count"),
                    ]
                ),
                Register::new("CTRL", 0x40, vec![]),
            ]
        );
    }

    #[test]
    fn test_from_str_ignores_extra_keys() {
        let json = r#"{
            "device": "demo",
            "registers": [
                { "name": "CTRL", "address": 64, "access": "rw", "fields": [] }
            ]
        }"#;
        assert_eq!(from_str(json).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_registers_key() {
        let err = from_str(r#"{ "regs": [] }"#).unwrap_err();
        assert!(err.to_string().contains("missing field `registers`"));
    }

    #[test]
    fn test_missing_field_mask() {
        let json = r#"{
            "registers": [
                {
                    "name": "CTRL",
                    "address": 64,
                    "fields": [ { "name": "ENABLE", "description": "enable bit" } ]
                }
            ]
        }"#;
        let err = from_str(json).unwrap_err();
        assert!(err.to_string().contains("missing field `mask`"));
    }

    #[test]
    fn test_mask_wrong_type() {
        let json = r#"{
            "registers": [
                {
                    "name": "CTRL",
                    "address": 64,
                    "fields": [ { "name": "ENABLE", "mask": "0x1", "description": "enable bit" } ]
                }
            ]
        }"#;
        assert!(from_str(json).unwrap_err().is_data());
    }

    #[test]
    fn test_address_out_of_range() {
        let json = r#"{ "registers": [ { "name": "CTRL", "address": 4294967296, "fields": [] } ] }"#;
        assert!(from_str(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(from_str(r#"{ "registers": [ "#).unwrap_err().is_eof());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("does/not/exist/schema.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist/schema.json"));
    }
}
