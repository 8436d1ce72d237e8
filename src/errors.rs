//! Error types for loading schema/values documents and decoding fields.

use std::{fmt, io, path::PathBuf};

/// Errors produced while reading the schema or the values document.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The document is not valid JSON, lacks a required key, or has a value of the wrong type.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A values entry for a known register is not an integer.
    InvalidValue { register: String, found: String },
    /// Strict merge only: the values document names a register the schema does not declare.
    UnknownRegister(String),
    /// Strict merge only: a schema register has no entry in the values document.
    MissingValue(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "could not open file {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "error parsing JSON in {}: {}", path.display(), source)
            }
            LoadError::InvalidValue { register, found } => {
                write!(f, "value for register {register} is not an integer: {found}")
            }
            LoadError::UnknownRegister(name) => {
                write!(f, "values document names unknown register {name}")
            }
            LoadError::MissingValue(name) => {
                write!(f, "no value given for register {name}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors produced when extracting a field value out of a raw register value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The mask has no set bit, so there is no shift to normalise the field by.
    ZeroMask { register: String, field: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ZeroMask { register, field } => {
                write!(f, "field {register}.{field} has a zero mask")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Any failure along the load, merge, decode and report pipeline.
#[derive(Debug)]
pub enum Error {
    Load(LoadError),
    Decode(DecodeError),
    /// Writing the report failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(err) => write!(f, "{err}"),
            Error::Decode(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "could not write report: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Load(err) => Some(err),
            Error::Decode(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<LoadError> for Error {
    fn from(value: LoadError) -> Self {
        Error::Load(value)
    }
}

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        Error::Decode(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}
