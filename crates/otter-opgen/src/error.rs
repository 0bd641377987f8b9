//! Generator errors

use std::path::PathBuf;

use thiserror::Error;

use crate::derive::Derivation;

/// Errors that abort a generator run.
///
/// There is no recoverable class: every variant stops the run, and files
/// written before the failing step stay on disk as they are.
#[derive(Debug, Error)]
pub enum GenError {
    /// The VM template could not be read
    #[error("Failed to read template '{}': {source}", .path.display())]
    TemplateRead {
        /// Template path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The VM template is not valid Rust source
    #[error("Failed to parse template '{}': {source}", .path.display())]
    TemplateParse {
        /// Template path
        path: PathBuf,
        /// Parser error
        source: syn::Error,
    },

    /// The template has no single top-level module to rebind
    #[error("Template namespace error: {0}")]
    TemplateNamespace(String),

    /// A rendered artifact is not valid Rust source
    #[error("Generated {artifact} is not valid source: {source}")]
    Format {
        /// Artifact name
        artifact: String,
        /// Parser error
        source: syn::Error,
    },

    /// An output file could not be written
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A recorded sibling does not sit at its documented ordinal offset
    #[error("{derivation} sibling of {op} is {expected}, but the offset guess finds {found}")]
    SiblingOffset {
        /// Source opcode name
        op: String,
        /// Toggled dimension
        derivation: Derivation,
        /// Recorded sibling name
        expected: String,
        /// What the offset guess resolved to
        found: String,
    },

    /// The same opcode name was emitted twice
    #[error("Duplicate opcode name: {0}")]
    DuplicateOp(String),

    /// Ordinals no longer fit the generated `u16` representation
    #[error("Too many opcodes: {0} (max 65535)")]
    TooManyOps(usize),

    /// Formatting into the output buffer failed
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;
