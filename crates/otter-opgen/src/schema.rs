//! Opcode schema
//!
//! Builds the ordered opcode list by nested cross products. The order is
//! load-bearing: an opcode's position becomes its numeric value, and sibling
//! variants land at fixed distances from each other (see [`crate::derive`]).
//!
//! Emission order:
//!
//! 1. control opcodes
//! 2. one bare opcode per primitive kind
//! 3. struct heads: `{kind, untyped} × {plain, Ptr} × {plain, OmitEmpty}`
//! 4. struct fields and ends: `{kind, untyped} × {field, end} × {plain, OmitEmpty}`

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::category::{Category, classify};
use crate::derive::{Derivation, SIBLING_COLUMNS};
use crate::error::{GenError, Result};

/// Control opcodes, emitted first.
pub const CONTROL_OPS: [&str; 14] = [
    "End",
    "Interface",
    "Ptr",
    "SliceElem",
    "SliceEnd",
    "ArrayElem",
    "ArrayEnd",
    "MapKey",
    "MapValue",
    "MapEnd",
    "Recursive",
    "RecursivePtr",
    "RecursiveEnd",
    "StructAnonymousEnd",
];

/// Primitive kinds the encoder specializes on.
///
/// Declared the way the encoder names them; [`capitalize`] turns each into
/// the opcode-name fragment.
pub const PRIMITIVE_KINDS: [&str; 42] = [
    "int",
    "uint",
    "float32",
    "float64",
    "bool",
    "string",
    "bytes",
    "number",
    "array",
    "map",
    "slice",
    "struct",
    "MarshalJSON",
    "MarshalText",
    "intString",
    "uintString",
    "float32String",
    "float64String",
    "boolString",
    "stringString",
    "numberString",
    "intPtr",
    "uintPtr",
    "float32Ptr",
    "float64Ptr",
    "boolPtr",
    "stringPtr",
    "bytesPtr",
    "numberPtr",
    "arrayPtr",
    "mapPtr",
    "slicePtr",
    "marshalJSONPtr",
    "marshalTextPtr",
    "interfacePtr",
    "intPtrString",
    "uintPtrString",
    "float32PtrString",
    "float64PtrString",
    "boolPtrString",
    "stringPtrString",
    "numberPtrString",
];

const PTR_OR_NOT: [&str; 2] = ["", "Ptr"];
const OMIT_EMPTY_OR_NOT: [&str; 2] = ["", "OmitEmpty"];

/// Upper-case the first character of a kind name.
pub fn capitalize(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// An opcode, identified by its ordinal in the emission sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct OpType(pub u16);

impl OpType {
    /// Create an opcode from its ordinal
    #[inline]
    pub const fn new(ordinal: u16) -> Self {
        Self(ordinal)
    }

    /// Get the ordinal
    #[inline]
    pub const fn ordinal(self) -> u16 {
        self.0
    }

    /// Ordinal as a table index
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Move by a signed ordinal offset, `None` on under/overflow
    pub fn offset(self, by: isize) -> Option<OpType> {
        let ordinal = (self.0 as isize).checked_add(by)?;
        u16::try_from(ordinal).ok().map(OpType)
    }
}

impl From<u16> for OpType {
    fn from(ordinal: u16) -> Self {
        Self(ordinal)
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sibling references recorded for one opcode, one slot per column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Siblings(pub(crate) [Option<OpType>; SIBLING_COLUMNS]);

/// The ordered opcode table.
///
/// Built fresh on every run; names and recorded siblings never change after
/// construction.
#[derive(Debug, Clone)]
pub struct OpTable {
    names: Vec<String>,
    pub(crate) siblings: Vec<Siblings>,
}

impl OpTable {
    /// Build the table for the encoder's primitive kinds
    pub fn build() -> Result<Self> {
        Self::with_kinds(&PRIMITIVE_KINDS)
    }

    /// Build the table for a custom primitive kind list
    pub fn with_kinds<S: AsRef<str>>(kinds: &[S]) -> Result<Self> {
        let kinds: Vec<String> = kinds.iter().map(|k| capitalize(k.as_ref())).collect();
        let mut builder = Builder::default();

        for op in CONTROL_OPS {
            builder.push(op.to_string())?;
        }
        for kind in &kinds {
            builder.push(kind.clone())?;
        }

        // The untyped variant ("") comes last in both struct blocks.
        let typed: Vec<&str> = kinds
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(""))
            .collect();

        for kind in &typed {
            let mut heads = [[OpType(0); 2]; 2];
            for (p, ptr) in PTR_OR_NOT.iter().enumerate() {
                for (o, opt) in OMIT_EMPTY_OR_NOT.iter().enumerate() {
                    heads[p][o] = builder.push(format!("Struct{ptr}Head{opt}{kind}"))?;
                }
            }
            for (&plain, &ptr) in heads[0].iter().zip(&heads[1]) {
                builder.link(plain, Derivation::PtrHead, ptr);
                builder.link(ptr, Derivation::PlainHead, plain);
            }
            for ptr_heads in heads {
                builder.link(ptr_heads[0], Derivation::OmitEmptyHead, ptr_heads[1]);
            }
        }

        for kind in &typed {
            let mut fields = [OpType(0); 2];
            for (o, opt) in OMIT_EMPTY_OR_NOT.iter().enumerate() {
                fields[o] = builder.push(format!("StructField{opt}{kind}"))?;
            }
            let mut ends = [OpType(0); 2];
            for (o, opt) in OMIT_EMPTY_OR_NOT.iter().enumerate() {
                ends[o] = builder.push(format!("StructEnd{opt}{kind}"))?;
            }
            builder.link(fields[0], Derivation::OmitEmptyField, fields[1]);
            builder.link(ends[0], Derivation::OmitEmptyField, ends[1]);
            // Bare and omit-empty-only fields have no type-qualified end.
            if !kind.is_empty() {
                for (&field, &end) in fields.iter().zip(&ends) {
                    builder.link(field, Derivation::FieldEnd, end);
                }
            }
        }

        let table = builder.finish();
        debug!(ops = table.len(), kinds = kinds.len(), "built opcode table");
        Ok(table)
    }

    /// Number of opcodes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of an opcode, empty string when out of range
    pub fn name(&self, op: OpType) -> &str {
        self.names.get(op.index()).map(String::as_str).unwrap_or("")
    }

    /// Whether the opcode's ordinal is inside the table
    pub fn contains(&self, op: OpType) -> bool {
        op.index() < self.names.len()
    }

    /// Look up an opcode by exact name
    pub fn lookup(&self, name: &str) -> Option<OpType> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| OpType(i as u16))
    }

    /// Category of an opcode, derived from its name
    pub fn category(&self, op: OpType) -> Category {
        classify(self.name(op))
    }

    /// Names in emission order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate opcodes with their names, in emission order
    pub fn iter(&self) -> impl Iterator<Item = (OpType, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (OpType(i as u16), name.as_str()))
    }
}

#[derive(Default)]
struct Builder {
    names: Vec<String>,
    seen: HashSet<String>,
    siblings: Vec<Siblings>,
}

impl Builder {
    /// Append a name; its ordinal is the current length
    fn push(&mut self, name: String) -> Result<OpType> {
        let ordinal = self.names.len();
        if ordinal > u16::MAX as usize {
            return Err(GenError::TooManyOps(ordinal + 1));
        }
        if !self.seen.insert(name.clone()) {
            return Err(GenError::DuplicateOp(name));
        }
        self.names.push(name);
        self.siblings.push(Siblings::default());
        Ok(OpType(ordinal as u16))
    }

    fn link(&mut self, from: OpType, derivation: Derivation, to: OpType) {
        self.siblings[from.index()].0[derivation.column()] = Some(to);
    }

    fn finish(self) -> OpTable {
        OpTable {
            names: self.names,
            siblings: self.siblings,
        }
    }
}
