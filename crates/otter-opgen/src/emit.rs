//! Opcode module emitter
//!
//! Renders the category enum, the opcode enum, the name/category/sibling
//! tables and the derivation methods as Rust source. Output depends only on
//! the table, so identical schemas give byte-identical text.

use std::fmt::Write;

use crate::category::{Category, classify};
use crate::derive::{Derivation, SIBLING_COLUMNS};
use crate::error::{GenError, Result};
use crate::schema::OpTable;

/// First line of every generated opcode module
pub const HEADER: &str = "// Code generated by otter-opgen. DO NOT EDIT.";

/// Artifact name used in errors and logs
pub const ARTIFACT: &str = "optype.rs";

const PRELUDE: &str = r#"
#![allow(clippy::upper_case_acronyms)]

use std::fmt;
"#;

const SIBLING_CONSTS: &str = r#"
const NO_SIBLING: u16 = u16::MAX;
"#;

const OP_TYPE_IMPL: &str = r#"
impl OpType {
    /// Opcode for an ordinal, `None` when out of range.
    pub fn from_u16(ordinal: u16) -> Option<OpType> {
        OP_TYPES.get(ordinal as usize).copied()
    }

    /// Name for an ordinal, empty when out of range.
    pub fn name(ordinal: u16) -> &'static str {
        OP_TYPE_NAMES.get(ordinal as usize).copied().unwrap_or("")
    }

    /// Opcode name.
    pub fn as_str(self) -> &'static str {
        OP_TYPE_NAMES[self as usize]
    }

    /// Structural category.
    pub fn category(self) -> Category {
        OP_CATEGORIES[self as usize]
    }

    fn sibling(self, column: usize) -> Option<OpType> {
        match OP_SIBLINGS[self as usize][column] {
            NO_SIBLING => None,
            ordinal => OpType::from_u16(ordinal),
        }
    }
"#;

const DISPLAY_IMPL: &str = r#"
impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
"#;

/// Render the opcode module and check that it parses.
pub fn render(table: &OpTable) -> Result<String> {
    let mut out = String::with_capacity(64 * 1024);
    writeln!(out, "{HEADER}")?;
    out.push_str(PRELUDE);

    write_category(&mut out)?;
    write_op_type(&mut out, table)?;
    write_tables(&mut out, table)?;
    write_impl(&mut out)?;
    out.push_str(DISPLAY_IMPL);

    syn::parse_file(&out).map_err(|source| GenError::Format {
        artifact: ARTIFACT.to_string(),
        source,
    })?;
    Ok(out)
}

fn write_category(out: &mut String) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "/// Coarse structural role of an opcode.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "#[repr(u8)]")?;
    writeln!(out, "pub enum Category {{")?;
    for category in Category::ALL {
        writeln!(out, "    {} = {},", category.name(), category as u8)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_op_type(out: &mut String, table: &OpTable) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "/// Number of opcodes.")?;
    writeln!(out, "pub const OP_TYPE_COUNT: usize = {};", table.len())?;
    writeln!(out)?;
    writeln!(
        out,
        "/// Encoder VM opcodes. The discriminant is the ordinal."
    )?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]"
    )?;
    writeln!(out, "#[repr(u16)]")?;
    writeln!(out, "pub enum OpType {{")?;
    for (op, name) in table.iter() {
        writeln!(out, "    {} = {},", name, op.ordinal())?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_tables(out: &mut String, table: &OpTable) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "static OP_TYPES: [OpType; OP_TYPE_COUNT] = [")?;
    for (_, name) in table.iter() {
        writeln!(out, "    OpType::{name},")?;
    }
    writeln!(out, "];")?;

    writeln!(out)?;
    writeln!(out, "static OP_TYPE_NAMES: [&str; OP_TYPE_COUNT] = [")?;
    for (_, name) in table.iter() {
        writeln!(out, "    \"{name}\",")?;
    }
    writeln!(out, "];")?;

    writeln!(out)?;
    writeln!(out, "static OP_CATEGORIES: [Category; OP_TYPE_COUNT] = [")?;
    for (_, name) in table.iter() {
        writeln!(out, "    Category::{},", classify(name).name())?;
    }
    writeln!(out, "];")?;

    out.push_str(SIBLING_CONSTS);
    writeln!(out)?;
    writeln!(
        out,
        "static OP_SIBLINGS: [[u16; {SIBLING_COLUMNS}]; OP_TYPE_COUNT] = ["
    )?;
    for (op, _) in table.iter() {
        let mut row = [None; SIBLING_COLUMNS];
        for derivation in Derivation::ALL {
            row[derivation.column()] = table.sibling(op, derivation);
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(sibling) => sibling.ordinal().to_string(),
                None => "NO_SIBLING".to_string(),
            })
            .collect();
        writeln!(out, "    [{}],", cells.join(", "))?;
    }
    writeln!(out, "];")?;
    Ok(())
}

fn write_impl(out: &mut String) -> Result<()> {
    out.push_str(OP_TYPE_IMPL);
    for derivation in Derivation::ALL {
        let method = derivation.method();
        writeln!(out)?;
        writeln!(out, "    /// {}", doc_line(derivation))?;
        writeln!(out, "    pub fn try_{method}(self) -> Option<OpType> {{")?;
        writeln!(out, "        self.sibling({})", derivation.column())?;
        writeln!(out, "    }}")?;
        writeln!(out)?;
        writeln!(
            out,
            "    /// Like `try_{method}`, returning `self` when there is no sibling."
        )?;
        writeln!(out, "    pub fn {method}(self) -> OpType {{")?;
        writeln!(out, "        self.try_{method}().unwrap_or(self)")?;
        writeln!(out, "    }}")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn doc_line(derivation: Derivation) -> &'static str {
    match derivation {
        Derivation::PtrHead => "Pointer-receiver variant of a struct head.",
        Derivation::PlainHead => "Plain variant of a pointer-receiver struct head.",
        Derivation::OmitEmptyHead => "Omit-empty variant of a struct head.",
        Derivation::OmitEmptyField => "Omit-empty variant of a struct field or end.",
        Derivation::FieldEnd => "Struct-end variant of a typed struct field.",
    }
}
