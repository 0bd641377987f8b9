//! Sibling derivation
//!
//! A sibling is the opcode that differs from another in exactly one toggled
//! dimension: pointer head, omit-empty, or field-vs-end. The schema builder
//! records siblings while it expands the cross products, so lookups here are
//! direct and report a missing sibling as `None`.
//!
//! The VM also relies on siblings sitting at fixed ordinal distances. That
//! contract is checked by [`OpTable::verify_offsets`], which re-derives each
//! recorded sibling with the offset guess and fails the run on a mismatch.

use std::fmt;

use tracing::debug;

use crate::error::{GenError, Result};
use crate::schema::{OpTable, OpType};

/// Number of sibling slots recorded per opcode
pub const SIBLING_COLUMNS: usize = 4;

/// A toggled dimension between two sibling opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derivation {
    /// `StructHead*` → `StructPtrHead*`
    PtrHead,
    /// `StructPtrHead*` → `StructHead*`
    PlainHead,
    /// Head → omit-empty head
    OmitEmptyHead,
    /// Field or end → omit-empty field or end
    OmitEmptyField,
    /// Typed field → typed end
    FieldEnd,
}

impl Derivation {
    /// Every derivation
    pub const ALL: [Derivation; 5] = [
        Derivation::PtrHead,
        Derivation::PlainHead,
        Derivation::OmitEmptyHead,
        Derivation::OmitEmptyField,
        Derivation::FieldEnd,
    ];

    /// Sibling-table slot. Both omit-empty derivations share one.
    pub const fn column(self) -> usize {
        match self {
            Derivation::PtrHead => 0,
            Derivation::PlainHead => 1,
            Derivation::OmitEmptyHead | Derivation::OmitEmptyField => 2,
            Derivation::FieldEnd => 3,
        }
    }

    /// Ordinal distance from an opcode to this sibling
    pub const fn offset(self) -> isize {
        match self {
            Derivation::PtrHead => 2,
            Derivation::PlainHead => -2,
            Derivation::OmitEmptyHead | Derivation::OmitEmptyField => 1,
            Derivation::FieldEnd => 2,
        }
    }

    /// Method name used in generated code
    pub const fn method(self) -> &'static str {
        match self {
            Derivation::PtrHead => "head_to_ptr_head",
            Derivation::PlainHead => "ptr_head_to_head",
            Derivation::OmitEmptyHead => "head_to_omit_empty_head",
            Derivation::OmitEmptyField => "field_to_omit_empty_field",
            Derivation::FieldEnd => "field_to_end",
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

impl OpTable {
    /// Recorded sibling, `None` if the opcode has none in this dimension
    pub fn sibling(&self, op: OpType, derivation: Derivation) -> Option<OpType> {
        self.siblings
            .get(op.index())
            .and_then(|s| s.0[derivation.column()])
    }

    /// Sibling, or the opcode itself when there is none
    pub fn derive(&self, op: OpType, derivation: Derivation) -> OpType {
        self.sibling(op, derivation).unwrap_or(op)
    }

    /// Guess a sibling from the name and the fixed ordinal offset.
    ///
    /// Builds the expected name fragment by string transformation, jumps by
    /// [`Derivation::offset`], and accepts the target only if its name
    /// contains the fragment. Out-of-range targets are rejected.
    ///
    /// This is looser than [`OpTable::sibling`]: any name containing `Ptr`
    /// (e.g. `IntPtr`) can "find" a plain head two slots back.
    pub fn guess_sibling(&self, op: OpType, derivation: Derivation) -> Option<OpType> {
        if !self.contains(op) {
            return None;
        }
        let name = self.name(op);
        let fragment = match derivation {
            Derivation::PtrHead => {
                if name.find("PtrHead").is_some_and(|i| i > 0) {
                    return None;
                }
                let idx = name.find("Head")?;
                format!("PtrHead{}", &name[idx + "Head".len()..])
            }
            Derivation::PlainHead => {
                let idx = name.find("Ptr")?;
                name[idx + "Ptr".len()..].to_string()
            }
            Derivation::OmitEmptyHead | Derivation::OmitEmptyField => "OmitEmpty".to_string(),
            Derivation::FieldEnd => {
                let idx = name.find("Field")?;
                let suffix = &name[idx + "Field".len()..];
                if suffix.is_empty() || suffix == "OmitEmpty" {
                    return None;
                }
                format!("End{suffix}")
            }
        };

        let candidate = op.offset(derivation.offset())?;
        if !self.contains(candidate) {
            return None;
        }
        self.name(candidate)
            .contains(&fragment)
            .then_some(candidate)
    }

    /// Check that every recorded sibling sits at its documented offset.
    pub fn verify_offsets(&self) -> Result<()> {
        let mut checked = 0usize;
        for (op, name) in self.iter() {
            for derivation in Derivation::ALL {
                let Some(expected) = self.sibling(op, derivation) else {
                    continue;
                };
                let found = self.guess_sibling(op, derivation);
                if found != Some(expected) || op.offset(derivation.offset()) != Some(expected) {
                    return Err(GenError::SiblingOffset {
                        op: name.to_string(),
                        derivation,
                        expected: self.name(expected).to_string(),
                        found: found
                            .map(|f| self.name(f).to_string())
                            .unwrap_or_else(|| "nothing".to_string()),
                    });
                }
                checked += 1;
            }
        }
        debug!(checked, "sibling offsets verified");
        Ok(())
    }
}
