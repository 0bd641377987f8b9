//! # Otter Opcode Generator
//!
//! Build-time generator for the Otter JSON encoder VM. One run produces:
//!
//! - `optype.rs`: the `Category` and `OpType` enums, the name, category and
//!   sibling tables, and the sibling-derivation methods
//! - four copies of the generic VM template, one per output variant
//!   (`vm`, `vm_indent`, `vm_escaped`, `vm_escaped_indent`)
//!
//! ## Ordinals
//!
//! An opcode's numeric value is its position in the emission sequence built
//! by [`schema`]. Sibling variants (pointer head, omit-empty, field/end) sit
//! at fixed ordinal distances; [`OpTable::verify_offsets`] fails the run if
//! an edit to the schema breaks that.
//!
//! ## Failure
//!
//! Every run regenerates everything. The first read, parse, format or write
//! error aborts the run; files already written are left as they are.

#![warn(clippy::all)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod category;
pub mod config;
pub mod derive;
pub mod emit;
pub mod error;
pub mod replicate;
pub mod schema;

use std::path::{Path, PathBuf};

use tracing::info;

pub use category::{Category, classify};
pub use config::GenConfig;
pub use derive::Derivation;
pub use error::{GenError, Result};
pub use replicate::{Template, VARIANTS, Variant};
pub use schema::{OpTable, OpType};

/// What a generator run wrote.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Written files, in write order
    pub written: Vec<PathBuf>,
    /// Number of opcodes emitted
    pub op_count: usize,
}

/// Run the whole generator: VM variants first, then the opcode module.
pub fn generate(config: &GenConfig) -> Result<GenerateReport> {
    let mut report = GenerateReport::default();

    let template = Template::load(&config.template_path)?;
    for variant in replicate::replicate(&template)? {
        let path = config.variant_path(variant.label);
        write_artifact(&path, &variant.source)?;
        report.written.push(path);
    }

    let table = OpTable::build()?;
    table.verify_offsets()?;
    let source = emit::render(&table)?;
    let path = config.optype_path();
    write_artifact(&path, &source)?;
    report.written.push(path);
    report.op_count = table.len();

    Ok(report)
}

/// Write one artifact, creating its directory
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
