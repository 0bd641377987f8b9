//! Generator paths

use std::path::{Path, PathBuf};

/// Template location relative to the workspace root
pub const TEMPLATE_PATH: &str = "crates/otter-opgen/templates/vm.rs.tmpl";

/// Output directory relative to the workspace root
pub const OUT_DIR: &str = "generated";

/// Where the generator reads its template and writes its artifacts.
///
/// Layout under `out_dir`:
///
/// - `encoder/optype.rs`
/// - `encoder/<variant>.rs` for each VM variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Generic VM template
    pub template_path: PathBuf,
    /// Root of all generated files
    pub out_dir: PathBuf,
}

impl GenConfig {
    /// Fixed layout under a workspace root
    pub fn for_workspace(root: &Path) -> Self {
        Self {
            template_path: root.join(TEMPLATE_PATH),
            out_dir: root.join(OUT_DIR),
        }
    }

    /// Path of the opcode module
    pub fn optype_path(&self) -> PathBuf {
        self.out_dir.join("encoder").join("optype.rs")
    }

    /// Path of one VM variant
    pub fn variant_path(&self, label: &str) -> PathBuf {
        self.out_dir.join("encoder").join(format!("{label}.rs"))
    }
}

impl Default for GenConfig {
    /// Layout under the workspace this crate was built in
    fn default() -> Self {
        Self::for_workspace(&workspace_root())
    }
}

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/otter-opgen -> workspace root
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
