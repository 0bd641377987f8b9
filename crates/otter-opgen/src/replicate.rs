//! VM variant replication
//!
//! The generic VM template is one Rust file whose only top-level module is
//! the namespace. The template is parsed once to locate that module's ident.
//! Each variant is rendered by splicing its label over the ident's source
//! span, so comments and layout are preserved, and the result is re-parsed
//! to check that the module now carries the label.

use std::path::{Path, PathBuf};

use proc_macro2::LineColumn;
use syn::spanned::Spanned;

use crate::error::{GenError, Result};

/// Variant namespaces, in generation order
pub const VARIANTS: [&str; 4] = ["vm", "vm_indent", "vm_escaped", "vm_escaped_indent"];

/// A parsed VM template.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    source: String,
    namespace: usize,
    ident: syn::Ident,
}

/// One rendered variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Namespace label
    pub label: &'static str,
    /// Rendered source
    pub source: String,
}

impl Template {
    /// Read and parse a template file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| GenError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, source)
    }

    /// Parse template source; `path` is only used in errors
    pub fn parse(path: &Path, source: String) -> Result<Self> {
        // Spans are computed after the BOM is dropped.
        let source = match source.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => source,
        };
        let file = syn::parse_file(&source).map_err(|source| GenError::TemplateParse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut modules = file
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches!(item, syn::Item::Mod(_)))
            .map(|(i, _)| i);
        let namespace = match (modules.next(), modules.next()) {
            (Some(i), None) => i,
            (None, _) => {
                return Err(GenError::TemplateNamespace(format!(
                    "'{}' has no top-level module",
                    path.display()
                )));
            }
            (Some(_), Some(_)) => {
                return Err(GenError::TemplateNamespace(format!(
                    "'{}' has more than one top-level module",
                    path.display()
                )));
            }
        };

        let ident = match &file.items[namespace] {
            syn::Item::Mod(module) => module.ident.clone(),
            _ => {
                return Err(GenError::TemplateNamespace(format!(
                    "'{}' has no top-level module",
                    path.display()
                )));
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            source,
            namespace,
            ident,
        })
    }

    /// The template's own namespace ident
    pub fn namespace(&self) -> &syn::Ident {
        &self.ident
    }

    /// Render the template under another namespace
    pub fn render(&self, label: &str) -> Result<String> {
        syn::parse_str::<syn::Ident>(label).map_err(|_| {
            GenError::TemplateNamespace(format!("'{label}' is not a valid module name"))
        })?;

        let span = self.ident.span();
        let (start, end) = match (
            byte_offset(&self.source, span.start()),
            byte_offset(&self.source, span.end()),
        ) {
            (Some(start), Some(end)) if start <= end => (start, end),
            _ => {
                return Err(GenError::TemplateNamespace(format!(
                    "cannot locate namespace of '{}'",
                    self.path.display()
                )));
            }
        };

        let mut rendered = String::with_capacity(self.source.len() + label.len());
        rendered.push_str(&self.source[..start]);
        rendered.push_str(label);
        rendered.push_str(&self.source[end..]);

        let artifact = format!("{label}.rs");
        let check = syn::parse_file(&rendered).map_err(|source| GenError::Format {
            artifact: artifact.clone(),
            source,
        })?;
        let bound = check.items.get(self.namespace).and_then(|item| match item {
            syn::Item::Mod(module) => Some(module.ident.to_string()),
            _ => None,
        });
        if bound.as_deref() != Some(label) {
            return Err(GenError::Format {
                artifact,
                source: syn::Error::new(check.span(), "namespace was not rebound"),
            });
        }
        Ok(rendered)
    }
}

/// Render every variant in [`VARIANTS`]
pub fn replicate(template: &Template) -> Result<Vec<Variant>> {
    VARIANTS
        .iter()
        .map(|&label| -> Result<Variant> {
            Ok(Variant {
                label,
                source: template.render(label)?,
            })
        })
        .collect()
}

/// Byte offset of a 1-based line / 0-based char column
fn byte_offset(source: &str, at: LineColumn) -> Option<usize> {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(at.line.checked_sub(1)?)
        .map(str::len)
        .sum();
    let line = &source[line_start..];
    let line = line.split('\n').next().unwrap_or("");
    if at.column == line.chars().count() {
        return Some(line_start + line.len());
    }
    line.char_indices()
        .nth(at.column)
        .map(|(offset, _)| line_start + offset)
}
