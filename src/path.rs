//! Structural decomposition of filesystem path strings.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// A path string broken into its structural parts.
///
/// Decomposition accepts any string; there is no such thing as a malformed
/// path. The extension keeps its leading dot, and a lone leading dot belongs
/// to the name (`.bashrc` has name `.bashrc` and no extension).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Root prefix: `"/"` for absolute paths, `""` for relative ones.
    pub root: String,
    /// Everything up to but excluding the final component.
    pub dir: String,
    /// The final component, extension included.
    pub base: String,
    /// The final component, extension excluded.
    pub name: String,
    /// The extension with its leading dot, `""` when there is none.
    pub ext: String,
}

impl ParsedPath {
    /// Decompose a path string into its parts.
    pub fn parse(raw: &str) -> Self {
        let path = Path::new(raw);

        let mut root = String::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    root.push_str(&component.as_os_str().to_string_lossy());
                }
                _ => break,
            }
        }

        let dir = match path.parent() {
            Some(parent) => parent.to_string_lossy().into_owned(),
            None => root.clone(),
        };
        let base = path
            .file_name()
            .map(|base| base.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Self {
            root,
            dir,
            base,
            name,
            ext,
        }
    }
}

impl From<&str> for ParsedPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for ParsedPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}
