//! Image asset resolution.

use std::path::{Path, PathBuf};

/// Resolves `image` and `explanation_image` names against an asset directory.
///
/// Only existence is checked; reading and rendering are left to the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The asset directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an asset name maps to, whether or not the file exists.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name.trim())
    }

    /// Returns `true` if the named asset is an existing file.
    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_file()
    }

    /// Resolved path of the asset, only if the file exists.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let path = self.resolve(name);
        path.is_file().then_some(path)
    }
}
