//! Resolves logical asset names to bytes, preferring the user's copy on disk.
//!
//! When nothing is on disk the bundled copy is used and written out as PNG so
//! the user can see and replace it.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use super::bundled::{find_bundled, log_available, BundledAsset, BUNDLED_ASSETS};
use super::decode::decode_image;
use super::error::DecalError;

/// Where resolved bytes came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOrigin {
    Disk(PathBuf),
    Bundled {
        id: &'static str,
        /// Whether the copy on disk was written successfully
        materialized: bool,
    },
}

#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    pub bytes: Vec<u8>,
    pub origin: AssetOrigin,
}

/// The decal asset directory plus the bundled fallbacks.
#[derive(Resource, Debug, Clone)]
pub struct DecalSource {
    dir: PathBuf,
    bundled: &'static [BundledAsset],
}

impl DecalSource {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            bundled: BUNDLED_ASSETS,
        }
    }

    /// Replace the bundled table (used to simulate packaging problems).
    #[cfg(test)]
    pub fn with_bundled(mut self, bundled: &'static [BundledAsset]) -> Self {
        self.bundled = bundled;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the asset directory if it is missing.
    pub fn ensure_dir(&self) -> Result<(), DecalError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.dir).map_err(|source| DecalError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        debug!("Created decal directory {:?}", self.dir);
        Ok(())
    }

    /// Bytes for `logical_name`: the on-disk file if present, else the
    /// bundled copy (materialized to disk as a side effect).
    ///
    /// A file on disk wins even if it turns out not to decode.
    pub fn resolve(&self, logical_name: &str) -> Option<ResolvedAsset> {
        let path = self.dir.join(logical_name);

        if path.is_file() {
            match std::fs::read(&path) {
                Ok(bytes) => {
                    return Some(ResolvedAsset {
                        bytes,
                        origin: AssetOrigin::Disk(path),
                    });
                }
                Err(source) => {
                    let e = DecalError::Read { path, source };
                    warn!("{}, falling back to bundled copy", e);
                }
            }
        }

        match self.resolve_bundled(logical_name) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                error!("Could not resolve {}: {}", logical_name, e);
                if matches!(e, DecalError::NotBundled { .. }) {
                    log_available(self.bundled);
                }
                None
            }
        }
    }

    fn resolve_bundled(&self, logical_name: &str) -> Result<ResolvedAsset, DecalError> {
        let asset =
            find_bundled(self.bundled, logical_name).ok_or_else(|| DecalError::NotBundled {
                name: logical_name.to_string(),
            })?;

        let decoded =
            decode_image(asset.bytes).ok_or(DecalError::BundledDecode { id: asset.id })?;

        let png = match decoded.to_png_bytes() {
            Ok(png) => png,
            Err(source) => {
                // Still usable in memory, just not written out
                let e = DecalError::Encode {
                    name: logical_name.to_string(),
                    source,
                };
                error!("{}", e);
                return Ok(ResolvedAsset {
                    bytes: asset.bytes.to_vec(),
                    origin: AssetOrigin::Bundled {
                        id: asset.id,
                        materialized: false,
                    },
                });
            }
        };

        let target = self.dir.join(logical_name);
        let materialized = match write_asset(&target, &png) {
            Ok(()) => {
                info!("Extracted default {} to {:?}", logical_name, target);
                true
            }
            Err(e) => {
                error!("Failed to extract {}: {}", logical_name, e);
                false
            }
        };

        Ok(ResolvedAsset {
            bytes: png,
            origin: AssetOrigin::Bundled {
                id: asset.id,
                materialized,
            },
        })
    }
}

/// Write `bytes` to `path`, creating parent directories first.
fn write_asset(path: &Path, bytes: &[u8]) -> Result<(), DecalError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| DecalError::WriteBack {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, bytes).map_err(|source| DecalError::WriteBack {
        path: path.to_path_buf(),
        source,
    })
}
