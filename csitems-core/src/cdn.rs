//! Inventory image URL derivation.

use crate::error::{CatalogError, Result};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

pub const DEFAULT_CDN_HOST: &str = "steamcdn-a.akamaihd.net";

/// Builds content-addressed CDN URLs from local PNG assets.
#[derive(Debug, Clone)]
pub struct CdnResolver {
    images_dir: PathBuf,
    host: String,
}

impl CdnResolver {
    pub fn new(images_dir: impl Into<PathBuf>, host: impl Into<String>) -> Self {
        Self {
            images_dir: images_dir.into(),
            host: host.into(),
        }
    }

    /// URL for the image at `<images_dir>/<file>.png`, e.g.
    /// `https://<host>/apps/730/icons/econ/stickers/foo_large.<sha1>.png`.
    pub fn url(&self, file: &str) -> Result<String> {
        let path = self.images_dir.join(format!("{}.png", file));
        let data = std::fs::read(&path).map_err(|e| {
            CatalogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read image {}: {}", path.display(), e),
            ))
        })?;

        let mut hasher = Sha1::new();
        hasher.update(&data);
        let sha1 = hex::encode(hasher.finalize());

        Ok(format!("https://{}/apps/730/icons/{}.{}.png", self.host, file, sha1))
    }
}
