//! Generator configuration.
//!
//! Supports TOML files like:
//! ```toml
//! items_game = "game/csgo/pak01_dir/scripts/items/items_game.txt"
//! language_file = "game/csgo/pak01_dir/resource/csgo_{language}.txt"
//! images_dir = "game/csgo/pak01_dir/panorama/images"
//! dist_dir = "dist"
//! source_file = "src/items.ts"
//! ```

use crate::cdn::DEFAULT_CDN_HOST;
use crate::error::{CatalogError, Result};
use crate::output::OutputPaths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "english";
const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Text encoding of the localization file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageEncoding {
    #[default]
    Utf8,
    Utf16le,
}

/// Configuration as written in a TOML file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub items_game: Option<PathBuf>,
    pub language_file: Option<String>,
    pub language_encoding: Option<LanguageEncoding>,
    pub images_dir: Option<PathBuf>,
    pub dist_dir: Option<PathBuf>,
    pub ids_file: Option<PathBuf>,
    pub source_file: Option<PathBuf>,
    pub cdn_host: Option<String>,
    pub language: Option<String>,
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config from {:?}: {}", path, e),
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config TOML: {}", e)))
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            items_game: other.items_game.or(self.items_game),
            language_file: other.language_file.or(self.language_file),
            language_encoding: other.language_encoding.or(self.language_encoding),
            images_dir: other.images_dir.or(self.images_dir),
            dist_dir: other.dist_dir.or(self.dist_dir),
            ids_file: other.ids_file.or(self.ids_file),
            source_file: other.source_file.or(self.source_file),
            cdn_host: other.cdn_host.or(self.cdn_host),
            language: other.language.or(self.language),
        }
    }

    /// Check required paths and fill in defaults.
    pub fn resolve(self) -> Result<ResolvedConfig> {
        fn require<T>(value: Option<T>, name: &str) -> Result<T> {
            value.ok_or_else(|| CatalogError::Config(format!("{} is not configured", name)))
        }

        let language = self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let pattern = require(self.language_file, "language_file")?;
        let language_file = PathBuf::from(pattern.replace(LANGUAGE_PLACEHOLDER, &language));
        let dist_dir = self.dist_dir.unwrap_or_else(|| PathBuf::from("dist"));
        let ids_file = self.ids_file.unwrap_or_else(|| dist_dir.join("ids.json"));

        Ok(ResolvedConfig {
            items_game: require(self.items_game, "items_game")?,
            language_file,
            language_encoding: self.language_encoding.unwrap_or_default(),
            images_dir: require(self.images_dir, "images_dir")?,
            output: OutputPaths {
                dist_dir,
                ids_file,
                source_file: self.source_file,
            },
            cdn_host: self
                .cdn_host
                .unwrap_or_else(|| DEFAULT_CDN_HOST.to_string()),
            language,
        })
    }
}

/// Fully resolved settings for one generator run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub items_game: PathBuf,
    pub language_file: PathBuf,
    pub language_encoding: LanguageEncoding,
    pub images_dir: PathBuf,
    pub output: OutputPaths,
    pub cdn_host: String,
    pub language: String,
}
