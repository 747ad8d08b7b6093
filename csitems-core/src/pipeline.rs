//! One full generator run: load inputs, extract, write artifacts.

use crate::catalog::{Sources, generate};
use crate::cdn::CdnResolver;
use crate::config::{LanguageEncoding, ResolvedConfig};
use crate::error::Result;
use crate::file_utils::{read_utf8_file, read_utf16le_file};
use crate::keyvalues;
use crate::output::write_artifacts;
use crate::registry::IdRegistry;
use crate::schema::Localization;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub items: usize,
    pub item_definitions: usize,
    pub identifiers: usize,
    pub new_identifiers: usize,
}

/// Read and parse a key-value document in the given encoding.
pub fn load_keyvalues(path: &Path, encoding: LanguageEncoding) -> Result<Value> {
    let text = match encoding {
        LanguageEncoding::Utf8 => read_utf8_file(path)?,
        LanguageEncoding::Utf16le => read_utf16le_file(path)?,
    };
    keyvalues::parse(&text)
}

pub fn run(config: &ResolvedConfig) -> Result<RunSummary> {
    info!("Reading item definitions from {:?}", config.items_game);
    let tree = load_keyvalues(&config.items_game, LanguageEncoding::Utf8)?;

    info!(
        "Reading {} localization from {:?}",
        config.language, config.language_file
    );
    let lang_tree = load_keyvalues(&config.language_file, config.language_encoding)?;
    let lang = Localization::from_tree(&lang_tree)?;
    info!("Loaded {} translation tokens", lang.len());

    let registry = IdRegistry::load(&config.output.ids_file)?;
    let known_ids = registry.len();

    let cdn = CdnResolver::new(&config.images_dir, config.cdn_host.as_str());
    let sources = Sources::new(&tree, &lang, &cdn)?;
    let catalog = generate(&sources, registry)?;

    write_artifacts(&catalog, &tree, &config.output)?;

    Ok(RunSummary {
        items: catalog.all_items().len(),
        item_definitions: catalog.item_defs.len(),
        identifiers: catalog.registry.len(),
        new_identifiers: catalog.registry.len() - known_ids,
    })
}
