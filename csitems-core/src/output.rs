//! Output artifacts and splicing of generated data into a downstream source module.

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::file_utils::{read_utf8_file, write_json};
use regex::{NoExpand, Regex};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Type name whose array literal receives the catalog items.
pub const ITEMS_TYPE: &str = "CS_Item";
/// Type name whose array literal receives the item definitions.
pub const ITEM_DEFINITIONS_TYPE: &str = "CS_ItemDefinition";

/// Where each artifact of a run is written.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub dist_dir: PathBuf,
    pub ids_file: PathBuf,
    pub source_file: Option<PathBuf>,
}

impl OutputPaths {
    pub fn parsed_items_game(&self) -> PathBuf {
        self.dist_dir.join("parsed-items-game.json")
    }

    pub fn weapon_attributes(&self) -> PathBuf {
        self.dist_dir.join("weapon-attributes.json")
    }

    pub fn items(&self) -> PathBuf {
        self.dist_dir.join("items.json")
    }

    pub fn item_definitions(&self) -> PathBuf {
        self.dist_dir.join("item-defs.json")
    }
}

/// Replace the first `<TypeName>[] = ...;` literal in `content` with `literal`.
///
/// The replacement is inserted verbatim, so `$` in the data is never treated
/// as a capture reference.
pub fn splice_literal(content: &str, type_name: &str, literal: &str) -> Result<String> {
    let pattern = format!(r"{}\[\] = [^;]+;", regex::escape(type_name));
    let re = Regex::new(&pattern).map_err(|e| CatalogError::Config(e.to_string()))?;

    if !re.is_match(content) {
        return Err(CatalogError::PatternNotFound {
            pattern,
            target: "source module".to_string(),
        });
    }

    let replacement = format!("{}[] = {};", type_name, literal);
    Ok(re.replace(content, NoExpand(&replacement)).into_owned())
}

fn splice_json<T: Serialize + ?Sized>(content: &str, type_name: &str, value: &T) -> Result<String> {
    let literal = serde_json::to_string(value)?;
    splice_literal(content, type_name, &literal)
}

/// Write every artifact of a finished catalog.
///
/// The source module is spliced in memory before any file is written.
pub fn write_artifacts(catalog: &Catalog, parsed_tree: &Value, paths: &OutputPaths) -> Result<()> {
    let spliced_source = match &paths.source_file {
        Some(path) => Some((path, splice_source(path, catalog)?)),
        None => None,
    };
    let items = catalog.all_items();

    write_json(&paths.parsed_items_game(), parsed_tree)?;
    write_json(&paths.weapon_attributes(), &catalog.weapon_attributes)?;
    write_json(&paths.items(), &items)?;
    write_json(&paths.item_definitions(), &catalog.item_defs)?;
    catalog.registry.save(&paths.ids_file)?;
    info!(
        "Wrote {} items and {} definitions to {:?}",
        items.len(),
        catalog.item_defs.len(),
        paths.dist_dir
    );

    if let Some((path, content)) = spliced_source {
        std::fs::write(path, content)?;
        info!("Updated {:?}", path);
    }
    Ok(())
}

/// Splice items and item definitions into the downstream source module.
pub fn update_source_file(path: &Path, catalog: &Catalog) -> Result<()> {
    let content = splice_source(path, catalog)?;
    std::fs::write(path, content)?;
    info!("Updated {:?}", path);
    Ok(())
}

fn splice_source(path: &Path, catalog: &Catalog) -> Result<String> {
    let content = read_utf8_file(path)?;
    let content = splice_json(&content, ITEMS_TYPE, &catalog.all_items())
        .map_err(|e| with_target(e, path))?;
    splice_json(&content, ITEM_DEFINITIONS_TYPE, &catalog.item_defs)
        .map_err(|e| with_target(e, path))
}

fn with_target(e: CatalogError, path: &Path) -> CatalogError {
    match e {
        CatalogError::PatternNotFound { pattern, .. } => CatalogError::PatternNotFound {
            pattern,
            target: path.display().to_string(),
        },
        other => other,
    }
}
