pub mod listing;

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    tokenizer::StopWords,
};

use self::listing::Listing;

const LISTING_EXTENSION: &str = "json";

/// One input's identifier and the text extracted from it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RawDocument {
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Reads a listing file and joins its item titles.
pub fn load_document(path: &Path) -> Result<RawDocument> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let listing: Listing = serde_json::from_str(&contents).map_err(|e| {
        if e.is_data() {
            Error::malformed(path, e.to_string())
        } else {
            Error::SerdeJson(e)
        }
    })?;

    debug!(
        path = %path.display(),
        children = listing.data.children.len(),
        "Loaded listing"
    );

    Ok(RawDocument::new(path.display().to_string(), listing.titles()))
}

pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<RawDocument>> {
    paths.iter().map(|path| load_document(path)).collect()
}

/// One word per line, trimmed and lowercased.
pub fn load_stop_words(path: &Path) -> Result<StopWords> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    Ok(StopWords::new(contents.lines()))
}

/// Replaces each directory with the `.json` files beneath it, sorted by path.
/// Other paths are kept as given.
pub fn expand_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut expanded = Vec::with_capacity(paths.len());

    for path in paths {
        if !path.is_dir() {
            expanded.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;

            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == LISTING_EXTENSION)
            {
                expanded.push(entry.into_path());
            }
        }
    }

    Ok(expanded)
}
