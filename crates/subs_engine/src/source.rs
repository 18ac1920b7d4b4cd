use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use subs_core::ConfigError;
use subs_logging::subs_info;
use thiserror::Error;

use crate::{decode_page, DecodeError, Page};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot read page {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("invalid counter configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start timer runtime: {0}")]
    Runtime(io::Error),
}

/// Reads a saved dashboard page from disk and parses its markup.
pub fn load_page(path: &Path) -> Result<Page, EngineError> {
    let bytes = fs::read(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_page(&bytes, None)?;
    subs_info!(
        "loaded {:?}: {} bytes as {}",
        path,
        bytes.len(),
        decoded.encoding_label
    );
    Ok(Page::parse(&decoded.html))
}
