//! Word-pair catalog loader (tab-separated text format)

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in catalog shipped with the game
const BUILTIN_CATALOG: &str = include_str!("../../data/word_pairs.tsv");

/// A pair of related concepts: the Civilians' word and the Spies' word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Word dealt to every Civilian
    pub common: String,

    /// Related but different word dealt to every Spy
    pub odd: String,
}

/// An immutable set of word pairs to draw from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCatalog {
    pairs: Vec<WordPair>,
}

impl WordCatalog {
    pub fn new(pairs: Vec<WordPair>) -> Self {
        WordCatalog { pairs }
    }

    /// The catalog compiled into the binary (the original game's pair list)
    pub fn builtin() -> Self {
        // The bundled file is validated by tests, so a parse failure here
        // would be a packaging bug rather than a runtime condition.
        CatalogLoader::parse(BUILTIN_CATALOG)
            .unwrap_or_else(|_| WordCatalog { pairs: Vec::new() })
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Catalog loader for tab-separated word-pair files
///
/// Format: one pair per line, `common<TAB>odd`. Blank lines and lines
/// starting with '#' are skipped.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a .tsv file
    pub fn load_from_file(path: &Path) -> Result<WordCatalog> {
        let content = fs::read_to_string(path).map_err(GameError::IoError)?;
        Self::parse(&content)
    }

    /// Parse a catalog from its text content
    pub fn parse(content: &str) -> Result<WordCatalog> {
        let mut pairs = Vec::new();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (common, odd) = line.split_once('\t').ok_or_else(|| {
                GameError::CatalogFormat(format!(
                    "line {}: expected 'common<TAB>odd', got {:?}",
                    lineno + 1,
                    line
                ))
            })?;

            let common = common.trim();
            let odd = odd.trim();
            if common.is_empty() || odd.is_empty() {
                return Err(GameError::CatalogFormat(format!(
                    "line {}: empty word in pair",
                    lineno + 1
                )));
            }
            if common == odd {
                return Err(GameError::CatalogFormat(format!(
                    "line {}: both words are {:?}; a pair must differ",
                    lineno + 1,
                    common
                )));
            }

            pairs.push(WordPair {
                common: common.to_string(),
                odd: odd.to_string(),
            });
        }

        if pairs.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        Ok(WordCatalog { pairs })
    }
}
