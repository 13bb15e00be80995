//! # Symbol map
//!
//! Maps a terminal's name to the parse-table column it occupies, built on
//! [`indexmap::IndexMap`] so iteration follows the order names first appear
//! in the resource.
//!
//! The resource is a plain sequence of `name column` pairs, whitespace
//! separated, with no header. A name given twice keeps its first position
//! but takes the later column.
//!
//! ## Example
//! ```rust
//! # use tablr::SymbolMap;
//! let symbols: SymbolMap = "identificador 1\nopSuma 2\n$ 3\nopSuma 5".parse().unwrap();
//! assert_eq!(symbols.len(), 3);
//! assert_eq!(symbols.column("opSuma"), Some(5));
//! assert_eq!(symbols.column("tipo"), None);
//! ```

use crate::LoadError;
use crate::table::Fields;
use indexmap::IndexMap;
use smartstring::alias::String;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    tab: IndexMap<String, usize>,
}

impl SymbolMap {
    pub fn new() -> Self {
        Self {
            tab: IndexMap::new(),
        }
    }

    /// Reads and parses a symbol map file.
    ///
    /// An empty file loads as an empty map; rejecting it is up to the caller
    /// (see [`Parser::try_new`](crate::Parser::try_new)).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let symbols: SymbolMap = text.parse()?;
        log::debug!("loaded {:?}: {} terminals", path, symbols.len());
        Ok(symbols)
    }

    /// Sets the column of `name`, returning the column it replaced.
    pub fn insert(&mut self, name: impl AsRef<str>, column: usize) -> Option<usize> {
        self.tab.insert(String::from(name.as_ref()), column)
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.tab.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tab.iter().map(|(name, column)| (name.as_str(), *column))
    }
}

impl FromStr for SymbolMap {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, LoadError> {
        let mut fields = Fields::new(text);
        let mut symbols = SymbolMap::new();
        while let Some(name) = fields.next_word() {
            let column = fields.number("terminal column").map_err(|e| match e {
                LoadError::UnexpectedEnd { .. } => LoadError::MissingColumn { name: name.into() },
                e => e,
            })?;
            if let Some(old) = symbols.insert(name, column) {
                log::debug!("terminal {:?} remapped from column {} to {}", name, old, column);
            }
        }
        Ok(symbols)
    }
}
