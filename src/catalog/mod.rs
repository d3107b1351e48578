//! Path catalog for the daily puzzle
//!
//! The catalog is an ordered list of raw path lines, loaded once and never
//! modified. Lines are only parsed when selected (or when checked).

pub mod daily;
mod embedded;
pub mod loader;

pub use daily::{DayIndex, Daily, fetch_daily, select_path};
pub use embedded::{CATALOG, CATALOG_COUNT};
pub use loader::{CatalogFile, CatalogSource, EmbeddedCatalog, source_from_name};

use crate::core::{Path, PathError};
use std::fmt;
use std::io;

/// Ordered, immutable list of catalog lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    lines: Vec<String>,
}

/// Error type for catalog loading and selection
#[derive(Debug)]
pub enum CatalogError {
    Read { name: String, source: io::Error },
    Empty,
    Malformed { line: usize, source: PathError },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { name, source } => write!(f, "cannot read {name}: {source}"),
            Self::Empty => write!(f, "catalog has no paths"),
            Self::Malformed { line, source } => write!(f, "catalog line {line}: {source}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl Catalog {
    /// Split catalog text into lines
    ///
    /// Surrounding whitespace of the whole text is dropped first, so a
    /// trailing newline does not create an entry. Whitespace-only text gives
    /// an empty catalog.
    ///
    /// # Examples
    /// ```
    /// use holdgram::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_text("{dog, god} + s -> {dogs, gods}\n{air}\n");
    /// assert_eq!(catalog.len(), 2);
    /// assert!(Catalog::from_text("\n  \n").is_empty());
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }

        let lines = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();

        Self { lines }
    }

    /// Raw lines in catalog order
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index` (0-based)
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parse the line at `index`
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` for an out-of-range index and
    /// `CatalogError::Malformed` (with the 1-based line number) for a line
    /// that does not parse.
    pub fn path(&self, index: usize) -> Result<Path, CatalogError> {
        let line = self.get(index).ok_or(CatalogError::Empty)?;
        Path::parse(line).map_err(|source| CatalogError::Malformed {
            line: index + 1,
            source,
        })
    }

    /// Parse every line, returning the 1-based line numbers that fail with their errors
    #[must_use]
    pub fn malformed(&self) -> Vec<(usize, PathError)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| Path::parse(line).err().map(|e| (i + 1, e)))
            .collect()
    }
}
