//! Catalog sources
//!
//! A source hands back the full catalog text or fails. The embedded catalog
//! never fails; a catalog file can.

use super::{CATALOG, Catalog, CatalogError};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name selecting the catalog compiled into the binary
pub const EMBEDDED_NAME: &str = "embedded";

/// Anything that can produce catalog text
pub trait CatalogSource {
    /// Fetch the whole catalog as UTF-8 text
    ///
    /// # Errors
    /// Returns an I/O error if the text cannot be obtained or is not UTF-8.
    fn fetch(&self) -> io::Result<String>;

    /// Human-readable name for messages
    fn describe(&self) -> String;

    /// Fetch and split into catalog lines
    ///
    /// # Errors
    /// Returns `CatalogError::Read` if fetching fails.
    fn load(&self) -> Result<Catalog, CatalogError> {
        let text = self.fetch().map_err(|source| CatalogError::Read {
            name: self.describe(),
            source,
        })?;
        let catalog = Catalog::from_text(&text);
        debug!("loaded {} catalog lines from {}", catalog.len(), self.describe());
        Ok(catalog)
    }
}

/// The catalog generated from `data/paths.txt` at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn fetch(&self) -> io::Result<String> {
        Ok(CATALOG.join("\n"))
    }

    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }
}

/// A catalog file on disk, one path per line
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for CatalogFile {
    fn fetch(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source from a `--catalog` value: `embedded` or a file path
///
/// # Examples
/// ```
/// use holdgram::catalog::loader::{CatalogSource, source_from_name};
///
/// assert_eq!(source_from_name("embedded").describe(), "embedded catalog");
/// assert_eq!(source_from_name("paths.txt").describe(), "paths.txt");
/// ```
#[must_use]
pub fn source_from_name(name: &str) -> Box<dyn CatalogSource> {
    if name == EMBEDDED_NAME {
        Box::new(EmbeddedCatalog)
    } else {
        Box::new(CatalogFile::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_source_round_trips_lines() {
        let catalog = EmbeddedCatalog.load().unwrap();
        assert_eq!(catalog.len(), CATALOG.len());
        assert_eq!(catalog.get(0), Some(CATALOG[0]));
    }

    #[test]
    fn missing_file_is_read_error() {
        let source = CatalogFile::new("/definitely/not/here/paths.txt");
        assert!(matches!(source.load(), Err(CatalogError::Read { .. })));
    }

    #[test]
    fn file_source_reads_lines() {
        let path = std::env::temp_dir().join(format!("holdgram-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "{{dog, god}} + s -> {{dogs, gods}}").unwrap();
            writeln!(file, "{{air}}").unwrap();
        }

        let catalog = CatalogFile::new(&path).load().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1), Some("{air}"));
    }
}
