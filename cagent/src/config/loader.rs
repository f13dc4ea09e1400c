//! Configuration file loading.
//!
//! A config file overlays only the keys it actually contains onto an existing
//! [`Config`]; every absent key keeps its current value.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::codec::{self, Document};
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads configuration files onto in-memory configs.
///
/// # Examples
///
/// ```no_run
/// use cagent::config::{Config, ConfigLoader, HostEnv};
/// use std::path::Path;
///
/// let mut config = Config::new(&HostEnv::detect());
/// let document = ConfigLoader::merge_file(&mut config, Path::new("/etc/cagent/cagent.conf")).unwrap();
/// println!("{} keys set in the file", document.presence().len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and decode a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, an
    /// [`Error::Io`] if it cannot be inspected or read, and
    /// [`Error::Decode`] if its contents are malformed.
    pub fn read_document(path: &Path) -> Result<Document> {
        match fs::metadata(path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::io(path, "stat", e)),
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, "read", e))?;
        Document::parse_file_contents(path, &contents)
    }

    /// Overlay a config file onto `config`.
    ///
    /// Returns the decoded document so callers can inspect which keys were
    /// present. On any error `config` is left untouched.
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::read_document`] and [`ConfigLoader::merge_document`].
    pub fn merge_file(config: &mut Config, path: &Path) -> Result<Document> {
        let document = Self::read_document(path)?;
        Self::merge_document(config, &document, path)?;
        log::debug!(
            "merged {} keys from {}",
            document.presence().len(),
            path.display()
        );
        Ok(document)
    }

    /// Overlay an already decoded document onto `config`.
    ///
    /// Nested tables merge key by key; arrays and scalars replace the current
    /// value. `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if a present key has the wrong type.
    pub fn merge_document(config: &mut Config, document: &Document, path: &Path) -> Result<()> {
        let mut merged = codec::to_table(config)?;
        codec::deep_merge(&mut merged, document.table());

        let updated: Config = toml::Value::Table(merged)
            .try_into()
            .map_err(|e| Error::decode(path, &e))?;
        *config = updated;
        Ok(())
    }
}
