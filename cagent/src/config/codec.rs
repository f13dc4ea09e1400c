//! Structured-document codec glue.
//!
//! Decoding turns config text into a [`Document`]: the raw `toml` tree plus a
//! [`KeyPresence`] set recording every key literally written in the file.
//! Both the current-schema merge and the deprecated-key migrator consult the
//! same decoded document, so the text is parsed exactly once.
//!
//! Encoding is driven by descriptor tables ([`FieldDoc`], [`TableDoc`]) that
//! carry per-key documentation and emission rules, keeping those concerns out
//! of the data model.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// How a field is written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Always written as `key = value`.
    Plain,
    /// Skipped entirely when the value is an empty string or array.
    OmitEmpty,
    /// Written as `# key = value` while empty, so users can fill it in.
    CommentedWhenEmpty,
}

/// Descriptor for one key.
#[derive(Debug, Clone, Copy)]
pub struct FieldDoc {
    /// The key as it appears in the document.
    pub key: &'static str,
    /// Documentation emitted above the key; lines split on `\n`.
    pub doc: &'static str,
    /// Emission rule.
    pub emit: Emit,
}

impl FieldDoc {
    /// Descriptor for a plainly emitted key.
    #[must_use]
    pub const fn plain(key: &'static str, doc: &'static str) -> Self {
        Self {
            key,
            doc,
            emit: Emit::Plain,
        }
    }

    /// Descriptor for a key omitted when empty.
    #[must_use]
    pub const fn omit_empty(key: &'static str, doc: &'static str) -> Self {
        Self {
            key,
            doc,
            emit: Emit::OmitEmpty,
        }
    }

    /// Descriptor for a key commented out while empty.
    #[must_use]
    pub const fn commented(key: &'static str, doc: &'static str) -> Self {
        Self {
            key,
            doc,
            emit: Emit::CommentedWhenEmpty,
        }
    }
}

/// Descriptor for a nested table.
#[derive(Debug, Clone, Copy)]
pub struct TableDoc {
    /// The table name.
    pub key: &'static str,
    /// Documentation emitted above the `[table]` header.
    pub doc: &'static str,
    /// Descriptors for the table's keys.
    pub fields: &'static [FieldDoc],
}

/// Descriptor table for a whole document.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Top-level keys, in output order.
    pub fields: &'static [FieldDoc],
    /// Nested tables, in output order, written after all top-level keys.
    pub tables: &'static [TableDoc],
}

/// A value whose encoding is described by a [`Schema`].
pub trait Documented: Serialize {
    /// The descriptor table for this type.
    fn schema() -> &'static Schema;
}

/// Set of dotted key paths present in a decoded document.
///
/// A key counts as present as soon as it is written, whatever its value; this
/// is what distinguishes an explicit `0` from an absent key.
///
/// # Examples
///
/// ```
/// use cagent::config::Document;
///
/// let doc = Document::parse("interval = 0.0\n[jobmon]\nseverity = \"none\"\n").unwrap();
/// assert!(doc.presence().is_defined("interval"));
/// assert!(doc.presence().is_defined("jobmon.severity"));
/// assert!(!doc.presence().is_defined("heartbeat"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPresence {
    keys: BTreeSet<String>,
}

impl KeyPresence {
    /// Record every key of a decoded tree.
    #[must_use]
    pub fn from_table(table: &toml::Table) -> Self {
        let mut presence = Self::default();
        presence.record(table, "");
        presence
    }

    fn record(&mut self, table: &toml::Table, prefix: &str) {
        for (key, value) in table {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            if let toml::Value::Table(nested) = value {
                self.record(nested, &path);
            }
            self.keys.insert(path);
        }
    }

    /// Whether the dotted key path was written in the document.
    #[must_use]
    pub fn is_defined(&self, path: &str) -> bool {
        self.keys.contains(path)
    }

    /// Number of recorded key paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over recorded key paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// A decoded config document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    table: toml::Table,
    presence: KeyPresence,
}

impl Document {
    /// Decode config text.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error for malformed text.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let table: toml::Table = text.parse()?;
        let presence = KeyPresence::from_table(&table);
        Ok(Self { table, presence })
    }

    /// Decode config text read from `path`, tagging errors with the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for malformed text.
    pub fn parse_file_contents(path: &Path, text: &str) -> Result<Self> {
        Self::parse(text).map_err(|e| Error::decode(path, &e))
    }

    /// The raw decoded tree.
    #[must_use]
    pub fn table(&self) -> &toml::Table {
        &self.table
    }

    /// Keys literally present in the document.
    #[must_use]
    pub fn presence(&self) -> &KeyPresence {
        &self.presence
    }
}

/// Deep-merge `overlay` into `base`.
///
/// Tables merge key by key; arrays and scalars in the overlay replace the base
/// value entirely.
pub(crate) fn deep_merge(base: &mut toml::Table, overlay: &toml::Table) {
    for (key, overlay_val) in overlay {
        match (base.get_mut(key), overlay_val) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            _ => {
                base.insert(key.clone(), overlay_val.clone());
            }
        }
    }
}

/// Serialize a value into a `toml` table.
pub(crate) fn to_table<T: Serialize + ?Sized>(value: &T) -> Result<toml::Table> {
    match toml::Value::try_from(value)? {
        toml::Value::Table(table) => Ok(table),
        other => Err(Error::Encode {
            message: format!("expected a table at the document root, got {}", other.type_str()),
        }),
    }
}

/// Encode a documented value into commented config text.
///
/// Keys the schema does not describe are still written, after the described
/// ones, so no data is lost.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the value does not serialize to a table.
///
/// # Examples
///
/// ```
/// use cagent::config::{encode, MinValuableConfig};
///
/// let text = encode(&MinValuableConfig::default()).unwrap();
/// assert!(text.contains("log_level = \"error\""));
/// assert!(text.contains("# hub_url = \"\""));
/// ```
pub fn encode<T: Documented>(value: &T) -> Result<String> {
    let table = to_table(value)?;
    Ok(render(&table, T::schema()))
}

fn render(table: &toml::Table, schema: &Schema) -> String {
    let mut out = String::new();

    write_fields(&mut out, table, schema.fields);
    for (key, value) in table {
        let described = schema.fields.iter().any(|f| f.key == key)
            || schema.tables.iter().any(|t| t.key == key);
        if !described && !value.is_table() {
            write_line(&mut out, key, value, false);
        }
    }

    for table_doc in schema.tables {
        if let Some(toml::Value::Table(nested)) = table.get(table_doc.key) {
            out.push('\n');
            write_doc(&mut out, table_doc.doc);
            let _ = writeln!(out, "[{}]", table_doc.key);
            write_fields(&mut out, nested, table_doc.fields);
            for (key, value) in nested {
                if !table_doc.fields.iter().any(|f| f.key == key) {
                    write_line(&mut out, key, value, false);
                }
            }
        }
    }

    for (key, value) in table {
        let described = schema.tables.iter().any(|t| t.key == key);
        if let (false, toml::Value::Table(nested)) = (described, value) {
            out.push('\n');
            let _ = writeln!(out, "[{key}]");
            for (nested_key, nested_value) in nested {
                write_line(&mut out, nested_key, nested_value, false);
            }
        }
    }

    out
}

fn write_fields(out: &mut String, table: &toml::Table, fields: &[FieldDoc]) {
    for field in fields {
        let Some(value) = table.get(field.key) else {
            continue;
        };
        let empty = is_empty(value);
        match field.emit {
            Emit::OmitEmpty if empty => continue,
            Emit::CommentedWhenEmpty if empty => {
                write_doc(out, field.doc);
                write_line(out, field.key, value, true);
            }
            _ => {
                write_doc(out, field.doc);
                write_line(out, field.key, value, false);
            }
        }
    }
}

fn write_doc(out: &mut String, doc: &str) {
    if doc.is_empty() {
        return;
    }
    for line in doc.lines() {
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            let _ = writeln!(out, "# {line}");
        }
    }
}

fn write_line(out: &mut String, key: &str, value: &toml::Value, commented: bool) {
    let prefix = if commented { "# " } else { "" };
    let _ = writeln!(out, "{prefix}{key} = {value}");
}

fn is_empty(value: &toml::Value) -> bool {
    match value {
        toml::Value::String(s) => s.is_empty(),
        toml::Value::Array(a) => a.is_empty(),
        _ => false,
    }
}
