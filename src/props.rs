// 🔧 Properties Loader - Flat key=value file → typed field values
// Standalone utility; no data or control dependency on the pipeline

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Timestamp layout used when a field does not override it (23.11.2002 12:30)
pub const DEFAULT_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Build a value of `Self` from a parsed properties file.
///
/// Each implementation is a compile-time schema: every field names its key
/// and parser explicitly, instead of being discovered and assigned through
/// runtime type inspection.
pub trait FromProperties: Sized {
    fn from_properties(props: &PropertyMap) -> Result<Self>;
}

/// PropertyMap - the parsed key=value pairs of one properties file
#[derive(Debug, Clone)]
pub struct PropertyMap {
    entries: HashMap<String, String>,
    source: PathBuf,
}

impl PropertyMap {
    /// Read a properties file.
    ///
    /// Every line must be `key=value` with a non-empty key and value; both
    /// sides are trimmed. A missing file, a malformed line, or an empty file
    /// is an error naming the path.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("No properties file found at {}", path.display()))?;

        let mut entries = HashMap::new();
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| illegal_line(&line, path))?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return Err(illegal_line(&line, path));
            }
            entries.insert(key.to_string(), value.to_string());
        }

        if entries.is_empty() {
            bail!("Properties file empty at {}", path.display());
        }

        Ok(PropertyMap {
            entries,
            source: path.to_path_buf(),
        })
    }

    /// Look up a key. A name containing a dot resolves to the part after the
    /// first dot, so a prefixed binding like `f.number` reads the `number` key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(resolve_key(key)).map(String::as_str)
    }

    /// Required string value. Digits are fine here - "459" is a legal string.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| self.missing(key))
    }

    /// Required value parsed via `FromStr` (integers and friends)
    pub fn get_parsed<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let raw = self.get(key).ok_or_else(|| self.missing(key))?;
        raw.parse::<T>().with_context(|| {
            format!(
                "Cannot assign the value {} to the field {} at file {}",
                raw,
                resolve_key(key),
                self.source.display()
            )
        })
    }

    /// Required UTC timestamp using the default layout
    pub fn get_datetime(&self, key: &str) -> Result<DateTime<Utc>> {
        self.get_datetime_with_format(key, DEFAULT_DATETIME_FORMAT)
    }

    /// Required UTC timestamp parsed with an explicit chrono layout
    pub fn get_datetime_with_format(&self, key: &str, format: &str) -> Result<DateTime<Utc>> {
        let raw = self.get(key).ok_or_else(|| self.missing(key))?;
        let naive = NaiveDateTime::parse_from_str(raw, format).map_err(|_| {
            anyhow!(
                "String {} cannot be parsed with pattern {} at file {}",
                raw,
                format,
                self.source.display()
            )
        })?;
        Ok(naive.and_utc())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn missing(&self, key: &str) -> anyhow::Error {
        anyhow!(
            "No property {} at file {}",
            resolve_key(key),
            self.source.display()
        )
    }
}

/// `f.number` → `number`; plain names pass through
fn resolve_key(key: &str) -> &str {
    match key.split_once('.') {
        Some((_, rest)) => rest,
        None => key,
    }
}

fn illegal_line(line: &str, path: &Path) -> anyhow::Error {
    anyhow!(
        "Illegal format of properties file line: {} at path: {}",
        line,
        path.display()
    )
}
