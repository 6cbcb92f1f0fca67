// 📄 Record Decoder - One JSON file → violation records
// The top level must be a single array; anything else fails the file

use anyhow::{Context, Result};
use serde::de::{Deserializer, SeqAccess, Visitor};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::violation::TrafficViolation;

/// Collects array elements one at a time so a file is never buffered whole.
struct RecordArray;

impl<'de> Visitor<'de> for RecordArray {
    type Value = Vec<TrafficViolation>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a top-level array of violation records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut records = Vec::new();
        // A malformed element aborts the whole file; the partial buffer is
        // dropped with the error
        while let Some(record) = seq.next_element::<TrafficViolation>()? {
            records.push(record);
        }
        Ok(records)
    }
}

/// Decode a readable source holding one top-level JSON array of records.
///
/// All-or-nothing per source: a malformed element, an unrecognized violation
/// type, a non-decimal amount, or trailing content after the array fails the
/// whole source and none of its records are returned.
pub fn decode_reader<R: Read>(reader: R) -> Result<Vec<TrafficViolation>> {
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let records = deserializer.deserialize_seq(RecordArray)?;
    deserializer
        .end()
        .context("Trailing content after the record array")?;
    Ok(records)
}

/// Decode one input file. Safe to call concurrently on different files.
pub fn decode_file(path: &Path) -> Result<Vec<TrafficViolation>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    decode_reader(BufReader::new(file))
        .with_context(|| format!("Failed to decode {}", path.display()))
}
