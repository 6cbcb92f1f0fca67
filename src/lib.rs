// Violation Stats - Core Library
// Concurrent JSON ingestion → exact fine totals per type → XML report

pub mod violation;  // Record model: closed type set + exact decimal amounts
pub mod decoder;    // One JSON file → records (all-or-nothing per file)
pub mod pool;       // Fixed-size decode worker pool
pub mod ingest;     // Fan-out/fan-in coordinator + record sink
pub mod stats;      // Per-type totals, ranked descending
pub mod report;     // XML serialization of the ranking
pub mod discover;   // Input file discovery
pub mod props;      // Standalone key=value properties loader

// Re-export commonly used types
pub use decoder::{decode_file, decode_reader};
pub use discover::find_input_files;
pub use ingest::{ingest_files, FileFailure, IngestReport, ViolationSink};
pub use pool::{FileOutcome, PoolConfig, WorkerPool};
pub use props::{FromProperties, PropertyMap, DEFAULT_DATETIME_FORMAT};
pub use report::{render_xml, write_report, ENTRY_ELEMENT, NAME_ATTRIBUTE, ROOT_ELEMENT};
pub use stats::{rank_totals, RankedTotals};
pub use violation::{TrafficViolation, ViolationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
