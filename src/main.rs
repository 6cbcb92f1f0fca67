use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use violation_stats::{find_input_files, ingest_files, rank_totals, write_report, PoolConfig};

const DEFAULT_INPUT_DIR: &str = "moving_violations/json";
const DEFAULT_OUTPUT_PATH: &str = "violation_totals.xml";
const INPUT_EXTENSION: &str = "json";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let input_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT_DIR));
    let output_path =
        PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_PATH));
    let config = match args.get(3) {
        Some(raw) => PoolConfig::with_workers(
            raw.parse()
                .with_context(|| format!("Invalid worker count: {raw}"))?,
        ),
        None => PoolConfig::default(),
    };

    println!("🚦 Violation Stats - fine totals by violation type");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Find input files
    println!("\n📂 Scanning {} for .{} files...", input_dir.display(), INPUT_EXTENSION);
    let files = find_input_files(&input_dir, INPUT_EXTENSION)?;
    println!("✓ Found {} input files", files.len());

    // 2. Parallel decode
    println!("\n⚙️  Decoding on {} workers...", config.num_workers);
    let ingest = ingest_files(&files, &config);
    println!(
        "✓ Decoded {} records from {} files in {}ms",
        ingest.violations.len(),
        ingest.decoded_files,
        ingest.elapsed.as_millis()
    );
    if !ingest.failures.is_empty() {
        println!("⚠️  Skipped {} files that failed to decode:", ingest.failures.len());
        for failure in &ingest.failures {
            println!("   - {}", failure.path.display());
        }
    }

    // 3. Aggregate
    println!("\n📊 Ranking fine totals...");
    let totals = rank_totals(&ingest.violations);
    for (violation_type, total) in totals.entries() {
        println!("   {:<16} {}", violation_type.name(), total);
    }

    // 4. Write report
    println!("\n📝 Writing report...");
    write_report(&totals, &output_path)?;
    println!("✓ Report written to {}", output_path.display());

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "🎉 Done: {} violation types ranked from {} files",
        totals.len(),
        ingest.total_files()
    );

    Ok(())
}
