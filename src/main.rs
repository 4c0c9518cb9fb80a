use std::error::Error;
use std::fs;

use clap::Parser;
use log::{info, warn};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter, YamlLoader};

use matchkit::reconcile::reconcile;
use matchkit::value_cmp::{deep_equal, key_comparator};

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source snapshot YAML file
    source: String,

    /// Target snapshot YAML file
    target: String,

    /// Record field used as the matching key
    #[arg(short = 'k', long = "key", default_value = "name")]
    key: String,

    /// Report output path (stdout when omitted)
    #[arg(short = 'o', long = "report-out")]
    report_out: Option<String>,

    /// Enable debug logging
    #[arg(long = "debug")]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize the logger
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    info!("Starting the snapshot reconciliation program.");

    // Read and parse both snapshot files
    let source = load_snapshot(&args.source)?;
    let target = load_snapshot(&args.target)?;

    info!(
        "Reconciling {} source and {} target records on key {:?}.",
        source.len(),
        target.len(),
        args.key
    );
    let results = reconcile(&source, &target, key_comparator(&args.key));

    // Split matched pairs into changed and unchanged records
    let mut changed = Vec::new();
    let mut unchanged = Vec::new();
    for (before, after) in &results.existed {
        if deep_equal(before, after) {
            unchanged.push(after.clone());
        } else {
            let mut pair = Hash::new();
            pair.insert(Yaml::String("before".into()), before.clone());
            pair.insert(Yaml::String("after".into()), after.clone());
            changed.push(Yaml::Hash(pair));
        }
    }

    info!(
        "Classified: {} removed, {} added, {} changed, {} unchanged.",
        results.removed.len(),
        results.added.len(),
        changed.len(),
        unchanged.len()
    );

    // Assemble the report document
    let mut report = Hash::new();
    report.insert(Yaml::String("removed".into()), Yaml::Array(results.removed));
    report.insert(Yaml::String("added".into()), Yaml::Array(results.added));
    report.insert(Yaml::String("changed".into()), Yaml::Array(changed));
    report.insert(Yaml::String("unchanged".into()), Yaml::Array(unchanged));

    let mut out_str = String::new();
    {
        let mut emitter = YamlEmitter::new(&mut out_str);
        emitter.dump(&Yaml::Hash(report))?;
    }
    out_str = out_str.trim_start_matches("---\n").to_string();
    out_str.push('\n');

    if let Some(path) = args.report_out {
        fs::write(&path, out_str)?;
        info!("Report written to {}", path);
    } else {
        print!("{}", out_str);
    }

    info!("Program completed successfully.");
    Ok(())
}

/// Reads a snapshot file: a YAML document whose top level is a sequence of
/// records. A missing or empty document counts as an empty snapshot.
fn load_snapshot(filename: &str) -> Result<Vec<Yaml>, Box<dyn Error>> {
    info!("Reading snapshot file: {}", filename);
    let content = fs::read_to_string(filename)?;
    let docs = YamlLoader::load_from_str(&content)?;

    match docs.into_iter().next() {
        None => {
            warn!("No YAML documents in {}", filename);
            Ok(Vec::new())
        }
        Some(Yaml::Array(records)) => Ok(records),
        Some(Yaml::Null) => {
            warn!("Empty document in {}", filename);
            Ok(Vec::new())
        }
        Some(_) => Err(format!("{}: top level is not a sequence of records", filename).into()),
    }
}
