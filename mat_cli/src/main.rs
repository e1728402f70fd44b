//! # mat_cli - Batch Card Exporter
//!
//! Terminal front end for mat_core: load a material table from CSV,
//! export every material as both card formats, and print a per-record
//! report.
//!
//! ```text
//! mat_cli <materials.csv> <output-dir>
//! mat_cli --demo <output-dir>
//! ```
//!
//! The `--demo` form uses the built-in sample table, no CSV required.

use std::path::Path;
use std::process::ExitCode;

use mat_core::dataset::{builtin_samples, MaterialTable, TableEntry};
use mat_core::derive::derive;
use mat_core::export::{export_batch, CardFormat};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (table, output_dir) = match args.as_slice() {
        [flag, dir] if flag == "--demo" => (builtin_samples(), dir.clone()),
        [csv, dir] => match MaterialTable::from_csv_path(csv) {
            Ok(table) => (table, dir.clone()),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("Usage: mat_cli <materials.csv> <output-dir>");
            eprintln!("       mat_cli --demo <output-dir>");
            return ExitCode::FAILURE;
        }
    };

    if table.is_empty() {
        eprintln!("Error: no materials loaded");
        return ExitCode::FAILURE;
    }

    println!("mat_cli - Material Card Exporter");
    println!("================================");
    println!();
    println!("Loaded {} material(s):", table.len());
    for entry in table.iter() {
        let derivation = derive(&entry.record);
        let warnings = entry.input_reasons.len() + derivation.reasons.len();
        if warnings == 0 {
            println!("  [OK]   {}", entry.record.name);
        } else {
            println!("  [WARN] {} ({} warning(s))", entry.record.name, warnings);
        }
    }
    println!();

    let dir = Path::new(&output_dir);
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Error: cannot create '{}': {}", output_dir, e);
        return ExitCode::FAILURE;
    }

    let entries: Vec<TableEntry> = table.iter().cloned().collect();
    let mut failed = 0;

    for format in [CardFormat::Plastic, CardFormat::Mat1] {
        println!("Exporting {}...", format);
        let report = export_batch(&entries, format, dir);

        for outcome in &report.outcomes {
            match (&outcome.path, &outcome.error) {
                (Some(path), _) => {
                    println!("  {} {} -> {}", status_icon(true), outcome.material, path.display());
                }
                (None, Some(e)) => {
                    println!("  {} {}: {}", status_icon(false), outcome.material, e);
                }
                (None, None) => {}
            }
        }
        failed += report.failed();

        println!();
        println!("Report JSON:");
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: cannot serialize report: {}", e),
        }
        println!();
    }

    if failed > 0 {
        eprintln!("{} export(s) failed", failed);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
