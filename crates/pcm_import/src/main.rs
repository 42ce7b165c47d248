// Import a PlayCanvas-style JSON model and report the rebuilt objects
// Run with: cargo run --release --bin pcm_import -- <model.json> [--no-setting] [--type OPT_A|OPT_B] [--json]

use anyhow::{bail, Context, Result};
use pcm_core::{import_into, import_path, ImportOptions, ImportReport, RecordingSink};
use serde_json::json;
use std::env;

/// Parsed command line
#[derive(Debug)]
struct Args {
    path: String,
    options: ImportOptions,
    json: bool,
}

fn usage(program: &str) -> String {
    format!("Usage: {} <model.json> [--no-setting] [--type OPT_A|OPT_B] [--json]", program)
}

/// What the command line asks for
#[derive(Debug)]
enum Command {
    Help(String),
    Import(Args),
}

fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "pcm_import".to_string());

    let mut path = None;
    let mut options = ImportOptions::default();
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-setting" => options.use_setting = false,
            "--json" => json = true,
            "--type" => {
                let value = args.next().context("--type needs a value")?;
                options.variant = value.parse()?;
            }
            "-h" | "--help" => return Ok(Command::Help(usage(&program))),
            flag if flag.starts_with("--") => bail!("Unknown flag '{}'\n{}", flag, usage(&program)),
            _ if path.is_none() => path = Some(arg),
            _ => bail!("Unexpected argument '{}'\n{}", arg, usage(&program)),
        }
    }

    let path = path.with_context(|| usage(&program))?;
    Ok(Command::Import(Args {
        path,
        options,
        json,
    }))
}

fn print_summary(report: &ImportReport, sink: &RecordingSink) {
    println!("\n=== Import: {} ===", report.name);
    println!("Objects: {}", report.built_count());
    println!("Skipped: {}", report.skipped_count());
    println!("Total vertices: {}", report.total_vertex_count());
    println!("Total triangles: {}", report.total_face_count());

    println!("\n--- Objects ---");
    for (i, object) in sink.objects.iter().enumerate() {
        println!(
            "  [{}] {} - {} vertices, {} triangles",
            i,
            object.name,
            object.vertices.len(),
            object.faces.len()
        );
        println!(
            "       Location: ({:.2}, {:.2}, {:.2})  Scale: ({:.2}, {:.2}, {:.2})",
            object.location.x,
            object.location.y,
            object.location.z,
            object.scale.x,
            object.scale.y,
            object.scale.z
        );
    }

    if !report.issues.is_empty() {
        println!("\n--- Document Problems ---");
        for issue in &report.issues {
            println!("  {}", issue);
        }
    }

    if !report.failures.is_empty() {
        println!("\n--- Skipped ---");
        for failure in &report.failures {
            println!("  [{}] {}", failure.index, failure.error);
        }
    }

    let bounds = report.world_bounds();
    if !bounds.is_empty() {
        println!("\n--- World Bounds ---");
        println!(
            "  Min: ({:.2}, {:.2}, {:.2})",
            bounds.min.x, bounds.min.y, bounds.min.z
        );
        println!(
            "  Max: ({:.2}, {:.2}, {:.2})",
            bounds.max.x, bounds.max.y, bounds.max.z
        );
    }
}

fn print_json(report: &ImportReport) -> Result<()> {
    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|f| {
            json!({
                "index": f.index,
                "node": f.node,
                "mesh": f.mesh,
                "error": f.error.to_string(),
            })
        })
        .collect();

    let output = json!({
        "name": report.name,
        "records": report.records,
        "failures": failures,
        "issues": report.issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = match parse_args(env::args())? {
        Command::Help(text) => {
            println!("{}", text);
            return Ok(());
        }
        Command::Import(args) => args,
    };
    log::info!("Importing {}", args.path);

    let report = import_path(&args.path, &args.options)
        .with_context(|| format!("Failed to import {}", args.path))?;

    if args.json {
        print_json(&report)?;
    } else {
        let mut sink = RecordingSink::default();
        import_into(&report, &mut sink);
        print_summary(&report, &sink);
    }

    Ok(())
}
