//! Example: Load a JSON model and inspect what would be imported.
//!
//! Run with: cargo run --example inspect_json -- assets/two_quads.json

use std::env;

use pcm_core::playcanvas::{build_all, load_path};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_json <path-to-json-model>");
        println!("\nExample:");
        println!("  cargo run --example inspect_json -- assets/two_quads.json");
        return;
    }

    let path = &args[1];
    println!("Loading JSON model: {}", path);

    let document = match load_path(path) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error loading JSON model: {}", e);
            return;
        }
    };

    println!("\n=== Document ===");
    println!("Mesh instances: {}", document.mesh_instance_count());

    let report = build_all(&document, path);

    println!("\n=== Import: {} ===", report.name);
    for (i, record) in report.records.iter().enumerate() {
        let geometry = record.mesh.geometry();
        let bounds = geometry.bounds();
        println!(
            "  [{}] {} - {} vertices, {} triangles",
            i,
            record.name,
            geometry.vertex_count(),
            geometry.face_count()
        );
        println!(
            "       Local bounds: ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2})",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
        println!(
            "       Position: {:?}  Scale: {:?}",
            record.placement.position, record.placement.scale
        );
    }

    for failure in &report.failures {
        println!("  [skipped instance {}] {}", failure.index, failure.error);
    }

    for issue in &report.issues {
        println!("  [document] {}", issue);
    }
}
