// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert a 2D floor plan image into per-wall 3D meshes (zip of OBJ)
//!
//! Usage:
//!   floorplan-to-walls <image_path> [options]

use floorplan_walls::{convert_floor_plan, ConvertConfig, FsStore};
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let image_path = &args[1];

    // Parse options
    let mut config = ConvertConfig::default();
    let mut output_dir = String::from("static");
    let mut temp_dir = String::from("mcp_temp");

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output-dir" => {
                i += 1;
                output_dir = args[i].clone();
            }
            "--temp-dir" => {
                i += 1;
                temp_dir = args[i].clone();
            }
            "--prefix" => {
                i += 1;
                config.archive_prefix = args[i].clone();
            }
            "--wall-height" => {
                i += 1;
                config.wall_height = args[i].parse().expect("Invalid wall height value");
            }
            "--cm-per-pixel" => {
                i += 1;
                config.cm_per_pixel = args[i].parse().expect("Invalid scale value");
            }
            "--wall-thickness" => {
                i += 1;
                config.wall_thickness = args[i].parse().expect("Invalid wall thickness value");
            }
            "--min-area" => {
                i += 1;
                config.min_component_area = args[i].parse().expect("Invalid min area value");
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("=== Floor Plan to Wall Meshes ===");
    println!();

    // Step 1: Read input bytes
    println!("[1/3] Reading image: {}", image_path);
    let bytes = fs::read(image_path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot read '{}': {}", image_path, e);
        std::process::exit(1);
    });
    println!("  {} bytes", bytes.len());

    // Step 2: Prepare archive store
    println!("[2/3] Preparing archive store: {} (temp: {})", output_dir, temp_dir);
    let store = FsStore::new(&output_dir, &temp_dir, config.archive_prefix.clone())
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot prepare store: {}", e);
            std::process::exit(1);
        });

    // Step 3: Convert (cache-aware; repeated runs on the same image are free)
    println!("[3/3] Converting...");
    let archive_path = convert_floor_plan(&bytes, &config, &store).unwrap_or_else(|e| {
        eprintln!("Error: Conversion failed: {}", e);
        std::process::exit(1);
    });

    println!();
    println!("Done! Archive: {}", archive_path.display());
}

fn print_usage() {
    println!(
        r#"Floor Plan to Wall Meshes
=========================

Converts a 2D floor plan image into individually addressable 3D wall meshes,
packaged as a content-addressed zip of OBJ files. Repeated conversions of the
same image reuse the cached archive.

USAGE:
  floorplan-to-walls <image_path> [OPTIONS]

ARGUMENTS:
  <image_path>            Path to floor plan image (PNG, JPEG)

OPTIONS:
  --output-dir <path>     Directory for published archives (default: static)
  --temp-dir <path>       Directory for in-progress writes (default: mcp_temp)
  --prefix <name>         Archive file-name prefix (default: map_walls)
  --wall-height <units>   Extrusion height (default: 200)
  --cm-per-pixel <scale>  Pixel-to-unit scale factor (default: 1.0)
  --wall-thickness <px>   Edge thickening kernel diameter (default: 2)
  --min-area <px>         Minimum component pixel area (default: 20)
  -h, --help              Show this help message

EXAMPLES:
  floorplan-to-walls floorplan.png
  floorplan-to-walls floorplan.png --wall-height 280 --output-dir out
"#
    );
}
