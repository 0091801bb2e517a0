//! Planetgen CLI - Deterministic planet height-field generator.
//!
//! Generate planet-like terrain heightmaps from a seed and export them as
//! equirectangular PNG or RAW files, or inspect the parameters a seed
//! derives to.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use planetgen::export::{
    HeightGrid, PngExportOptions, RawFormat, export_height_png, export_height_raw,
};
use planetgen::params::NoiseParams;
use planetgen::terrain::PlanetField;

/// Deterministic procedural planet height-field generator.
#[derive(Parser)]
#[command(name = "planetgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planet heightmap and export it.
    Generate {
        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u32>,

        /// Height multiplier applied to the signed elevation.
        #[arg(long, default_value = "1.0")]
        scale: f32,

        /// Base sphere radius.
        #[arg(long, default_value = "1.0")]
        radius: f32,

        /// Output map width in pixels (height is width / 2).
        #[arg(short, long, default_value = "1024")]
        width: u32,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "planet")]
        name: String,

        /// Export format.
        #[arg(short, long, default_value = "png")]
        format: ExportFormat,
    },

    /// Print the noise parameters a seed derives to.
    Info {
        /// Seed to inspect.
        #[arg(short, long, default_value = "0")]
        seed: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// 16-bit grayscale PNG (universal compatibility).
    Png,
    /// 16-bit RAW little-endian (Unity).
    Raw,
    /// 32-bit float RAW (high precision).
    RawFloat,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            seed,
            scale,
            radius,
            width,
            output,
            name,
            format,
        } => {
            run_generate(seed, scale, radius, width, output, name, format);
        }
        Commands::Info { seed } => {
            run_info(seed);
        }
    }
}

fn run_generate(
    seed: Option<u32>,
    scale: f32,
    radius: f32,
    width: u32,
    output: PathBuf,
    name: String,
    format: ExportFormat,
) {
    // Validate parameters
    if width < 16 || width > 16384 {
        eprintln!("Error: Width must be between 16 and 16384");
        std::process::exit(1);
    }

    if !scale.is_finite() || !radius.is_finite() || radius <= 0.0 {
        eprintln!("Error: Scale must be finite and radius positive");
        std::process::exit(1);
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u32
    });

    println!("Planetgen - Deterministic Planet Generator");
    println!("==========================================");
    println!("Seed: {}", seed);
    println!("Scale: {}, Radius: {}", scale, radius);
    println!("Map: {}x{}", width, width / 2);
    println!("Output: {}", output.display());

    let start = Instant::now();

    println!("\nDeriving parameters and building noise tables...");
    let field = PlanetField::new(seed, scale, radius);

    println!("Sampling height field...");
    let grid = HeightGrid::sample(&field, width, width / 2);
    let (min, max) = grid.range();
    println!("Height range: [{:.4}, {:.4}]", min, max);

    if let Err(e) = std::fs::create_dir_all(&output) {
        eprintln!("Error: Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    let result = match format {
        ExportFormat::Png => {
            let path = output.join(format!("{}_height.png", name));
            println!("Writing {}...", path.display());
            export_height_png(&grid, &path, &PngExportOptions::default())
                .map_err(|e| e.to_string())
        }
        ExportFormat::Raw => {
            let path = output.join(format!("{}_height_r16.raw", name));
            println!("Writing {}...", path.display());
            export_height_raw(&grid, &path, RawFormat::R16LittleEndian)
                .map_err(|e| e.to_string())
        }
        ExportFormat::RawFloat => {
            let path = output.join(format!("{}_height_r32.raw", name));
            println!("Writing {}...", path.display());
            export_height_raw(&grid, &path, RawFormat::R32Float).map_err(|e| e.to_string())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: Export failed: {}", e);
        std::process::exit(1);
    }

    println!("\nDone in {:.2}s", start.elapsed().as_secs_f32());
}

fn run_info(seed: u32) {
    let params = NoiseParams::from_seed(seed);

    println!("Planetgen - Seed Info");
    println!("=====================");
    println!("Seed: {}", seed);
    println!();
    println!("Continent layer:");
    println!("  frequency: {:.4}", params.macro_freq);
    println!("  octaves:   {}", params.macro_octaves);
    println!("  amplitude: {:.4}", params.macro_amp);
    println!("Detail layer:");
    println!("  frequency: {:.4}", params.micro_freq);
    println!("  octaves:   {}", params.micro_octaves);
    println!("  amplitude: {:.4}", params.micro_amp);
    println!("Ridge layer:");
    println!("  frequency: {:.4}", params.ridge_freq);
    println!("  octaves:   {}", params.ridge_octaves);
    println!("  amplitude: {:.4}", params.ridge_amp);
    println!("Shared:");
    println!("  lacunarity: {:.4}", params.lacunarity);
    println!("  gain:       {:.4}", params.gain);
}
