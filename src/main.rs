use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use keyplate::decimal;
use keyplate::units::{format_key_size, parse_key_size};
use keyplate::{init_logging, summarize, GenerationOptions, Housing, KeyDescriptor, KeyUnits};

/// Generate the plate cutout for a single key and print its paths
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Housing id: ec-topre-oem, ec-topre-deskeys, dynacap-classic,
    /// ec-topre-deskeys-stabilizer or dynacap-classic-stabilizer
    #[arg(value_name = "HOUSING")]
    housing: Housing,

    /// Key width, e.g. 6.25 or 6.25u or 119.0625mm
    #[arg(value_name = "WIDTH")]
    width: String,

    /// Key height
    #[arg(value_name = "HEIGHT", default_value = "1")]
    height: String,

    /// Unit assumed for sizes without a suffix (u or mm)
    #[arg(long, value_name = "UNIT", default_value = "u")]
    units: KeyUnits,

    /// Keep the authored orientation for keys taller than they are wide
    #[arg(long)]
    skip_orientation_fix: bool,

    /// Options file (.toml or .json)
    #[arg(short, long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Kerf in mm, overrides the options file
    #[arg(long, value_name = "MM")]
    kerf: Option<String>,

    /// Stabilizer fillet radius in mm, overrides the options file
    #[arg(long, value_name = "MM")]
    stabilizer_fillet_radius: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let mut options = match &cli.options {
        Some(path) => GenerationOptions::load_from_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => GenerationOptions::new(),
    };
    if let Some(kerf) = &cli.kerf {
        options.kerf = decimal::parse(kerf).context("Invalid --kerf")?;
    }
    if let Some(radius) = &cli.stabilizer_fillet_radius {
        options.stabilizer_fillet_radius =
            decimal::parse(radius).context("Invalid --stabilizer-fillet-radius")?;
    }

    let width = parse_key_size(&cli.width, cli.units).context("Invalid key width")?;
    let height = parse_key_size(&cli.height, cli.units).context("Invalid key height")?;
    let key = KeyDescriptor::new(width, height).with_skip_orientation_fix(cli.skip_orientation_fix);

    let size = format!(
        "{} x {}",
        format_key_size(key.width, cli.units),
        format_key_size(key.height, cli.units)
    );
    info!(
        "Generating {} cutout for {} key (kerf {}, stabilizer fillet {})",
        cli.housing, size, options.kerf, options.stabilizer_fillet_radius
    );

    match cli.housing.generator().generate(&key, &options)? {
        Some(model) => print!("{}", summarize(&model)?),
        None => println!("no stabilizer for a {} key", size),
    }

    Ok(())
}
