//! Example: inspect the image coordinates of a consolidated store, then
//! reinitialize the image data and write it back.
//!
//! Unlike the compatibility checks this is illustrative and has no
//! structured exit codes; errors propagate straight out of `main`.

use std::path::PathBuf;

use clap::Parser;
use zarrs_compat::coords;
use zarrs_compat::dataset::{Dataset, OpenOptions};

#[derive(Parser)]
#[command(name = "image-coords")]
struct Cli {
    /// Path to the store; must already exist.
    #[arg(long, default_value = "test.mdio", value_parser = existing_path)]
    path: PathBuf,
}

fn existing_path(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path does not exist: {arg}"))
    }
}

fn main() -> zarrs_compat::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = Dataset::open(
        &cli.path,
        &OpenOptions {
            consolidated_metadata: true,
        },
    )?;
    println!("{}", dataset.hierarchy_tree()?);
    println!("{}\n", serde_json::to_string_pretty(&dataset.summary())?);
    if !dataset.attributes().is_empty() {
        println!("{}\n", serde_json::to_string_pretty(dataset.attributes())?);
    }

    println!("Test that the coords are populated for the image variable:\n");
    coords::print_image_coordinates(dataset.store())?;

    // Reinitialize the image and commit the write to disk.
    coords::reset_image(dataset.store(), 1.0)?;
    Ok(())
}
