//! Plot a two-dimensional dataset of a HDF5 file as a 3D surface in `figures/<dataset>.png`.
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use h5surf::prelude::*;

/// Plot a two-dimensional HDF5 dataset as a 3D surface in figures/<dataset>.png
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// HDF5 file to read
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Name of the dataset to plot
    #[arg(allow_hyphen_values = true)]
    dataset: String,
}

fn usage() {
    println!("Error, the following arguments are needed: .hdf5-file, dataset name");
    println!("Usage: h5surf input.h5 dataset");
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), anyhow::Error> {
    let argv: Vec<OsString> = env::args_os().collect();

    if argv.len() != 3 {
        usage();
        process::exit(1);
    }

    // Everything after `--` is positional, so `-x` is a dataset name and not a flag.
    let args = Args::try_parse_from([&argv[0], &OsString::from("--"), &argv[1], &argv[2]])?;

    setup_logging();

    let src = Source::open(&args.input)?;
    let info = src.dataset(&args.dataset)?;

    println!("Dimensions: {}", info.shape);

    if surface_dims(info.shape.as_slice()).is_none() {
        println!("Error, can only plot for 2 physical dimensions");
        process::exit(0);
    }

    let surface = src.read_surface(&args.dataset)?;
    drop(src);

    let opts = PlotOptions::default();
    let fig = Figure::new(&surface, &opts)?;
    let out = opts.output_path(surface.name());

    info!("plotting '{}' to {:?}", surface.name(), out);
    fig.save(&out)?;

    Ok(())
}
