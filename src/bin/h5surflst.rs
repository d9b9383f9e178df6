//! List the datasets of a HDF5 file, with their type and shape.
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use h5surf::source::Source;

/// List the datasets of a HDF5 file
#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// HDF5 file to list
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

fn usage() {
    println!("Usage: h5surflst input.h5");
}

fn main() -> Result<(), anyhow::Error> {
    let argv: Vec<OsString> = env::args_os().collect();

    if argv.len() != 2 {
        usage();
        process::exit(1);
    }

    let args = Args::try_parse_from([&argv[0], &OsString::from("--"), &argv[1]])?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let src = Source::open(&args.input)?;
    let mut datasets = src.datasets()?;
    datasets.sort_by(|a, b| a.name.cmp(&b.name));

    println!("Datasets (source path: {:?}):\n", src.path());
    println!("{:4}{:30} {:16} shape:", "", "name:", "type:");

    for d in &datasets {
        let dtype = format!("{} ({} B)", d.dtype, d.dtype.dsize());
        println!("{:4}{:30} {:16} {}", "", d.name, dtype, d.shape);
    }

    Ok(())
}
