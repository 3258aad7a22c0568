use clap::Parser;
use soil_ptf::{SoilSample, estimate};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Compare Saxton & Rawls (2006) and Rawls et al. (1982) pedotransfer
/// estimates for a soil sample and export its van Genuchten retention curve.
#[derive(Parser)]
#[command(name = "soil_ptf", version)]
struct Args {
    /// TOML file with the soil sample; missing fields use the defaults
    /// (sand 65%, silt 25%, clay 10%, bulk density 1.45 g/cm³, OM 1.8%)
    #[arg(short, long)]
    sample: Option<PathBuf>,

    /// Write the 100-point retention curve as CSV to this path
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Write a sample TOML template with the default values, then exit
    #[arg(long, value_name = "PATH")]
    init: Option<PathBuf>,
}

fn main() {
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = &args.init {
        fs::write(path, SoilSample::default().to_toml()?)?;
        println!("Wrote default sample to {}", path.display());
        return Ok(());
    }

    let sample = match &args.sample {
        Some(path) => SoilSample::from_toml(path)?,
        None => SoilSample::default(),
    };

    let result = estimate(sample);
    print!("{}", result.summary());

    if let Some(path) = &args.csv {
        fs::write(path, result.curve.to_csv())?;
        println!("Curve written to {}", path.display());
    }

    Ok(())
}
