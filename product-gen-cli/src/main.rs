use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use product_gen::dataset::{write_dataset, PRODUCTS_FILE};
use product_gen::generator::{time_seed, RecordGenerator};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Where to write the generated products
    #[clap(short, long, default_value = PRODUCTS_FILE)]
    pub(crate) output: PathBuf,
    /// Seed for the random source; taken from the clock when omitted
    #[clap(short, long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(time_seed);
    info!("Using seed {}", seed);

    let mut generator = RecordGenerator::from_seed(seed);
    let written = write_dataset(&cli.output, &mut generator)?;
    info!("Wrote {} records to {}", written, cli.output.display());

    Ok(())
}
