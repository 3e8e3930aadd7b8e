//! Prints a handful of generated products to stdout.
//! can be run with `cargo run --example preview -- 20`

use std::error::Error;
use std::io;

use product_gen::dataset::write_records;
use product_gen::generator::RecordGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 10,
    };
    let mut generator = RecordGenerator::from_time();
    write_records(io::stdout(), &mut generator, count)?;

    Ok(())
}
