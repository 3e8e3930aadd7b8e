use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use csv::{Terminator, WriterBuilder};
use log::{debug, info};
use rand::Rng;

use crate::error::GenError;
use crate::generator::RecordGenerator;

pub const NUM_RECORDS: u64 = 1_000_000;
pub const PRODUCTS_FILE: &str = "one_million_products.csv";
pub const HEADER: [&str; 5] = ["name", "sku", "description", "price", "last_updated"];

const WRITE_BUFFER_CAPACITY: usize = 64 * 1024;
const PROGRESS_INTERVAL: u64 = 100_000;

/// Writes the header followed by `count` generated rows to `writer`, then flushes.
/// Returns the number of data rows written.
///
/// # Errors
/// Errors on the first failed write or flush; nothing is retried
pub fn write_records<W, R>(
    writer: W,
    generator: &mut RecordGenerator<R>,
    count: u64,
) -> Result<u64, GenError>
where
    W: io::Write,
    R: Rng,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .buffer_capacity(WRITE_BUFFER_CAPACITY)
        .from_writer(writer);

    writer.write_record(&HEADER)?;
    for written in 1..=count {
        writer.serialize(generator.generate_record())?;
        if written % PROGRESS_INTERVAL == 0 {
            debug!("Wrote {} of {} records", written, count);
        }
    }
    writer.flush()?;

    Ok(count)
}

/// Creates (or truncates) the file at `path` and fills it with [`NUM_RECORDS`] rows.
///
/// # Errors
/// Errors if the file cannot be created or any write to it fails. The partially
/// written file is left behind as is.
pub fn write_dataset<P, R>(path: P, generator: &mut RecordGenerator<R>) -> Result<u64, GenError>
where
    P: AsRef<Path>,
    R: Rng,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    info!("Writing {} records to {}", NUM_RECORDS, path.display());

    let start = Instant::now();
    let written = write_records(file, generator, NUM_RECORDS)?;
    info!("Writing took: {:.2?}", start.elapsed());

    Ok(written)
}
