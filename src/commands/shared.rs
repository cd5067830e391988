use crate::{
    model::{AlleleObservation, TableRow},
    readers,
    writers::{create_tsv_writer, write_rows},
};
use anyhow::Result;
use std::{path::Path, time::Instant};

pub trait Args {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &str;
    fn mode_name(&self) -> &str;
    /// Whether the `Reads` column is required and parsed.
    fn with_reads(&self) -> bool;
}

/// Loads the input table, aggregates it with `compute` and writes the result.
///
/// The input is fully loaded and validated before the output file is created, so a
/// schema or type error leaves no output behind.
pub fn run<A, R, F>(args: &A, compute: F) -> Result<()>
where
    A: Args,
    R: TableRow,
    F: FnOnce(&[AlleleObservation]) -> Result<Vec<R>>,
{
    let start = Instant::now();

    let observations = readers::load_observations(args.input_path(), args.with_reads())?;
    log::info!(
        "Loaded {} observation(s) from {}",
        observations.len(),
        args.input_path().display()
    );

    let rows = compute(&observations)?;

    let output_path = Path::new(args.output_path());
    let mut writer = create_tsv_writer(output_path)?;
    let written = write_rows(&mut writer, &rows)?;
    log::info!(
        "Wrote {} {} row(s) to {}",
        written,
        args.mode_name(),
        output_path.display()
    );
    log::debug!("Finished in {:.2?}", start.elapsed());
    Ok(())
}
