use crate::{model::TableRow, util::Result};
use anyhow::{anyhow, Context};
use csv::{Writer, WriterBuilder};
use std::{fs::File, io::Write, path::Path};

fn tsv_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    // The header is written explicitly so empty tables still get one.
    builder.delimiter(b'\t').has_headers(false);
    builder
}

/// Creates (or truncates) a tab-separated output file.
pub fn create_tsv_writer(path: &Path) -> Result<Writer<File>> {
    tsv_builder()
        .from_path(path)
        .map_err(|e| anyhow!("Failed to create output file {}: {}", path.display(), e))
}

/// Writes the header of `R` followed by every row.
///
/// Returns the number of data rows written.
pub fn write_rows<W: Write, R: TableRow>(writer: &mut Writer<W>, rows: &[R]) -> Result<usize> {
    writer
        .write_record(R::HEADER)
        .context("Failed to write header")?;
    for row in rows {
        writer.serialize(row).context("Failed to write record")?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(rows.len())
}
