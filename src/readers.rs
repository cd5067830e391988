//! Loading of allele observation tables.
//!
//! Tables are tab-separated with a header row; columns are located by name so their
//! order is free and unrelated columns are ignored.

use crate::{model::AlleleObservation, util::Result};
use anyhow::{anyhow, Context};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};

pub const LOCUS_COLUMN: &str = "Locus";
pub const ASV_COLUMN: &str = "ASV";
pub const READS_COLUMN: &str = "Reads";

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub locus: usize,
    pub asv: usize,
    pub reads: Option<usize>,
}

impl ColumnIndices {
    /// Resolves the column positions, failing if a required column is absent.
    ///
    /// # Arguments
    ///
    /// * `headers` - The header record of the table.
    /// * `with_reads` - Whether the `Reads` column is required.
    /// * `source` - Name of the table, used in error messages.
    pub fn resolve(headers: &StringRecord, with_reads: bool, source: &str) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| anyhow!("Missing required column '{}' in {}", name, source))
        };
        let locus = find(LOCUS_COLUMN)?;
        let asv = find(ASV_COLUMN)?;
        let reads = if with_reads {
            Some(find(READS_COLUMN)?)
        } else {
            None
        };
        Ok(Self { locus, asv, reads })
    }
}

/// Tab-separated reader settings. Short rows are accepted; their missing fields read as empty.
pub fn table_reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(b'\t').has_headers(true).flexible(true);
    builder
}

/// Opens a tab-separated table for reading.
pub fn open_table_reader(path: &Path) -> Result<Reader<File>> {
    table_reader_builder()
        .from_path(path)
        .map_err(|e| anyhow!("Failed to open table {}: {}", path.display(), e))
}

/// Loads every observation from the table at `path` into memory.
///
/// When `with_reads` is set the `Reads` column is required and parsed; otherwise it is
/// never consulted and `reads` is `None` for every observation.
pub fn load_observations(path: &Path, with_reads: bool) -> Result<Vec<AlleleObservation>> {
    let reader = open_table_reader(path)?;
    read_observations(reader, with_reads, &path.display().to_string())
}

pub fn read_observations<R: Read>(
    mut reader: Reader<R>,
    with_reads: bool,
    source: &str,
) -> Result<Vec<AlleleObservation>> {
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", source))?
        .clone();
    let columns = ColumnIndices::resolve(&headers, with_reads, source)?;
    log::debug!("Resolved columns in {}: {:?}", source, columns);

    let mut observations = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("Failed to read record from {}", source))?;
        observations.push(parse_record(&record, &columns)?);
    }
    Ok(observations)
}

fn parse_record(record: &StringRecord, columns: &ColumnIndices) -> Result<AlleleObservation> {
    let field = |idx: usize| record.get(idx).unwrap_or_default();
    let reads = match columns.reads {
        Some(idx) => parse_reads(field(idx)).map_err(|e| {
            let line = record.position().map_or(0, |p| p.line());
            e.context(format!("Invalid {} value at line {}", READS_COLUMN, line))
        })?,
        None => None,
    };
    Ok(AlleleObservation::new(
        field(columns.locus),
        field(columns.asv),
        reads,
    ))
}

/// Largest `f64` strictly below 2^64, the bound for whole-number float counts.
const MAX_FLOAT_READS: f64 = 18_446_744_073_709_549_568.0;

/// Parses a `Reads` field. An empty field is absent rather than zero.
///
/// Counts written in float notation (`10.0`, `1e3`) are accepted when they are whole,
/// non-negative and fit in a `u64`.
fn parse_reads(value: &str) -> Result<Option<u64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(reads) = value.parse::<u64>() {
        return Ok(Some(reads));
    }
    let float = value
        .parse::<f64>()
        .map_err(|e| anyhow!("'{}' is not numeric: {}", value, e))?;
    if !float.is_finite() || float < 0.0 || float.fract() != 0.0 || float > MAX_FLOAT_READS {
        return Err(anyhow!(
            "'{}' is not a non-negative whole read count",
            value
        ));
    }
    Ok(Some(float as u64))
}
