//! Row types flowing through the frequency pipeline.
//!
//! Output rows serialize with the exact column names written to the TSV header.

use serde::Serialize;

/// A single observation of an allele at a locus, as read from the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlleleObservation {
    /// Locus identifier. An empty field is kept as the empty (null) key.
    pub locus: String,
    /// Amplicon sequence variant observed at the locus.
    pub asv: String,
    /// Supporting reads. `None` when the table has no `Reads` column or the field is empty.
    pub reads: Option<u64>,
}

impl AlleleObservation {
    pub fn new(locus: impl Into<String>, asv: impl Into<String>, reads: Option<u64>) -> Self {
        Self {
            locus: locus.into(),
            asv: asv.into(),
            reads,
        }
    }
}

/// An output row with a fixed column header.
pub trait TableRow: Serialize {
    const HEADER: &'static [&'static str];
}

/// Number of input rows sharing a (Locus, ASV) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceRow {
    #[serde(rename = "Locus")]
    pub locus: String,
    #[serde(rename = "ASV")]
    pub asv: String,
    #[serde(rename = "Freq")]
    pub freq: u64,
}

impl TableRow for OccurrenceRow {
    const HEADER: &'static [&'static str] = &["Locus", "ASV", "Freq"];
}

/// Summed read depth of a (Locus, ASV) pair and its share of the locus total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthRow {
    #[serde(rename = "Locus")]
    pub locus: String,
    #[serde(rename = "ASV")]
    pub asv: String,
    #[serde(rename = "Reads")]
    pub reads: u64,
    #[serde(rename = "TotalReads")]
    pub total_reads: u64,
    /// `reads / total_reads`; NaN when the locus total is zero.
    #[serde(rename = "Frequency")]
    pub frequency: f64,
}

impl TableRow for DepthRow {
    const HEADER: &'static [&'static str] = &["Locus", "ASV", "Reads", "TotalReads", "Frequency"];
}
