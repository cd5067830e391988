//! Grouped aggregation of allele observations into frequency tables.
//!
//! All groupings are keyed by ordered maps so the emitted rows are sorted by
//! (Locus, ASV) regardless of input order.

use crate::{
    model::{AlleleObservation, DepthRow, OccurrenceRow},
    util::Result,
};
use anyhow::anyhow;
use std::collections::BTreeMap;

/// Composite (Locus, ASV) grouping key.
pub type AlleleKey = (String, String);

/// Counts how many observations share each (Locus, ASV) pair.
pub fn count_occurrences(observations: &[AlleleObservation]) -> Vec<OccurrenceRow> {
    let mut counts: BTreeMap<AlleleKey, u64> = BTreeMap::new();
    for obs in observations {
        *counts
            .entry((obs.locus.clone(), obs.asv.clone()))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((locus, asv), freq)| OccurrenceRow { locus, asv, freq })
        .collect()
}

/// Sums the reads of each (Locus, ASV) pair. Absent reads contribute nothing,
/// but the pair still gets an entry.
pub fn sum_reads_by_allele(
    observations: &[AlleleObservation],
) -> Result<BTreeMap<AlleleKey, u64>> {
    let mut sums: BTreeMap<AlleleKey, u64> = BTreeMap::new();
    for obs in observations {
        let sum = sums
            .entry((obs.locus.clone(), obs.asv.clone()))
            .or_default();
        *sum = sum.checked_add(obs.reads.unwrap_or(0)).ok_or_else(|| {
            anyhow!(
                "Read count overflow for locus '{}', ASV '{}'",
                obs.locus,
                obs.asv
            )
        })?;
    }
    Ok(sums)
}

/// Sums the per-allele read counts of each locus.
pub fn total_reads_by_locus(
    allele_reads: &BTreeMap<AlleleKey, u64>,
) -> Result<BTreeMap<String, u64>> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for ((locus, _), reads) in allele_reads {
        let total = totals.entry(locus.clone()).or_default();
        *total = total
            .checked_add(*reads)
            .ok_or_else(|| anyhow!("Total read count overflow for locus '{}'", locus))?;
    }
    Ok(totals)
}

/// Attaches the locus total to every allele row and computes its share.
///
/// A locus whose total is zero yields `0 / 0`, i.e. NaN, and is kept in the output.
pub fn join_totals(
    allele_reads: BTreeMap<AlleleKey, u64>,
    totals: &BTreeMap<String, u64>,
) -> Vec<DepthRow> {
    allele_reads
        .into_iter()
        .map(|((locus, asv), reads)| {
            let total_reads = totals.get(&locus).copied().unwrap_or(0);
            DepthRow {
                frequency: reads as f64 / total_reads as f64,
                locus,
                asv,
                reads,
                total_reads,
            }
        })
        .collect()
}

/// Runs the full read-depth pipeline: per-allele sums, per-locus totals, join, ratio.
pub fn allele_frequencies(observations: &[AlleleObservation]) -> Result<Vec<DepthRow>> {
    let allele_reads = sum_reads_by_allele(observations)?;
    let totals = total_reads_by_locus(&allele_reads)?;
    log::debug!(
        "Aggregated {} allele(s) over {} locus/loci",
        allele_reads.len(),
        totals.len()
    );
    for (locus, _) in totals.iter().filter(|(_, total)| **total == 0) {
        log::warn!("Locus '{}' has zero total reads, frequencies are undefined", locus);
    }
    Ok(join_totals(allele_reads, &totals))
}
