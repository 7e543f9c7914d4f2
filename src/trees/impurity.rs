//! Label impurity measures
use std::collections::BTreeMap;

use crate::data::record::{ClassLabel, Number, Record};
use crate::error::{Result, TreeError};

fn label_counts<XT: Number, YT: ClassLabel>(records: &[&Record<XT, YT>]) -> BTreeMap<YT, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.label()).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy (base 2) of the label distribution. An empty slice has entropy 0.
pub fn entropy<XT: Number, YT: ClassLabel>(records: &[&Record<XT, YT>]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total = records.len() as f64;
    label_counts(records)
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Reduction of weighted entropy obtained by splitting `total` records into `left` and `right`.
pub fn information_gain<XT: Number, YT: ClassLabel>(
    base_entropy: f64,
    total: usize,
    left: &[&Record<XT, YT>],
    right: &[&Record<XT, YT>],
) -> f64 {
    let weight_left = left.len() as f64 / total as f64;
    let weight_right = right.len() as f64 / total as f64;
    base_entropy - weight_left * entropy(left) - weight_right * entropy(right)
}

/// Most frequent label. Ties go to the smallest label.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty slice.
pub fn majority_label<XT: Number, YT: ClassLabel>(records: &[&Record<XT, YT>]) -> Result<YT> {
    let mut best: Option<(YT, usize)> = None;
    // BTreeMap iterates in ascending label order, so strict `>` keeps the smallest on ties.
    for (label, count) in label_counts(records) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
        .ok_or_else(|| TreeError::InvalidInput("majority label of an empty record set".into()))
}

/// True if every record carries the same label.
pub fn is_pure<XT: Number, YT: ClassLabel>(records: &[&Record<XT, YT>]) -> bool {
    match records.first() {
        Some(first) => records.iter().all(|r| r.label() == first.label()),
        None => true,
    }
}
