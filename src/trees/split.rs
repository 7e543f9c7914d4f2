//! Best threshold split on a single attribute
use tracing::trace;

use super::impurity::information_gain;
use crate::data::record::{ClassLabel, Number, Record};
use crate::error::Result;

/// Gains at or below this are rounding noise from a split that doesn't change the label mix.
pub const MIN_GAIN: f64 = 1e-12;

/// Best split found for one attribute.
///
/// Records with `value <= threshold` are in `left`, the rest in `right`.
#[derive(Debug, Clone)]
pub struct SplitCandidate<'a, XT: Number, YT: ClassLabel> {
    pub attribute: String,
    pub threshold: f64,
    pub gain: f64,
    pub left: Vec<&'a Record<XT, YT>>,
    pub right: Vec<&'a Record<XT, YT>>,
}

/// Finds the threshold on `attribute` that maximizes information gain over `records`.
///
/// Candidate thresholds are the midpoints between adjacent distinct values, so no observed
/// value ever equals a threshold. Among equal gains the lowest threshold wins.
///
/// # Arguments
///
/// * `records` - Records reaching the node.
/// * `attribute` - Attribute to split on.
/// * `base_entropy` - Entropy of `records`, computed once per node by the caller.
///
/// # Returns
///
/// `None` when every threshold leaves one side empty or no threshold has a gain above
/// [`MIN_GAIN`].
///
/// # Errors
///
/// Fails if a record lacks `attribute` or its value isn't representable as `f64`.
pub fn evaluate<'a, XT: Number, YT: ClassLabel>(
    records: &[&'a Record<XT, YT>],
    attribute: &str,
    base_entropy: f64,
) -> Result<Option<SplitCandidate<'a, XT, YT>>> {
    let values = records
        .iter()
        .map(|record| record.numeric_value(attribute))
        .collect::<Result<Vec<_>>>()?;

    let mut unique_values = values.clone();
    unique_values.sort_by(f64::total_cmp);
    unique_values.dedup();

    let mut best_split: Option<SplitCandidate<'a, XT, YT>> = None;
    let mut best_gain = f64::NEG_INFINITY;

    for pair in unique_values.windows(2) {
        let threshold = (pair[0] + pair[1]) / 2.0;

        let (left, right): (Vec<_>, Vec<_>) = records
            .iter()
            .zip(values.iter())
            .partition(|(_, &value)| value <= threshold);

        if left.is_empty() || right.is_empty() {
            continue;
        }

        let left: Vec<_> = left.into_iter().map(|(&record, _)| record).collect();
        let right: Vec<_> = right.into_iter().map(|(&record, _)| record).collect();
        let gain = information_gain(base_entropy, records.len(), &left, &right);

        if gain > best_gain {
            best_gain = gain;
            best_split = Some(SplitCandidate {
                attribute: attribute.to_string(),
                threshold,
                gain,
                left,
                right,
            });
        }
    }

    trace!(
        attribute,
        thresholds = unique_values.len().saturating_sub(1),
        best_gain,
        "evaluated attribute"
    );

    Ok(best_split.filter(|split| split.gain > MIN_GAIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::error::TreeError;
    use crate::trees::impurity::entropy;
    use approx::assert_relative_eq;

    fn dataset(rows: Vec<Vec<i64>>, labels: Vec<i64>) -> Dataset {
        let names = vec!["x".to_string(), "noise".to_string()];
        Dataset::from_rows(&names, rows, labels).unwrap()
    }

    #[test]
    fn test_evaluate_finds_midpoint() {
        let data = dataset(
            vec![vec![1, 0], vec![2, 0], vec![3, 0], vec![4, 0]],
            vec![0, 0, 1, 1],
        );
        let records: Vec<_> = data.records().iter().collect();
        let split = evaluate(&records, "x", entropy(&records)).unwrap().unwrap();

        assert_eq!(split.attribute, "x");
        assert_eq!(split.threshold, 2.5);
        assert_relative_eq!(split.gain, 1.0);
        assert_eq!(split.left.iter().map(|r| r.id()).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(split.right.iter().map(|r| r.id()).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_evaluate_constant_attribute_has_no_split() {
        let data = dataset(vec![vec![1, 7], vec![2, 7], vec![3, 7]], vec![0, 1, 0]);
        let records: Vec<_> = data.records().iter().collect();
        assert!(evaluate(&records, "noise", entropy(&records)).unwrap().is_none());
    }

    #[test]
    fn test_evaluate_no_positive_gain() {
        let data = dataset(
            vec![vec![1, 0], vec![1, 0], vec![2, 0], vec![2, 0]],
            vec![0, 1, 0, 1],
        );
        let records: Vec<_> = data.records().iter().collect();
        assert!(evaluate(&records, "x", entropy(&records)).unwrap().is_none());
    }

    #[test]
    fn test_evaluate_same_label_mix_on_both_sides_has_no_split() {
        // x = 1 carries {0, 1}, x = 2 carries {0, 1, 0, 1}: proportions match, gain is zero.
        let rows = [1, 1, 2, 2, 2, 2].iter().map(|&x| vec![x, 0]).collect();
        let data = dataset(rows, vec![0, 1, 0, 1, 0, 1]);
        let records: Vec<_> = data.records().iter().collect();
        assert!(evaluate(&records, "x", entropy(&records)).unwrap().is_none());
    }

    #[test]
    fn test_evaluate_same_three_class_mix_on_both_sides_has_no_split() {
        let labels = vec![0, 1, 2, 0, 1, 2, 0, 1, 2];
        let rows = (0..9).map(|i| vec![if i < 3 { 1 } else { 2 }, 0]).collect();
        let data = dataset(rows, labels);
        let records: Vec<_> = data.records().iter().collect();
        assert!(evaluate(&records, "x", entropy(&records)).unwrap().is_none());
    }

    #[test]
    fn test_evaluate_duplicate_values_share_a_side() {
        let data = dataset(
            vec![vec![5, 0], vec![5, 0], vec![9, 0], vec![9, 0], vec![9, 0]],
            vec![1, 1, 0, 0, 1],
        );
        let records: Vec<_> = data.records().iter().collect();
        let split = evaluate(&records, "x", entropy(&records)).unwrap().unwrap();
        assert_eq!(split.threshold, 7.0);
        assert_eq!(split.left.len(), 2);
        assert_eq!(split.right.len(), 3);
        assert!(split.gain > 0.0);
    }

    #[test]
    fn test_evaluate_ties_keep_lowest_threshold() {
        // x = 1 | 2 | 3 with labels 0 | 1 | 0: both thresholds give the same gain.
        let data = dataset(vec![vec![1, 0], vec![2, 0], vec![3, 0]], vec![0, 1, 0]);
        let records: Vec<_> = data.records().iter().collect();
        let split = evaluate(&records, "x", entropy(&records)).unwrap().unwrap();
        assert_eq!(split.threshold, 1.5);
    }

    #[test]
    fn test_evaluate_missing_attribute() {
        let data = dataset(vec![vec![1, 0], vec![2, 0]], vec![0, 1]);
        let records: Vec<_> = data.records().iter().collect();
        assert!(matches!(
            evaluate(&records, "y", entropy(&records)),
            Err(TreeError::MissingAttribute { .. })
        ));
    }
}
