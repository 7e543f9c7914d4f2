//! Decision Tree Classifier
use std::time::Instant;
use tracing::info;

use super::builder::TreeBuilder;
use super::node::TreeNode;
use super::params::TreeParams;
use crate::data::dataset::Dataset;
use crate::data::record::{ClassLabel, Number, Record};
use crate::error::{Result, TreeError};
use crate::metrics::confusion::ClassificationMetrics;

/// Decision tree classifier trained by maximizing entropy-based information gain.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<YT: ClassLabel = i64> {
    root: Option<TreeNode<YT>>,
    tree_params: TreeParams,
}

impl<YT: ClassLabel> Default for DecisionTreeClassifier<YT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<YT: ClassLabel> ClassificationMetrics<YT> for DecisionTreeClassifier<YT> {}

impl<YT: ClassLabel> DecisionTreeClassifier<YT> {
    /// Creates an untrained classifier with default parameters.
    pub fn new() -> Self {
        Self::with_params(TreeParams::new())
    }

    /// Creates an untrained classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `tree_params` - Depth limit, purity stopping and parallelism settings.
    pub fn with_params(tree_params: TreeParams) -> Self {
        Self {
            root: None,
            tree_params,
        }
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    pub fn set_max_depth(&mut self, max_depth: Option<u16>) {
        self.tree_params.set_max_depth(max_depth)
    }

    pub fn set_stop_when_pure(&mut self, stop_when_pure: bool) {
        self.tree_params.set_stop_when_pure(stop_when_pure)
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.tree_params.set_parallel(parallel)
    }

    pub fn set_parallel_subtrees(&mut self, parallel_subtrees: bool) {
        self.tree_params.set_parallel_subtrees(parallel_subtrees)
    }

    /// Returns the trained tree, if any.
    pub fn root(&self) -> Option<&TreeNode<YT>> {
        self.root.as_ref()
    }

    /// Builds the decision tree from a dataset, replacing any previously trained tree.
    ///
    /// # Errors
    ///
    /// This method will return an error if a record lacks one of the dataset's attributes.
    pub fn fit<XT: Number>(&mut self, dataset: &Dataset<XT, YT>) -> Result<()> {
        let started = Instant::now();
        info!(
            records = dataset.len(),
            attributes = ?dataset.attribute_names(),
            max_depth = ?self.tree_params.max_depth(),
            "starting training"
        );

        let records: Vec<_> = dataset.records().iter().collect();
        let root = TreeBuilder::new(&self.tree_params).build(
            &records,
            dataset.attribute_names(),
            0,
        )?;

        info!(
            nodes = root.node_count(),
            depth = root.depth(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "training ended"
        );
        self.root = Some(root);
        Ok(())
    }

    /// Predicts the label of a single record.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before training and `MissingAttribute` if the record lacks an
    /// attribute tested on its path.
    pub fn predict<XT: Number>(&self, record: &Record<XT, YT>) -> Result<YT> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        predict(root, record)
    }

    /// Predicts the labels of many records, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first record that can't be classified.
    pub fn predict_all<XT: Number>(&self, records: &[Record<XT, YT>]) -> Result<Vec<YT>> {
        records.iter().map(|record| self.predict(record)).collect()
    }
}

/// Classifies `record` by walking the tree from `root`.
///
/// # Errors
///
/// Fails if `record` lacks an attribute tested on its path.
pub fn predict<XT: Number, YT: ClassLabel>(
    root: &TreeNode<YT>,
    record: &Record<XT, YT>,
) -> Result<YT> {
    root.predict(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::impurity::majority_label;
    use std::collections::BTreeMap;

    fn xy_dataset() -> Dataset {
        Dataset::from_rows(
            &["x".to_string()],
            vec![vec![1], vec![2], vec![3], vec![4]],
            vec![0, 0, 1, 1],
        )
        .unwrap()
    }

    fn noisy_dataset() -> Dataset {
        let names: Vec<String> = ["age", "income", "visits"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows: Vec<Vec<i64>> = (0..40)
            .map(|i| vec![20 + i % 30, (i * 37) % 100, i % 4])
            .collect();
        let labels: Vec<i64> = (0..40)
            .map(|i| if (20 + i % 30) > 35 || i % 4 == 3 { 1 } else { 0 })
            .collect();
        Dataset::from_rows(&names, rows, labels).unwrap()
    }

    #[test]
    fn test_fit_and_predict() {
        let dataset = xy_dataset();
        let mut classifier = DecisionTreeClassifier::with_params(TreeParams::depth_only(2));
        classifier.fit(&dataset).unwrap();

        let expected = TreeNode::decision("x".into(), 2.5, TreeNode::leaf(0), TreeNode::leaf(1));
        assert_eq!(classifier.root(), Some(&expected));

        let predictions = classifier.predict_all(dataset.records()).unwrap();
        assert_eq!(predictions, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_predict_before_fit() {
        let classifier: DecisionTreeClassifier = DecisionTreeClassifier::new();
        let record = Record::new(0, 0, BTreeMap::from([("x".to_string(), 1)]));
        assert!(matches!(classifier.predict(&record), Err(TreeError::NotFitted)));
    }

    #[test]
    fn test_predict_missing_attribute() {
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&xy_dataset()).unwrap();
        let record: Record = Record::new(9, 0, BTreeMap::from([("z".to_string(), 1)]));
        assert!(matches!(
            classifier.predict(&record),
            Err(TreeError::MissingAttribute { record: 9, .. })
        ));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let dataset = noisy_dataset();
        let mut first = DecisionTreeClassifier::with_params(TreeParams::depth_only(4));
        let mut second = DecisionTreeClassifier::with_params(TreeParams::depth_only(4));
        first.fit(&dataset).unwrap();
        second.fit(&dataset).unwrap();
        assert_eq!(first.root(), second.root());
    }

    #[test]
    fn test_leaves_predict_majority_of_their_records() {
        let dataset = noisy_dataset();
        let mut classifier = DecisionTreeClassifier::with_params(TreeParams::depth_only(2));
        classifier.fit(&dataset).unwrap();
        let root = classifier.root().unwrap();

        // Group training records by the leaf they reach, identified by the path taken.
        let mut by_leaf: BTreeMap<Vec<bool>, Vec<&Record>> = BTreeMap::new();
        for record in dataset.records() {
            let mut path = Vec::new();
            let mut node = root;
            while let TreeNode::Decision {
                attribute,
                threshold,
                left,
                right,
            } = node
            {
                let goes_left = record.numeric_value(attribute).unwrap() <= *threshold;
                path.push(goes_left);
                node = if goes_left { &**left } else { &**right };
            }
            by_leaf.entry(path).or_default().push(record);
        }

        for records in by_leaf.values() {
            let predicted = predict(root, records[0]).unwrap();
            assert_eq!(predicted, majority_label(records).unwrap());
            let correct = records.iter().filter(|r| r.label() == predicted).count();
            assert!(correct * 2 >= records.len());
        }
    }

    #[test]
    fn test_unlimited_depth_fits_training_data() {
        let dataset = noisy_dataset();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.set_max_depth(None);
        classifier.fit(&dataset).unwrap();
        let predictions = classifier.predict_all(dataset.records()).unwrap();
        let accuracy = classifier.accuracy(&dataset.labels(), &predictions).unwrap();
        assert_eq!(accuracy, 1.0);
    }
}
