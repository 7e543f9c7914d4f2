//! # Entropy-tree
//!
//! `entropy-tree` builds binary decision tree classifiers from labeled tabular data by
//! recursively choosing the attribute threshold with the highest information gain, and uses
//! the trained tree to classify new records.
//!
//! ## Getting Started
//!
//! To use `entropy-tree`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! entropy-tree = "*"
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use entropy_tree::data::Dataset;
//! use entropy_tree::trees::{DecisionTreeClassifier, TreeParams};
//!
//! let names = vec!["x".to_string()];
//! let rows = vec![vec![1], vec![2], vec![3], vec![4]];
//! let dataset: Dataset = Dataset::from_rows(&names, rows, vec![0, 0, 1, 1]).unwrap();
//!
//! let mut model = DecisionTreeClassifier::with_params(TreeParams::depth_only(2));
//! model.fit(&dataset).unwrap();
//!
//! let predictions = model.predict_all(dataset.records()).unwrap();
//! assert_eq!(predictions, vec![0, 0, 1, 1]);
//! println!("{}", model.root().unwrap());
//! ```

/// Records and datasets
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::{Result, TreeError};
