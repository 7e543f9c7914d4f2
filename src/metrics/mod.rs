/// Confusion matrix and accuracy for classifiers
pub mod confusion;
