use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::data::record::ClassLabel;
use crate::error::{Result, TreeError};

/// Square matrix of counts; rows are true classes, columns predicted classes.
pub type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics<T: ClassLabel> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The classes seen in either input, in ascending order, and the matrix indexed by them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the inputs are empty or of different lengths.
    fn confusion_matrix(&self, y_true: &[T], y_pred: &[T]) -> Result<(Vec<T>, ConfusionMatrix)> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::InvalidInput(
                "Predictions and labels are of different sizes.".into(),
            ));
        }
        if y_true.is_empty() {
            return Err(TreeError::InvalidInput("No labels to compare.".into()));
        }

        let classes: Vec<T> = y_true
            .iter()
            .chain(y_pred.iter())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            let row = class_index(&classes, y_t)?;
            let col = class_index(&classes, y_p)?;
            matrix[(row, col)] += 1;
        }

        Ok((classes, matrix))
    }

    /// Computes the fraction of correctly predicted labels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the inputs are empty or of different lengths.
    fn accuracy(&self, y_true: &[T], y_pred: &[T]) -> Result<f64> {
        let (_, matrix) = self.confusion_matrix(y_true, y_pred)?;
        let correct: usize = matrix.diagonal().iter().sum();
        Ok(correct as f64 / y_true.len() as f64)
    }
}

fn class_index<T: ClassLabel>(classes: &[T], class: &T) -> Result<usize> {
    classes.binary_search(class).map_err(|_| {
        TreeError::InvalidInput(format!("class {} missing from {:?}", class, classes))
    })
}
