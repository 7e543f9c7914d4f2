use crate::data::record::{ClassLabel, Number, Record};
use crate::error::Result;

/// Decision tree node
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode<YT: ClassLabel = i64> {
    /// Terminal node predicting the majority label of the records that reached it.
    Leaf { label: YT },
    /// Routes records with `attribute <= threshold` to `left`, the rest to `right`.
    Decision {
        attribute: String,
        threshold: f64,
        left: Box<TreeNode<YT>>,
        right: Box<TreeNode<YT>>,
    },
}

impl<YT: ClassLabel> TreeNode<YT> {
    pub fn leaf(label: YT) -> Self {
        Self::Leaf { label }
    }

    pub fn decision(attribute: String, threshold: f64, left: Self, right: Self) -> Self {
        Self::Decision {
            attribute,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Decision { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Decision { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Decision { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Follows the decision rules from this node down to a leaf and returns its label.
    ///
    /// # Errors
    ///
    /// Fails if `record` lacks an attribute tested on its path.
    pub fn predict<XT: Number>(&self, record: &Record<XT, YT>) -> Result<YT> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => return Ok(*label),
                Self::Decision {
                    attribute,
                    threshold,
                    left,
                    right,
                } => {
                    node = if record.numeric_value(attribute)? <= *threshold {
                        &**left
                    } else {
                        &**right
                    };
                }
            }
        }
    }
}
