/// Recursive tree induction
pub mod builder;
/// Decision tree classifier
pub mod classifier;
/// Entropy, information gain and majority label
pub mod impurity;
/// Tree node and traversal
pub mod node;
/// Training parameters
pub mod params;
/// Text rendering of a trained tree
pub mod printer;
/// Best split on a single attribute
pub mod split;

pub use classifier::{predict, DecisionTreeClassifier};
pub use node::TreeNode;
pub use params::TreeParams;
