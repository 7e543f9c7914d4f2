//! Recursive tree induction
use rayon::prelude::*;
use tracing::debug;

use super::impurity::{entropy, is_pure, majority_label};
use super::node::TreeNode;
use super::params::TreeParams;
use super::split::{evaluate, SplitCandidate};
use crate::data::record::{ClassLabel, Number, Record};
use crate::error::Result;

/// Grows a tree by repeatedly picking the attribute split with the highest information gain.
pub struct TreeBuilder<'p> {
    params: &'p TreeParams,
}

impl<'p> TreeBuilder<'p> {
    pub fn new(params: &'p TreeParams) -> Self {
        Self { params }
    }

    /// Builds the subtree for `records` found at `depth`.
    ///
    /// Every attribute in `attribute_names` stays a candidate at every depth, so the same
    /// attribute may be split on again further down.
    ///
    /// # Errors
    ///
    /// Fails if `records` is empty or a record lacks one of `attribute_names`. An error in
    /// any attribute evaluation fails the whole build.
    pub fn build<XT: Number, YT: ClassLabel>(
        &self,
        records: &[&Record<XT, YT>],
        attribute_names: &[String],
        depth: u16,
    ) -> Result<TreeNode<YT>> {
        let label = majority_label(records)?;

        if self.params.depth_reached(depth) || (self.params.stop_when_pure() && is_pure(records)) {
            return Ok(TreeNode::leaf(label));
        }

        let best_split = match self.best_split(records, attribute_names)? {
            Some(split) if !split.left.is_empty() && !split.right.is_empty() => split,
            _ => return Ok(TreeNode::leaf(label)),
        };

        debug!(
            depth,
            attribute = %best_split.attribute,
            threshold = best_split.threshold,
            gain = best_split.gain,
            left = best_split.left.len(),
            right = best_split.right.len(),
            "split node"
        );

        let SplitCandidate {
            attribute,
            threshold,
            left,
            right,
            ..
        } = best_split;
        let child_depth = depth.saturating_add(1);

        let (left_node, right_node) = if self.params.parallel_subtrees() {
            rayon::join(
                || self.build(&left, attribute_names, child_depth),
                || self.build(&right, attribute_names, child_depth),
            )
        } else {
            (
                self.build(&left, attribute_names, child_depth),
                self.build(&right, attribute_names, child_depth),
            )
        };

        Ok(TreeNode::decision(attribute, threshold, left_node?, right_node?))
    }

    /// Evaluates every attribute and returns the best split among them.
    ///
    /// All evaluations complete before the choice is made, so the outcome is the same whether
    /// they ran in parallel or not.
    pub fn best_split<'a, XT: Number, YT: ClassLabel>(
        &self,
        records: &[&'a Record<XT, YT>],
        attribute_names: &[String],
    ) -> Result<Option<SplitCandidate<'a, XT, YT>>> {
        let base_entropy = entropy(records);

        let candidates = if self.params.parallel() {
            attribute_names
                .par_iter()
                .map(|attribute| evaluate(records, attribute, base_entropy))
                .collect::<Result<Vec<_>>>()?
        } else {
            attribute_names
                .iter()
                .map(|attribute| evaluate(records, attribute, base_entropy))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(select_best(candidates))
    }
}

/// Picks the candidate with the strictly greatest gain; the earliest one wins ties.
pub fn select_best<'a, XT: Number, YT: ClassLabel>(
    candidates: Vec<Option<SplitCandidate<'a, XT, YT>>>,
) -> Option<SplitCandidate<'a, XT, YT>> {
    candidates
        .into_iter()
        .flatten()
        .fold(None, |best: Option<SplitCandidate<'a, XT, YT>>, candidate| match best {
            Some(best) if best.gain >= candidate.gain => Some(best),
            _ => Some(candidate),
        })
}
