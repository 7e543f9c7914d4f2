use std::fmt::{self, Display, Formatter, Write};

use super::node::TreeNode;
use crate::data::record::ClassLabel;

/// Renders a tree depth-first, left branch before right, one rule or leaf per line.
///
/// ```text
/// [IF x <= 2.5]
///   Leaf: 0
/// [ELSE x > 2.5]
///   Leaf: 1
/// ```
#[derive(Clone, Debug)]
pub struct TreePrinter {
    indent: String,
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::with_indent("  ")
    }

    /// Uses `indent` once per depth level.
    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent: indent.to_string(),
        }
    }

    pub fn write<YT: ClassLabel, W: Write>(&self, out: &mut W, node: &TreeNode<YT>) -> fmt::Result {
        self.write_node(out, node, 0)
    }

    pub fn render<YT: ClassLabel>(&self, node: &TreeNode<YT>) -> String {
        let mut out = String::new();
        // Writing into a String can't fail.
        let _ = self.write(&mut out, node);
        out
    }

    fn write_node<YT: ClassLabel, W: Write>(
        &self,
        out: &mut W,
        node: &TreeNode<YT>,
        depth: usize,
    ) -> fmt::Result {
        let indent = self.indent.repeat(depth);
        match node {
            TreeNode::Leaf { label } => writeln!(out, "{}Leaf: {}", indent, label),
            TreeNode::Decision {
                attribute,
                threshold,
                left,
                right,
            } => {
                writeln!(out, "{}[IF {} <= {}]", indent, attribute, threshold)?;
                self.write_node(out, left, depth + 1)?;
                writeln!(out, "{}[ELSE {} > {}]", indent, attribute, threshold)?;
                self.write_node(out, right, depth + 1)
            }
        }
    }
}

impl<YT: ClassLabel> Display for TreeNode<YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new().write(f, self)
    }
}
