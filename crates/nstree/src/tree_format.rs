//! Box-drawing rendering of a namespace.
//!
//! ```
//! use nstree::tree_format::{TreeNode, format_tree};
//!
//! let mut files = TreeNode::new("files/");
//! files.push(TreeNode::new("main.txt (11 bytes)"));
//! let mut top = TreeNode::new("root/");
//! top.push(files);
//! let mut root = TreeNode::new("/");
//! root.push(top);
//!
//! assert_eq!(
//!     format_tree(&root),
//!     "/\n└─┬ root/\n  └─┬ files/\n    └── main.txt (11 bytes)\n"
//! );
//! ```
//!
//! Building, rendering and dropping all use explicit stacks, so arbitrarily
//! deep namespaces render without exhausting the thread stack.

use std::fmt;

/// One labelled line of a rendered tree and the lines nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Writes every line below the label to `out`.
    fn write_children<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        // Shared prefix; each frame remembers how much of it belongs to its level
        let mut prefix = String::new();
        let mut stack = vec![(self.children.iter(), 0)];

        while let Some((siblings, base)) = stack.last_mut() {
            prefix.truncate(*base);
            let Some(child) = siblings.next() else {
                _ = stack.pop();
                continue;
            };
            let is_last = siblings.as_slice().is_empty();

            let connector = match (is_last, child.children.is_empty()) {
                (true, true) => "└──",
                (true, false) => "└─┬",
                (false, true) => "├──",
                (false, false) => "├─┬",
            };
            writeln!(out, "{prefix}{connector} {}", child.label)?;

            if !child.children.is_empty() {
                prefix.push(if is_last { ' ' } else { '│' });
                prefix.push(' ');
                stack.push((child.children.iter(), prefix.len()));
            }
        }
        Ok(())
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Flatten descendants so no drop nests more than one level
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        self.write_children(f)
    }
}

/// Renders `root` and its descendants, one node per line.
#[must_use]
pub fn format_tree(root: &TreeNode) -> String {
    root.to_string()
}
