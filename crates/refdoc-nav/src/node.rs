//! Navigation tree nodes.
//!
//! A [`NavNode`] owns its children, so a tree assembled bottom-up from
//! literals can never share a node between two parents or link back to an
//! ancestor.

use serde::Serialize;

/// One navigable entry of a documentation site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Display label.
    pub name: String,
    /// Path or absolute URL this node links to.
    pub url: String,
    /// Child entries in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Create a leaf node.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, taking ownership of it.
    #[must_use]
    pub fn with_child(mut self, child: NavNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = NavNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first, pre-order traversal yielding `(depth, node)` pairs.
    ///
    /// The root has depth 0. Siblings are visited in display order.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Number of levels in this tree (1 for a leaf).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth + 1).max().unwrap_or(1)
    }

    /// Total number of nodes in this tree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Find the first node (in traversal order) linking to `url`.
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<&NavNode> {
        self.walk().map(|(_, node)| node).find(|node| node.url == url)
    }
}

/// Iterator returned by [`NavNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a NavNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the first child is popped next
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
