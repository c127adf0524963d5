use crate::{NodeIdx, Tree};
use std::fmt;
use std::path::PathBuf;

impl<I> Tree<I> {
    /// Pre-order, depth-first walk over every root (in creation order) and
    /// their descendants (in child order).
    pub fn walk(&self) -> Walk<'_, I> {
        let mut stack: Vec<_> = self.root_nodes().map(|idx| (idx, 0)).collect();

        stack.reverse();

        Walk { tree: self, stack }
    }

    /// Same as [`Self::walk()`], but limited to `start` and its descendants.
    pub fn walk_from(&self, start: NodeIdx) -> Walk<'_, I> {
        Walk {
            tree: self,
            stack: vec![(start, 0)],
        }
    }

    /// Returns handles from the node's parent up to its root.
    pub fn ancestors(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        let mut ancestors = Vec::new();
        let mut cursor = self[idx].parent();

        while let Some(parent) = cursor {
            ancestors.push(parent);
            cursor = self[parent].parent();
        }

        ancestors
    }

    pub fn depth(&self, idx: NodeIdx) -> usize {
        self.ancestors(idx).len()
    }

    /// Joins names from the node's root down to the node itself.
    pub fn path(&self, idx: NodeIdx) -> PathBuf {
        let mut names: Vec<_> = self
            .ancestors(idx)
            .into_iter()
            .map(|parent| self[parent].name())
            .collect();

        names.reverse();
        names.push(self[idx].name());
        names.into_iter().collect()
    }
}

pub struct Walk<'a, I> {
    tree: &'a Tree<I>,
    stack: Vec<(NodeIdx, usize)>,
}

impl<I> Walk<'_, I> {
    /// Yields the next node together with its depth, counted from where the
    /// walk started.
    pub fn next_with_depth(&mut self) -> Option<(NodeIdx, usize)> {
        let (idx, depth) = self.stack.pop()?;

        self.stack.extend(
            self.tree[idx]
                .children()
                .iter()
                .rev()
                .map(|child| (*child, depth + 1)),
        );

        Some((idx, depth))
    }
}

impl<I> Iterator for Walk<'_, I> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(idx, _)| idx)
    }
}

/// Indented outline of the whole tree; directories get a trailing slash.
impl<I> fmt::Display for Tree<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut walk = self.walk();

        while let Some((idx, depth)) = walk.next_with_depth() {
            let node = &self[idx];
            let suffix = if node.is_directory() { "/" } else { "" };

            writeln!(
                f,
                "{:indent$}{}{}",
                "",
                node.name(),
                suffix,
                indent = 2 * depth,
            )?;
        }

        Ok(())
    }
}
