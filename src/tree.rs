use crate::{LinkError, Node, NodeIdx, NodeKind};
use std::ops::Index;
use tracing::{instrument, trace};

/// Arena owning every [`Node`] created through it, in creation order.
#[derive(Clone, Debug)]
pub struct Tree<I> {
    nodes: Vec<Node<I>>,
}

impl<I> Default for Tree<I> {
    fn default() -> Self {
        Self {
            nodes: Default::default(),
        }
    }
}

impl<I> Tree<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: NodeIdx) -> Option<&Node<I>> {
        self.nodes.get(idx.get())
    }

    fn resolve(&self, idx: NodeIdx) -> Result<&Node<I>, LinkError> {
        self.get(idx).ok_or(LinkError::UnknownNode { node: idx })
    }

    /// Every node, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIdx, &Node<I>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeIdx::new(idx), node))
    }

    /// Nodes without a parent, in creation order.
    pub fn root_nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.nodes()
            .filter(|(_, node)| node.is_root())
            .map(|(idx, _)| idx)
    }

    /// Returns the first node (in creation order) carrying given id; ids are
    /// not required to be unique.
    pub fn find_by_id(&self, id: &I) -> Option<NodeIdx>
    where
        I: PartialEq,
    {
        self.nodes()
            .find(|(_, node)| node.id() == id)
            .map(|(idx, _)| idx)
    }

    /// Makes `child` a child of `parent`.
    ///
    /// Fails without touching either node when `parent` is a leaf, when
    /// `child` is already among its children, when `child` already has
    /// another parent, when the link would close a cycle or when either
    /// handle belongs to another tree.
    #[instrument(skip(self))]
    pub fn link_under(&mut self, child: NodeIdx, parent: NodeIdx) -> Result<(), LinkError> {
        let parent_node = self.resolve(parent)?;
        let child_node = self.resolve(child)?;

        parent_node.check_adopt(parent, child)?;

        if let Some(current) = child_node.parent() {
            return Err(LinkError::AlreadyLinked {
                child,
                parent: current,
            });
        }

        if child == parent || self.ancestors(parent).contains(&child) {
            return Err(LinkError::WouldCycle { child, parent });
        }

        self.link_unchecked(child, parent);

        Ok(())
    }

    fn link_unchecked(&mut self, child: NodeIdx, parent: NodeIdx) {
        self.nodes[parent.get()].push_child(child);
        self.nodes[child.get()].set_parent(parent);

        trace!("linked {:?} under {:?}", child, parent);
    }

    /// Creates a node and, if `parent` is given, links it there.
    ///
    /// Either the node gets created and linked, or nothing changes.
    pub fn create_node(
        &mut self,
        id: I,
        name: impl Into<String>,
        kind: NodeKind,
        parent: Option<NodeIdx>,
    ) -> Result<NodeIdx, LinkError> {
        self.insert(Node::new(id, name.into(), kind), parent)
            .map_err(|(_, err)| err)
    }

    /// Same as [`Self::create_node()`], but hands the rejected node back on
    /// failure.
    #[instrument(skip(self, node), fields(name = node.name()))]
    pub(crate) fn insert(
        &mut self,
        node: Node<I>,
        parent: Option<NodeIdx>,
    ) -> Result<NodeIdx, (Node<I>, LinkError)> {
        let idx = NodeIdx::new(self.nodes.len());

        if let Some(parent) = parent {
            let adopted = self
                .resolve(parent)
                .and_then(|parent_node| parent_node.check_adopt(parent, idx));

            if let Err(err) = adopted {
                return Err((node, err));
            }
        }

        self.nodes.push(node);

        if let Some(parent) = parent {
            self.link_unchecked(idx, parent);
        }

        trace!("created node {:?}", idx);

        Ok(idx)
    }
}

/// Panics when given a handle that belongs to another tree.
impl<I> Index<NodeIdx> for Tree<I> {
    type Output = Node<I>;

    fn index(&self, idx: NodeIdx) -> &Self::Output {
        &self.nodes[idx.get()]
    }
}
