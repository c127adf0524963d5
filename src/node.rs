use crate::{LinkError, NodeIdx, NodeKind};

/// Single element of a [`crate::Tree`].
///
/// Nodes refer to each other through [`NodeIdx`] handles; the tree is the
/// only owner. Identity, name and kind never change after creation, while
/// `parent` and `children` are only ever touched by
/// [`crate::Tree::link_under()`].
#[derive(Clone, Debug)]
pub struct Node<I> {
    id: I,
    name: String,
    kind: NodeKind,
    parent: Option<NodeIdx>,
    children: Vec<NodeIdx>,
}

impl<I> Node<I> {
    pub(crate) fn new(id: I, name: String, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            kind,
            parent: None,
            children: Default::default(),
        }
    }

    pub(crate) fn into_id_and_name(self) -> (I, String) {
        (self.id, self.name)
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Children in the order they got linked.
    pub fn children(&self) -> &[NodeIdx] {
        &self.children
    }

    /// Compares by handle, so two distinct nodes sharing an `id` are never
    /// confused with each other.
    pub fn has_child(&self, child: NodeIdx) -> bool {
        self.children.iter().any(|chd| *chd == child)
    }

    /// Checks whether `child` may be appended to this node's children;
    /// `this` is this node's own handle.
    pub(crate) fn check_adopt(&self, this: NodeIdx, child: NodeIdx) -> Result<(), LinkError> {
        if !self.kind.is_directory() {
            return Err(LinkError::InvalidOperation { parent: this });
        }

        if self.has_child(child) {
            return Err(LinkError::DuplicateChild {
                parent: this,
                child,
            });
        }

        Ok(())
    }

    pub(crate) fn push_child(&mut self, child: NodeIdx) {
        self.children.push(child);
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIdx) {
        self.parent = Some(parent);
    }
}
