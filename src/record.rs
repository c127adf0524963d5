use crate::NodeKind;

/// Flat input of [`crate::build()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<I> {
    pub id: I,
    pub name: String,
    pub kind: NodeKind,

    /// Id of the parent record; unresolvable ids make this record a root
    pub parent_id: Option<I>,
}

impl<I> Record<I> {
    pub fn new(id: I, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            parent_id: None,
        }
    }

    pub fn directory(id: I, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Directory)
    }

    pub fn leaf(id: I, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Leaf)
    }

    pub fn with_parent(self, parent_id: I) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..self
        }
    }
}
