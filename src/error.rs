use crate::NodeIdx;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("{node:?} doesn't belong to this tree")]
    UnknownNode { node: NodeIdx },

    #[error("cannot add child to non-directory node {parent:?}")]
    InvalidOperation { parent: NodeIdx },

    #[error("{child:?} is already a child of {parent:?}")]
    DuplicateChild { parent: NodeIdx, child: NodeIdx },

    /// Parents are assigned once; re-linking under another node would move it
    #[error("{child:?} is already linked under {parent:?}")]
    AlreadyLinked { child: NodeIdx, parent: NodeIdx },

    #[error("linking {child:?} under {parent:?} would create a cycle")]
    WouldCycle { child: NodeIdx, parent: NodeIdx },
}

/// Failure of [`crate::build()`], pointing at the record that couldn't be
/// turned into a node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("couldn't create node {id:?} ({name:?})")]
pub struct BuildError<I: Debug> {
    pub id: I,
    pub name: String,

    #[source]
    pub source: LinkError,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown node kind: {0:?}")]
pub struct ParseKindError(pub String);
