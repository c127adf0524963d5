use crate::ParseKindError;
use std::fmt;
use std::str::FromStr;

/// Whether a node may own children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,

    /// A file; never has children
    Leaf,
}

impl NodeKind {
    pub fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Directory => write!(f, "Directory"),
            NodeKind::Leaf => write!(f, "Leaf"),
        }
    }
}

impl FromStr for NodeKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIRECTORY" | "Directory" | "directory" => Ok(NodeKind::Directory),
            "FILE" | "File" | "file" | "LEAF" | "Leaf" | "leaf" => Ok(NodeKind::Leaf),
            _ => Err(ParseKindError(s.to_owned())),
        }
    }
}
