//! In-memory file trees built out of flat `{ id, name, kind, parent_id }`
//! records.
//!
//! Every [`Node`] is owned by its [`Tree`]; nodes point at their parent and
//! children through [`NodeIdx`] handles.

mod build;
mod error;
mod node;
mod node_idx;
mod node_kind;
mod record;
mod tree;
mod walk;

pub use self::build::*;
pub use self::error::*;
pub use self::node::*;
pub use self::node_idx::*;
pub use self::node_kind::*;
pub use self::record::*;
pub use self::tree::*;
pub use self::walk::*;
