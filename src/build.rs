use crate::{BuildError, Node, Record, Tree};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Builds a tree out of flat records in a single pass.
///
/// Each record's `parent_id` is looked up among the nodes created so far;
/// when nothing matches (e.g. the parent comes later in the input), the
/// record becomes a root. The first record that can't be linked aborts the
/// whole build.
///
/// ```
/// use filetree::{build, Record};
///
/// let tree = build([
///     Record::directory(1, "root"),
///     Record::leaf(2, "child.txt").with_parent(1),
/// ])
/// .unwrap();
///
/// let root = tree.find_by_id(&1).unwrap();
/// let child = tree.find_by_id(&2).unwrap();
///
/// assert_eq!(vec![root], tree.root_nodes().collect::<Vec<_>>());
/// assert_eq!(&[child], tree[root].children());
/// ```
#[instrument(skip_all)]
pub fn build<I>(records: impl IntoIterator<Item = Record<I>>) -> Result<Tree<I>, BuildError<I>>
where
    I: PartialEq + Debug,
{
    let mut tree = Tree::new();

    for record in records {
        let parent = record.parent_id.and_then(|parent_id| {
            let parent = tree.find_by_id(&parent_id);

            if parent.is_none() {
                debug!(
                    "{:?}: parent {:?} not found, treating as root",
                    record.id, parent_id
                );
            }

            parent
        });

        let node = Node::new(record.id, record.name, record.kind);

        tree.insert(node, parent).map_err(|(node, source)| {
            let (id, name) = node.into_id_and_name();

            BuildError { id, name, source }
        })?;
    }

    debug!("built tree with {} node(s)", tree.len());

    Ok(tree)
}
