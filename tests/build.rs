use anyhow::{Context, Result};
use filetree::{build, LinkError, NodeIdx, NodeKind, Record, Tree};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::error::Error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn node(tree: &Tree<u32>, id: u32) -> Result<NodeIdx> {
    tree.find_by_id(&id)
        .with_context(|| format!("node {} is missing", id))
}

#[test]
fn directory_with_one_file() -> Result<()> {
    init_tracing();

    let tree = build([
        Record::directory(1, "root"),
        Record::leaf(2, "child.txt").with_parent(1),
    ])?;

    let root = node(&tree, 1)?;
    let child = node(&tree, 2)?;

    assert_eq!(2, tree.len());
    assert_eq!(vec![root], tree.root_nodes().collect::<Vec<_>>());
    assert_eq!(&[child], tree[root].children());
    assert_eq!(Some(root), tree[child].parent());
    assert_eq!("child.txt", tree[child].name());
    assert_eq!(NodeKind::Leaf, tree[child].kind());

    Ok(())
}

#[test]
fn child_of_leaf_aborts_build() {
    init_tracing();

    let err = build([
        Record::leaf(1, "a"),
        Record::directory(2, "b").with_parent(1),
    ])
    .unwrap_err();

    assert_eq!(2, err.id);
    assert_eq!("b", err.name);
    assert!(matches!(err.source, LinkError::InvalidOperation { .. }));

    let source = err.source().expect("build error should carry its cause");

    assert_eq!(
        "cannot add child to non-directory node NodeIdx(0)",
        source.to_string()
    );
}

#[test]
fn unknown_parent_makes_a_root() -> Result<()> {
    init_tracing();

    let tree = build([
        Record::directory(1, "a"),
        Record::leaf(2, "b").with_parent(42),
    ])?;

    assert_eq!(
        vec![node(&tree, 1)?, node(&tree, 2)?],
        tree.root_nodes().collect::<Vec<_>>()
    );

    Ok(())
}

#[test]
fn parent_listed_after_child_is_not_resolved() -> Result<()> {
    init_tracing();

    let tree = build([
        Record::leaf(2, "b").with_parent(1),
        Record::directory(1, "a"),
    ])?;

    let a = node(&tree, 1)?;
    let b = node(&tree, 2)?;

    assert!(tree[a].children().is_empty());
    assert!(tree[b].is_root());

    Ok(())
}

#[test]
fn empty_input_gives_empty_tree() -> Result<()> {
    let tree = build(Vec::<Record<u32>>::new())?;

    assert!(tree.is_empty());
    assert_eq!(0, tree.root_nodes().count());

    Ok(())
}

#[rstest]
#[case::flat(&[(1, None), (2, None), (3, None)], &[1, 2, 3])]
#[case::nested(&[(1, None), (2, Some(1)), (3, Some(2))], &[1])]
#[case::forest(&[(1, None), (2, Some(1)), (3, None), (4, Some(3))], &[1, 3])]
#[case::dangling(&[(1, None), (2, Some(9)), (3, Some(2))], &[1, 2])]
fn roots_keep_input_order(#[case] input: &[(u32, Option<u32>)], #[case] expected: &[u32]) {
    let records = input.iter().map(|&(id, parent_id)| Record {
        parent_id,
        ..Record::directory(id, format!("dir{id}"))
    });

    let tree = build(records).unwrap();

    let roots: Vec<_> = tree
        .root_nodes()
        .map(|idx| *tree[idx].id())
        .collect();

    assert_eq!(expected, roots.as_slice());
}

#[test]
fn duplicate_ids_resolve_to_first_node() -> Result<()> {
    let tree = build([
        Record::directory(1, "first"),
        Record::directory(1, "second"),
        Record::leaf(2, "file").with_parent(1),
    ])?;

    let first = node(&tree, 1)?;
    let file = node(&tree, 2)?;

    assert_eq!("first", tree[first].name());
    assert_eq!(Some(first), tree[file].parent());
    assert_eq!(2, tree.root_nodes().count());

    Ok(())
}

#[test]
fn string_ids_and_type_tags() -> Result<()> {
    let input = [
        ("src", "DIRECTORY", None),
        ("main", "FILE", Some("src")),
        ("lib", "DIRECTORY", Some("src")),
        ("mod", "FILE", Some("lib")),
    ];

    let mut records = Vec::new();

    for (id, tag, parent_id) in input {
        let kind: NodeKind = tag.parse()?;

        records.push(Record {
            parent_id,
            ..Record::new(id, id, kind)
        });
    }

    let tree = build(records)?;

    assert_eq!("src/\n  main\n  lib/\n    mod\n", tree.to_string());

    let module = tree.find_by_id(&"mod").context("mod is missing")?;

    assert_eq!(std::path::Path::new("src/lib/mod"), tree.path(module));

    Ok(())
}
