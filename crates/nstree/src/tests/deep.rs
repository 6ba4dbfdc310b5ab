use crate::path;
use crate::root::Root;

const DEPTH: usize = 10_000;

#[test]
fn test_deep_path_create_read_walk() {
    let mut root = Root::new();
    let folder = "/d".repeat(DEPTH);
    let f = root.create_file_path(&folder, "f", "x").unwrap();
    assert_eq!(root.node_count(), DEPTH + 2);

    let file_path = format!("{folder}/f");
    assert_eq!(root.find_file_path(&file_path).unwrap(), f);
    assert_eq!(root.read_to_string(&file_path).unwrap(), "x");

    let walked = root.walk_files().unwrap();
    assert_eq!(walked.len(), 1);
    assert_eq!(walked[0], (file_path.clone(), f));
    assert_eq!(path::split(&walked[0].0).len(), DEPTH + 1);

    assert_eq!(root.cleanup(), DEPTH + 2);
}

#[test]
fn test_deep_path_tree() {
    let mut root = Root::new();
    _ = root.create_file_path(&"/d".repeat(DEPTH), "f", "x").unwrap();
    _ = root.create_folder_path("/side").unwrap();

    let tree = root.tree().unwrap();
    assert_eq!(tree.label(), "/");
    assert_eq!(tree.children().len(), 2);

    let mut depth = 0;
    let mut node = &tree.children()[0];
    while let Some(next) = node.children().first() {
        assert_eq!(node.label(), "d/");
        node = next;
        depth += 1;
    }
    assert_eq!(depth, DEPTH);
    assert_eq!(node.label(), "f (1 bytes)");
    assert_eq!(tree.children()[1].label(), "side/");
}

#[test]
fn test_remove_deep_folder() {
    let mut root = Root::new();
    _ = root.create_file_path(&"/d".repeat(DEPTH), "f", "x").unwrap();
    _ = root.create_folder_path("/keep").unwrap();

    root.remove_folder(root.root_id(), "d").unwrap();
    assert_eq!(root.node_count(), 2);
    assert!(root.walk_files().unwrap().is_empty());
}
