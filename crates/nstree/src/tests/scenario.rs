use crate::error::Error;
use crate::root::Root;
use crate::tree_format::format_tree;

#[test]
fn test_end_to_end() {
    let mut root = Root::new();
    root.create_folder_path("/root/files").unwrap();
    root.create_file_path("/root/files", "main.txt", "hello world")
        .unwrap();

    assert_eq!(
        root.read_file_path("/root/files/main.txt").unwrap(),
        b"hello world"
    );
    assert_eq!(
        root.read_file_path("/root/files/missing.txt"),
        Err(Error::FileNotFound("/root/files/missing.txt".to_string()))
    );

    // root folder, root, files, main.txt
    assert_eq!(root.cleanup(), 4);
}

#[test]
fn test_tree_rendering() {
    let mut root = Root::new();
    root.create_file_path("/root/files", "main.txt", "hello world")
        .unwrap();
    root.create_folder_path("/tmp").unwrap();

    let output = format_tree(&root.tree().unwrap());
    assert_eq!(
        output,
        "/\n├─┬ root/\n│ └─┬ files/\n│   └── main.txt (11 bytes)\n└── tmp/\n"
    );
}

#[test]
fn test_cleanup_empty() {
    assert_eq!(Root::new().cleanup(), 1);
    assert_eq!(Root::default().node_count(), 1);
}

#[test]
fn test_cleanup_counts_removed_nodes_once() {
    let mut root = Root::new();
    root.create_file_path("/a/b", "f", "x").unwrap();
    root.create_file_path("/c", "g", "y").unwrap();
    let a = root.lookup_folder_path("/a").unwrap();
    root.remove_folder(a, "b").unwrap();

    // root folder, a, c, g
    assert_eq!(root.cleanup(), 4);
}
