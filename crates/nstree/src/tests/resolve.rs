use crate::error::Error;
use crate::root::Root;

#[test]
fn test_create_folder_path() {
    let mut root = Root::new();
    let files = root.create_folder_path("/root/files").unwrap();

    assert_eq!(root.folder(files).unwrap().name(), "files");
    assert_eq!(root.lookup_folder_path("/root/files").unwrap(), files);
    // root folder, "root", "files"
    assert_eq!(root.node_count(), 3);
}

#[test]
fn test_create_folder_path_is_idempotent() {
    let mut root = Root::new();
    let first = root.create_folder_path("/a/b").unwrap();
    let second = root.create_folder_path("/a/b").unwrap();
    assert_eq!(first, second);

    let top = root.top_level().unwrap();
    assert_eq!(top.len(), 1);
    let a = root.folder(top[0]).unwrap();
    assert_eq!(a.name(), "a");
    let subs: Vec<_> = a.subfolders().collect();
    assert_eq!(subs, vec![first]);
    assert_eq!(root.node_count(), 3);
}

#[test]
fn test_create_folder_path_tolerates_slashes() {
    let mut root = Root::new();
    let b = root.create_folder_path("a/b").unwrap();
    assert_eq!(root.create_folder_path("//a///b/").unwrap(), b);
    assert_eq!(root.lookup_folder_path("/a/b/").unwrap(), b);
}

#[test]
fn test_create_folder_path_shares_prefix() {
    let mut root = Root::new();
    let b = root.create_folder_path("/a/b").unwrap();
    let c = root.create_folder_path("/a/c").unwrap();
    assert_ne!(b, c);

    let a = root.lookup_folder_path("/a").unwrap();
    let subs: Vec<_> = root.folder(a).unwrap().subfolders().collect();
    assert_eq!(subs, vec![b, c]);
}

#[test]
fn test_empty_path_is_invalid() {
    let mut root = Root::new();
    assert_eq!(root.create_folder_path(""), Err(Error::invalid_path("")));
    assert_eq!(root.create_folder_path("///"), Err(Error::invalid_path("///")));
    assert_eq!(root.lookup_folder_path("/"), Err(Error::invalid_path("/")));
    assert_eq!(
        root.create_file_path("/", "f.txt", "x"),
        Err(Error::invalid_path("/"))
    );
    assert_eq!(root.node_count(), 1);
}

#[test]
fn test_lookup_never_creates() {
    let mut root = Root::new();
    root.create_folder_path("/a").unwrap();

    assert_eq!(
        root.lookup_folder_path("/a/b/c"),
        Err(Error::not_found("/a/b/c"))
    );
    assert_eq!(root.node_count(), 2);
    assert!(root.folder(root.lookup_folder_path("/a").unwrap()).unwrap().is_empty());
}

#[test]
fn test_dot_segments_are_names() {
    let mut root = Root::new();
    let dots = root.create_folder_path("/a/..").unwrap();
    assert_eq!(root.folder(dots).unwrap().name(), "..");
    assert!(root.lookup_folder_path("/a/../a").is_err());
}
