/// Slot of the root folder; its subfolders are the top-level folders.
pub const ROOT_ID: NodeID = NodeID {
    slot: 0,
    generation: 0,
};

/// Identifies a node by its store slot and the generation of that slot.
///
/// A slot's generation advances each time its node is released, so an id
/// kept past removal never matches the node that later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeID {
    slot: usize,
    generation: u32,
}

impl NodeID {
    pub(crate) fn new(slot: usize, generation: u32) -> Self {
        Self { slot, generation }
    }

    #[must_use]
    pub fn slot(self) -> usize {
        self.slot
    }

    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn is_root(self) -> bool {
        self == ROOT_ID
    }
}

impl std::fmt::Display for NodeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}.{}", self.slot, self.generation)
    }
}

/// Handle to a folder node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderID(pub(crate) NodeID);

/// Handle to a file node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileID(pub(crate) NodeID);

impl FolderID {
    #[must_use]
    pub fn node_id(self) -> NodeID {
        self.0
    }
}

impl FileID {
    #[must_use]
    pub fn node_id(self) -> NodeID {
        self.0
    }
}

impl std::fmt::Display for FolderID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "folder {}", self.0)
    }
}

impl std::fmt::Display for FileID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file {}", self.0)
    }
}

/// A leaf holding its content whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    filename: String,
    content: Vec<u8>,
}

/// A named folder owning its files and subfolders.
///
/// Both collections keep insertion order and are not deduplicated by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    name: String,
    files: Vec<FileID>,
    subfolders: Vec<FolderID>,
}

/// Contents of one store slot.
#[derive(Debug)]
pub(crate) enum Node {
    File(File),
    Folder(Folder),
}

impl File {
    pub(crate) fn new<C: AsRef<[u8]>>(filename: &str, content: C) -> Self {
        Self {
            filename: filename.to_string(),
            content: content.as_ref().to_vec(),
        }
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Folder {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File handles in insertion order.
    pub fn files(&self) -> impl Iterator<Item = FileID> + '_ {
        self.files.iter().copied()
    }

    /// Subfolder handles in insertion order.
    pub fn subfolders(&self) -> impl Iterator<Item = FolderID> + '_ {
        self.subfolders.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subfolders.is_empty()
    }

    pub(crate) fn push_file(&mut self, id: FileID) {
        self.files.push(id);
    }

    pub(crate) fn push_subfolder(&mut self, id: FolderID) {
        self.subfolders.push(id);
    }

    /// Detaches `id` from the file list, matching by identity.
    pub(crate) fn take_file(&mut self, id: FileID) -> Option<FileID> {
        let pos = self.files.iter().position(|f| *f == id)?;
        Some(self.files.remove(pos))
    }

    /// Detaches the subfolder at `pos`, keeping the order of the rest.
    pub(crate) fn take_subfolder_at(&mut self, pos: usize) -> FolderID {
        self.subfolders.remove(pos)
    }
}

impl Node {
    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(f) => Some(f),
            Node::Folder(_) => None,
        }
    }

    #[must_use]
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(d) => Some(d),
            Node::File(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Node::Folder(d) => Some(d),
            Node::File(_) => None,
        }
    }
}
