use crate::error::*;
use crate::node::*;

/// One arena cell. `generation` advances whenever the node is released.
#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena owning every node of one tree.
///
/// Released slots go on a free list and are reused by later nodes under a
/// new generation, so storage follows the live node count while stale
/// handles still resolve to `NotFound`.
#[derive(Debug)]
pub(crate) struct Store {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
}

impl Store {
    /// Creates a store holding only the unnamed root folder.
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: ROOT_ID.generation(),
                node: Some(Node::Folder(Folder::new(""))),
            }],
            free: Vec::new(),
            live: 1,
        }
    }

    fn add_node(&mut self, node: Node) -> NodeID {
        self.live += 1;

        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.node = Some(node);
                return NodeID::new(index, slot.generation);
            }
        }

        let id = NodeID::new(self.slots.len(), 0);
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        id
    }

    pub(crate) fn add_folder(&mut self, name: &str) -> FolderID {
        FolderID(self.add_node(Node::Folder(Folder::new(name))))
    }

    pub(crate) fn add_file<C: AsRef<[u8]>>(&mut self, filename: &str, content: C) -> FileID {
        FileID(self.add_node(Node::File(File::new(filename, content))))
    }

    fn get(&self, id: NodeID) -> Option<&Node> {
        self.slots
            .get(id.slot())
            .filter(|s| s.generation == id.generation())
            .and_then(|s| s.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeID) -> Option<&mut Node> {
        self.slots
            .get_mut(id.slot())
            .filter(|s| s.generation == id.generation())
            .and_then(|s| s.node.as_mut())
    }

    pub(crate) fn folder(&self, id: FolderID) -> Result<&Folder> {
        self.get(id.0)
            .and_then(Node::as_folder)
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    pub(crate) fn folder_mut(&mut self, id: FolderID) -> Result<&mut Folder> {
        self.get_mut(id.0)
            .and_then(Node::as_folder_mut)
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    pub(crate) fn file(&self, id: FileID) -> Result<&File> {
        self.get(id.0)
            .and_then(Node::as_file)
            .ok_or_else(|| Error::not_found(id.to_string()))
    }

    fn take(&mut self, id: NodeID) -> Option<Node> {
        let slot = self
            .slots
            .get_mut(id.slot())
            .filter(|s| s.generation == id.generation())?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.slot());
        self.live -= 1;
        Some(node)
    }

    /// Releases a single file node. The caller has already detached it.
    pub(crate) fn release_file(&mut self, id: FileID) -> Option<File> {
        match self.take(id.0)? {
            Node::File(f) => Some(f),
            // FileID is only minted for file slots
            Node::Folder(_) => None,
        }
    }

    /// Releases a folder and everything it transitively owns.
    ///
    /// Returns the number of nodes released, the folder itself included.
    pub(crate) fn release_folder(&mut self, id: FolderID) -> usize {
        let mut released = 0;
        let mut pending = vec![id.0];

        while let Some(nid) = pending.pop() {
            match self.take(nid) {
                Some(Node::Folder(folder)) => {
                    pending.extend(folder.files().map(FileID::node_id));
                    pending.extend(folder.subfolders().map(FolderID::node_id));
                    released += 1;
                }
                Some(Node::File(_)) => released += 1,
                None => {}
            }
        }
        released
    }

    /// Number of live nodes, root included.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
