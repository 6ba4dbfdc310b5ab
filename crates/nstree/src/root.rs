use diagnostics::{log_debug, log_info};

use crate::error::*;
use crate::node::*;
use crate::path;
use crate::store::Store;
use crate::tree_format::TreeNode;

/// The caller-owned entry point of a namespace tree.
///
/// Every operation takes the path as written by the caller and splits it
/// into segments. Names are matched exactly; when a level holds several
/// entries with the same name the first one in insertion order wins.
#[derive(Debug)]
pub struct Root {
    store: Store,
}

impl Default for Root {
    fn default() -> Self {
        Self::new()
    }
}

impl Root {
    /// Creates an empty tree with no top-level folders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Store::new(),
        }
    }

    /// Handle of the root folder, whose subfolders are the top-level folders.
    ///
    /// Pass it to `remove_folder` to remove a top-level folder.
    #[must_use]
    pub fn root_id(&self) -> FolderID {
        FolderID(ROOT_ID)
    }

    pub fn folder(&self, id: FolderID) -> Result<&Folder> {
        self.store.folder(id)
    }

    pub fn file(&self, id: FileID) -> Result<&File> {
        self.store.file(id)
    }

    /// Top-level folders in insertion order.
    pub fn top_level(&self) -> Result<Vec<FolderID>> {
        Ok(self.folder(self.root_id())?.subfolders().collect())
    }

    /// Number of live nodes, the root folder included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.live()
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.store.slot_count()
    }

    /// First subfolder of `parent` named `name`, with its position.
    fn find_subfolder(&self, parent: FolderID, name: &str) -> Result<Option<(usize, FolderID)>> {
        for (pos, child) in self.folder(parent)?.subfolders().enumerate() {
            if self.folder(child)?.name() == name {
                return Ok(Some((pos, child)));
            }
        }
        Ok(None)
    }

    /// Walks `segments` from the root without creating anything.
    fn lookup_segments(&self, segments: &[&str]) -> Result<Option<FolderID>> {
        let mut current = self.root_id();
        for &name in segments {
            match self.find_subfolder(current, name)? {
                Some((_, child)) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Walks `segments` from the root, appending any folder that is missing.
    fn create_segments(&mut self, segments: &[&str]) -> Result<FolderID> {
        let mut current = self.root_id();
        for &name in segments {
            current = match self.find_subfolder(current, name)? {
                Some((_, child)) => child,
                None => {
                    let child = self.store.add_folder(name);
                    self.store.folder_mut(current)?.push_subfolder(child);
                    log_debug!(
                        "Created folder {name} under node {parent}",
                        name: name,
                        parent: current.node_id().slot()
                    );
                    child
                }
            };
        }
        Ok(current)
    }

    /// Resolves a folder path, creating every missing folder along it.
    ///
    /// Idempotent: resolving the same path again reaches the same folder
    /// and creates nothing.
    pub fn create_folder_path(&mut self, path: &str) -> Result<FolderID> {
        let segments = path::split(path);
        if segments.is_empty() {
            return Err(Error::invalid_path(path));
        }
        self.create_segments(&segments)
    }

    /// Resolves an existing folder path. Never creates anything.
    pub fn lookup_folder_path(&self, path: &str) -> Result<FolderID> {
        let segments = path::split(path);
        if segments.is_empty() {
            return Err(Error::invalid_path(path));
        }
        self.lookup_segments(&segments)?
            .ok_or_else(|| Error::not_found(path))
    }

    /// Locates the file addressed by `path`.
    ///
    /// All segments but the last name the containing folder and the last is
    /// the filename, so a path needs at least two segments to match. A
    /// single-segment path names a top-level folder and never finds a file.
    pub fn find_file_path(&self, path: &str) -> Result<FileID> {
        let (folders, filename) = path::split_file(path).ok_or_else(|| Error::not_found(path))?;
        let Some(folder) = self.lookup_segments(&folders)? else {
            return Err(Error::not_found(path));
        };

        for id in self.folder(folder)?.files() {
            if self.file(id)?.filename() == filename {
                return Ok(id);
            }
        }
        Err(Error::not_found(path))
    }

    /// Creates a file named `filename` in the folder at `folder_path`,
    /// creating that folder and its ancestors as needed.
    ///
    /// Duplicate filenames are appended alongside the existing file; lookups
    /// keep returning the earliest one.
    pub fn create_file_path<C: AsRef<[u8]>>(
        &mut self,
        folder_path: &str,
        filename: &str,
        content: C,
    ) -> Result<FileID> {
        let folder = self.create_folder_path(folder_path)?;
        let file = self.store.add_file(filename, content);
        self.store.folder_mut(folder)?.push_file(file);

        log_debug!(
            "Created file {filename} in {folder}",
            filename: filename,
            folder: folder_path
        );
        Ok(file)
    }

    /// Reads the whole content of the file at `path`.
    pub fn read_file_path(&self, path: &str) -> Result<Vec<u8>> {
        match self.find_file_path(path) {
            Ok(id) => Ok(self.file(id)?.content().to_vec()),
            Err(e) if e.is_not_found() => Err(Error::file_not_found(path)),
            Err(e) => Err(e),
        }
    }

    /// Reads the file at `path` as UTF-8 text.
    pub fn read_to_string(&self, path: &str) -> Result<String> {
        let content = self.read_file_path(path)?;
        String::from_utf8(content).map_err(|_| Error::invalid_utf8(path))
    }

    /// True if `path` addresses an existing folder or file.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.lookup_folder_path(path).is_ok() || self.find_file_path(path).is_ok()
    }

    /// Removes `file` from the file list of `folder`, matching by identity.
    ///
    /// Only the direct file list is searched; a file living elsewhere is
    /// reported as `NotFound` and the tree is left untouched.
    pub fn remove_file(&mut self, file: FileID, folder: FolderID) -> Result<()> {
        let detached = self
            .store
            .folder_mut(folder)?
            .take_file(file)
            .ok_or_else(|| Error::not_found(format!("{file} in {folder}")))?;
        self.store
            .release_file(detached)
            .ok_or_else(|| Error::not_found(detached.to_string()))?;

        log_debug!("Removed file node {id}", id: file.node_id().slot());
        Ok(())
    }

    /// Removes the first direct subfolder of `parent` named `name`, releasing
    /// everything beneath it. Nested levels are not searched.
    pub fn remove_folder(&mut self, parent: FolderID, name: &str) -> Result<()> {
        let (pos, _) = self
            .find_subfolder(parent, name)?
            .ok_or_else(|| Error::not_found(format!("{name} in {parent}")))?;
        let detached = self.store.folder_mut(parent)?.take_subfolder_at(pos);
        let released = self.store.release_folder(detached);

        log_debug!(
            "Removed folder {name} ({released} nodes)",
            name: name,
            released: released
        );
        Ok(())
    }

    /// Every file in the tree with its full path, depth first in insertion
    /// order; a folder's files come before its subfolders.
    pub fn walk_files(&self) -> Result<Vec<(String, FileID)>> {
        let mut out = Vec::new();
        let mut segments = Vec::new();
        let mut stack = vec![self.walk_enter(self.root_id(), &mut segments, &mut out)?];

        // One frame per open folder; `segments` holds the names along the stack
        while let Some(pending) = stack.last_mut() {
            let Some(child) = pending.next() else {
                _ = stack.pop();
                _ = segments.pop();
                continue;
            };
            segments.push(self.folder(child)?.name().to_string());
            let frame = self.walk_enter(child, &mut segments, &mut out)?;
            stack.push(frame);
        }
        Ok(out)
    }

    /// Emits the files of `id` and returns its subfolders still to visit.
    fn walk_enter(
        &self,
        id: FolderID,
        segments: &mut Vec<String>,
        out: &mut Vec<(String, FileID)>,
    ) -> Result<std::vec::IntoIter<FolderID>> {
        let folder = self.folder(id)?;
        for file in folder.files() {
            segments.push(self.file(file)?.filename().to_string());
            out.push((path::join(segments.as_slice()), file));
            _ = segments.pop();
        }
        Ok(folder.subfolders().collect::<Vec<_>>().into_iter())
    }

    /// Builds a displayable tree of the whole namespace.
    pub fn tree(&self) -> Result<TreeNode> {
        let mut stack = vec![self.tree_enter(self.root_id(), "/".to_string())?];

        while let Some((_, pending)) = stack.last_mut() {
            if let Some(child) = pending.next() {
                let label = format!("{}/", self.folder(child)?.name());
                let frame = self.tree_enter(child, label)?;
                stack.push(frame);
                continue;
            }
            if let Some((done, _)) = stack.pop() {
                match stack.last_mut() {
                    Some((parent, _)) => parent.push(done),
                    None => return Ok(done),
                }
            }
        }
        Err(Error::not_found(self.root_id().to_string()))
    }

    /// Opens a tree node for `id` holding its file leaves, paired with the
    /// subfolders still to attach.
    fn tree_enter(
        &self,
        id: FolderID,
        label: String,
    ) -> Result<(TreeNode, std::vec::IntoIter<FolderID>)> {
        let folder = self.folder(id)?;
        let mut node = TreeNode::new(label);
        for file in folder.files() {
            let file = self.file(file)?;
            node.push(TreeNode::new(format!(
                "{} ({} bytes)",
                file.filename(),
                file.content().len()
            )));
        }
        Ok((node, folder.subfolders().collect::<Vec<_>>().into_iter()))
    }

    /// Tears the tree down, releasing every folder and file it owns.
    ///
    /// Consumes the root, so teardown happens exactly once. Returns the
    /// number of nodes released, the root folder included. Dropping a root
    /// releases the same nodes without the count.
    pub fn cleanup(mut self) -> usize {
        let root = self.root_id();
        let released = self.store.release_folder(root);
        log_info!("Namespace torn down ({released} nodes)", released: released);
        released
    }
}
