//! Opening on-disk Zarr hierarchies as datasets.
//!
//! A dataset is a root group plus every node reachable beneath it. Opening
//! validates that all node metadata decodes; with
//! [`OpenOptions::consolidated_metadata`] set, the hierarchy is taken from
//! the consolidated metadata stored on the root group instead of listing
//! the store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use zarrs::filesystem::FilesystemStore;
use zarrs::group::Group;
use zarrs::metadata_ext::group::consolidated_metadata::ConsolidatedMetadata;
use zarrs::node::Node;
use zarrs::storage::{ReadableStorageTraits, StoreKey};

use crate::{Error, Result};

/// Store keys that mark an explicit root node (Zarr V3, and V2 groups and
/// arrays).
const ROOT_METADATA_KEYS: [&str; 3] = ["zarr.json", ".zgroup", ".zarray"];

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenOptions {
    /// Require consolidated metadata on the root group and build the
    /// hierarchy from it, without listing the store.
    pub consolidated_metadata: bool,
}

/// Open a filesystem store at `path` and confirm it holds a Zarr hierarchy.
///
/// The path must already exist: [`FilesystemStore::new`] would otherwise
/// create the base directory, and the checking path must never mutate the
/// store.
pub fn open_store(path: &Path) -> Result<Arc<FilesystemStore>> {
    if !path.exists() {
        return Err(Error::StoreNotFound(path.to_owned()));
    }
    let store = Arc::new(FilesystemStore::new(path)?);
    if !has_root_metadata(&store)? {
        return Err(Error::general(format!(
            "no zarr metadata found at store root: {}",
            path.display()
        )));
    }
    Ok(store)
}

fn has_root_metadata(store: &Arc<FilesystemStore>) -> Result<bool> {
    for key in ROOT_METADATA_KEYS {
        let key = StoreKey::new(key).expect("root metadata key should be valid");
        if store.get(&key)?.is_some() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Open the root node of the store at `path`, group or array.
///
/// This is the thin open used by the store-level check; no
/// consolidated-metadata concept applies.
pub fn open_root_node(path: &Path) -> Result<Node> {
    let store = open_store(path)?;
    let node = Node::open(&store, "/")?;
    Ok(node)
}

/// An opened hierarchy rooted at a group.
pub struct Dataset {
    path: PathBuf,
    store: Arc<FilesystemStore>,
    root: Group<FilesystemStore>,
    nodes: Vec<String>,
    consolidated: bool,
}

/// Serializable description of an opened dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub path: String,
    pub consolidated: bool,
    pub nodes: Vec<String>,
}

impl Dataset {
    pub fn open(path: &Path, options: &OpenOptions) -> Result<Self> {
        let store = open_store(path)?;
        let root = Group::open(store.clone(), "/")?;

        let mut nodes = Vec::new();
        if options.consolidated_metadata {
            let Some(consolidated) = root.consolidated_metadata() else {
                return Err(Error::general(format!(
                    "store has no consolidated metadata: {}",
                    path.display()
                )));
            };
            // The node metadata was already decoded along with the root
            // group; the store is not listed or touched further.
            // Consolidated keys are relative to the root.
            nodes.extend(consolidated.metadata.keys().map(|key| format!("/{key}")));
        } else {
            walk_children(&root, &mut nodes)?;
        }
        nodes.sort();
        log::debug!(
            "opened {} ({} nodes, consolidated: {})",
            path.display(),
            nodes.len(),
            options.consolidated_metadata
        );

        Ok(Self {
            path: path.to_owned(),
            store,
            root,
            nodes,
            consolidated: options.consolidated_metadata,
        })
    }

    pub fn store(&self) -> &Arc<FilesystemStore> {
        &self.store
    }

    /// Paths of every node beneath the root, in sorted order.
    pub fn node_paths(&self) -> &[String] {
        &self.nodes
    }

    pub fn attributes(&self) -> &serde_json::Map<String, serde_json::Value> {
        self.root.attributes()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            path: self.path.display().to_string(),
            consolidated: self.consolidated,
            nodes: self.nodes.clone(),
        }
    }

    /// Render the hierarchy as an indented tree of names, shapes, and
    /// data types. Walks the store.
    pub fn hierarchy_tree(&self) -> Result<String> {
        let node = Node::open(&self.store, "/")?;
        Ok(node.hierarchy_tree())
    }
}

/// Recursively open every child node, validating its metadata.
fn walk_children(group: &Group<FilesystemStore>, nodes: &mut Vec<String>) -> Result<()> {
    for array in group.child_arrays().map_err(Error::wrap)? {
        nodes.push(array.path().as_str().to_owned());
    }
    for child in group.child_groups().map_err(Error::wrap)? {
        nodes.push(child.path().as_str().to_owned());
        walk_children(&child, nodes)?;
    }
    Ok(())
}

/// Consolidate the metadata of the hierarchy at `path` onto its root group
/// and store it, so later opens can skip listing. Returns the number of
/// consolidated nodes.
pub fn consolidate(path: &Path) -> Result<usize> {
    let store = open_store(path)?;
    let node = Node::open(&store, "/")?;
    let metadata = node.consolidate_metadata().ok_or_else(|| {
        Error::general(format!(
            "could not consolidate metadata at {}",
            path.display()
        ))
    })?;
    let count = metadata.len();

    let mut root = Group::open(store.clone(), "/")?;
    root.set_consolidated_metadata(Some(ConsolidatedMetadata {
        metadata,
        ..Default::default()
    }));
    root.store_metadata()?;
    log::info!("consolidated {count} nodes at {}", path.display());
    Ok(count)
}
