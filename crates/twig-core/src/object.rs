//! Object tree for Twig.
//!
//! Provides the structural half of the widget tree:
//! - Stable widget identifiers via arena-based storage
//! - Parent-child ownership with cascade destruction (children first)
//! - String ids and depth-first lookup
//! - Tree traversal helpers
//!
//! The tree stores structure only. Widget state (geometry, flags, handlers)
//! is kept by the widget layer in storage keyed by the same [`WidgetId`].
//!
//! # Key Types
//!
//! - [`WidgetId`] - Unique stable identifier for each node
//! - [`ObjectTree`] - Arena owning the parent/child relationships
//!
//! # Ownership
//!
//! A node's child list is its only owning edge. The parent link is a plain
//! [`WidgetId`], so a node can never keep its ancestors alive and destroying a
//! node always destroys its whole subtree.

use std::fmt;

use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a node in the object tree.
    ///
    /// `WidgetId`s are stable handles that remain valid while the tree changes
    /// around them. They become invalid when the node is destroyed; a stale id
    /// is never reused for a different node.
    pub struct WidgetId;
}

impl WidgetId {
    /// Convert the id to a raw u64 value.
    ///
    /// Useful for logging and for backends that need a numeric handle.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// Errors that can occur during object tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The id is invalid or the node has been destroyed.
    InvalidObjectId,
    /// Attempted to make a node its own parent or ancestor.
    CircularParentage,
    /// The node already has a parent. Parents are assigned once, at `add` time.
    AlreadyParented,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidObjectId => write!(f, "Invalid or destroyed widget ID"),
            Self::CircularParentage => {
                write!(f, "Cannot add a widget as its own child or descendant")
            }
            Self::AlreadyParented => write!(f, "Widget already has a parent"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object tree operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Internal data stored for each node.
struct NodeData {
    /// Application-assigned string id. Empty when unset. Not unique.
    name: String,
    /// The concrete widget type name, for diagnostics.
    type_name: &'static str,
    /// Parent node (non-owning).
    parent: Option<WidgetId>,
    /// Child nodes in insertion order (owned).
    children: Vec<WidgetId>,
}

/// The arena that owns every node and its relationships.
///
/// Each [`ObjectTree`] is an independent instance; nothing here is global, so
/// tests can build as many trees as they like.
pub struct ObjectTree {
    nodes: SlotMap<WidgetId, NodeData>,
}

impl ObjectTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Register a new parentless node and return its id.
    pub fn register(&mut self, type_name: &'static str, name: impl Into<String>) -> WidgetId {
        let id = self.nodes.insert(NodeData {
            name: name.into(),
            type_name,
            parent: None,
            children: Vec::new(),
        });
        tracing::trace!(target: targets::OBJECT, ?id, type_name, "registered node");
        id
    }

    /// Check if a node exists.
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `child` to the end of `parent`'s child list.
    ///
    /// The child must currently be parentless; parents are never reassigned.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> ObjectResult<()> {
        if !self.nodes.contains_key(parent) {
            return Err(ObjectError::InvalidObjectId);
        }
        let child_data = self.nodes.get(child).ok_or(ObjectError::InvalidObjectId)?;
        if child_data.parent.is_some() {
            return Err(ObjectError::AlreadyParented);
        }
        if self.is_ancestor_of(child, parent) {
            return Err(ObjectError::CircularParentage);
        }

        if let Some(data) = self.nodes.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.nodes.get_mut(parent) {
            data.children.push(child);
        }
        tracing::trace!(target: targets::OBJECT, ?parent, ?child, "attached child");
        Ok(())
    }

    /// Check if `potential_ancestor` is `id` or one of its ancestors.
    fn is_ancestor_of(&self, potential_ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Remove a node and its whole subtree.
    ///
    /// Returns the removed ids in destruction order: descendants depth-first
    /// with children before their parents, and `id` last.
    pub fn destroy(&mut self, id: WidgetId) -> ObjectResult<Vec<WidgetId>> {
        let mut removed = Vec::new();
        self.collect_postorder(id, &mut removed)?;

        if let Some(parent_id) = self.nodes.get(id).and_then(|d| d.parent) {
            if let Some(parent_data) = self.nodes.get_mut(parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        for &node in &removed {
            self.nodes.remove(node);
        }
        tracing::trace!(target: targets::OBJECT, ?id, count = removed.len(), "destroyed subtree");
        Ok(removed)
    }

    fn collect_postorder(&self, id: WidgetId, result: &mut Vec<WidgetId>) -> ObjectResult<()> {
        let data = self.nodes.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child in &data.children {
            self.collect_postorder(child, result)?;
        }
        result.push(id);
        Ok(())
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: WidgetId) -> ObjectResult<Option<WidgetId>> {
        self.nodes
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the children of a node in insertion order.
    pub fn children(&self, id: WidgetId) -> ObjectResult<&[WidgetId]> {
        self.nodes
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the string id of a node.
    pub fn name(&self, id: WidgetId) -> ObjectResult<&str> {
        self.nodes
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the string id of a node.
    pub fn set_name(&mut self, id: WidgetId, name: impl Into<String>) -> ObjectResult<()> {
        self.nodes
            .get_mut(id)
            .map(|d| d.name = name.into())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the concrete type name of a node.
    pub fn type_name(&self, id: WidgetId) -> ObjectResult<&'static str> {
        self.nodes
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Find the first node named `name` in a pre-order walk from `root`.
    ///
    /// `root` itself is checked first. With duplicate names the pre-order
    /// first match is returned, deterministically.
    pub fn find(&self, root: WidgetId, name: &str) -> ObjectResult<Option<WidgetId>> {
        let data = self.nodes.get(root).ok_or(ObjectError::InvalidObjectId)?;
        if data.name == name {
            return Ok(Some(root));
        }
        for &child in &data.children {
            if let Some(found) = self.find(child, name)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Find a direct child named `name`.
    pub fn find_child_by_name(&self, id: WidgetId, name: &str) -> ObjectResult<Option<WidgetId>> {
        let children = self.children(id)?;
        Ok(children
            .iter()
            .copied()
            .find(|&child| self.nodes.get(child).is_some_and(|d| d.name == name)))
    }

    /// Get all ancestors of a node from immediate parent to root.
    pub fn ancestors(&self, id: WidgetId) -> ObjectResult<Vec<WidgetId>> {
        let mut result = Vec::new();
        let mut current = self.parent(id)?;
        while let Some(current_id) = current {
            result.push(current_id);
            current = self.nodes.get(current_id).and_then(|d| d.parent);
        }
        Ok(result)
    }

    /// Get the root of the tree containing `id`.
    pub fn root_of(&self, id: WidgetId) -> ObjectResult<WidgetId> {
        Ok(self.ancestors(id)?.last().copied().unwrap_or(id))
    }

    /// Depth-first pre-order traversal: node first, then each child subtree.
    pub fn depth_first_preorder(&self, id: WidgetId) -> ObjectResult<Vec<WidgetId>> {
        let mut result = Vec::new();
        self.preorder_recursive(id, &mut result)?;
        Ok(result)
    }

    fn preorder_recursive(&self, id: WidgetId, result: &mut Vec<WidgetId>) -> ObjectResult<()> {
        let data = self.nodes.get(id).ok_or(ObjectError::InvalidObjectId)?;
        result.push(id);
        for &child in &data.children {
            self.preorder_recursive(child, result)?;
        }
        Ok(())
    }

    /// Iterate over all parentless nodes.
    pub fn root_objects(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }

}

impl Default for ObjectTree {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(WidgetId: Copy, Send, Sync, std::hash::Hash);
