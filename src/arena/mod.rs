//! Index-based bump arena holding parsed document nodes.
//!
//! Nodes and child-slot tables grow only at their ends. A [`Checkpoint`]
//! records both ends plus the byte count charged so far, and
//! [`Arena::rollback`] truncates back to it. Nothing is freed individually.

use std::mem::size_of;

use crate::constants::DEFAULT_ARENA_CAPACITY;
use crate::num::Number;
use crate::types::ValueRef;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Array,
    Object,
    Number,
    String,
    Boolean,
}

impl NodeKind {
    /// Maps the type letter of a `$` capture directive.
    pub fn from_type_letter(letter: u8) -> Option<Self> {
        match letter {
            b'a' => Some(NodeKind::Array),
            b'o' => Some(NodeKind::Object),
            b's' => Some(NodeKind::String),
            b'n' => Some(NodeKind::Number),
            b'b' => Some(NodeKind::Boolean),
            _ => None,
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, NodeKind::Array | NodeKind::Object)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeData<'src> {
    None,
    Bool(bool),
    Number(Number),
    String(&'src [u8]),
}

/// Stable handle of a node inside one arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy)]
pub struct Node<'src> {
    pub kind: NodeKind,
    pub key: &'src [u8],
    pub first_child: usize,
    pub child_len: usize,
    pub data: NodeData<'src>,
}

impl<'src> Node<'src> {
    pub(crate) fn scalar(kind: NodeKind, data: NodeData<'src>) -> Self {
        Self {
            kind,
            key: &[],
            first_child: 0,
            child_len: 0,
            data,
        }
    }

    pub(crate) fn composite(kind: NodeKind, span: ChildSpan) -> Self {
        Self {
            kind,
            key: &[],
            first_child: span.start,
            child_len: span.len,
            data: NodeData::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChildSpan {
    pub start: usize,
    pub len: usize,
}

pub const NODE_COST: usize = size_of::<Node<'static>>();
pub const CHILD_SLOT_COST: usize = size_of::<NodeId>();

/// Mark returned by [`Arena::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    nodes: usize,
    children: usize,
    used: usize,
}

#[derive(Debug)]
pub struct Arena<'src> {
    nodes: Vec<Node<'src>>,
    children: Vec<NodeId>,
    capacity: usize,
    used: usize,
}

impl<'src> Arena<'src> {
    /// Creates an arena that refuses allocations past `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            children: Vec::new(),
            capacity,
            used: 0,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.used
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            nodes: self.nodes.len(),
            children: self.children.len(),
            used: self.used,
        }
    }

    /// Discards everything allocated after `mark`. A mark taken after the
    /// current state (i.e. from before an earlier rollback) is ignored.
    pub fn rollback(&mut self, mark: Checkpoint) {
        if mark.used > self.used
            || mark.nodes > self.nodes.len()
            || mark.children > self.children.len()
        {
            return;
        }
        self.nodes.truncate(mark.nodes);
        self.children.truncate(mark.children);
        self.used = mark.used;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.children.clear();
        self.used = 0;
    }

    pub fn get(&self, id: NodeId) -> Option<ValueRef<'_, 'src>> {
        if id.0 < self.nodes.len() {
            Some(ValueRef::new(self, id))
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `id` was discarded by a rollback.
    pub fn value(&self, id: NodeId) -> ValueRef<'_, 'src> {
        assert!(id.0 < self.nodes.len(), "node {} is not live", id.0);
        ValueRef::new(self, id)
    }

    fn charge(&mut self, bytes: usize, offset: usize) -> Result<()> {
        match self.used.checked_add(bytes) {
            Some(total) if total <= self.capacity => {
                self.used = total;
                Ok(())
            }
            _ => Err(Error::out_of_memory(offset)),
        }
    }

    pub(crate) fn alloc_node(&mut self, node: Node<'src>, offset: usize) -> Result<NodeId> {
        self.charge(NODE_COST, offset)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    pub(crate) fn alloc_children(&mut self, ids: &[NodeId], offset: usize) -> Result<ChildSpan> {
        let cost = ids
            .len()
            .checked_mul(CHILD_SLOT_COST)
            .ok_or_else(|| Error::out_of_memory(offset))?;
        self.charge(cost, offset)?;
        let start = self.children.len();
        self.children.extend_from_slice(ids);
        Ok(ChildSpan {
            start,
            len: ids.len(),
        })
    }

    pub(crate) fn set_key(&mut self, id: NodeId, key: &'src [u8]) {
        self.nodes[id.0].key = key;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<'src> {
        &self.nodes[id.0]
    }

    pub(crate) fn child_ids(&self, node: &Node<'src>) -> &[NodeId] {
        let start = node.first_child;
        let end = start.saturating_add(node.child_len);
        self.children.get(start..end).unwrap_or(&[])
    }
}

impl Default for Arena<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn null_node() -> Node<'static> {
        Node::scalar(NodeKind::Null, NodeData::None)
    }

    #[rstest::rstest]
    fn test_alloc_charges_node_cost() {
        let mut arena = Arena::new(NODE_COST * 2);
        arena.alloc_node(null_node(), 0).unwrap();
        assert_eq!(arena.used(), NODE_COST);
        arena.alloc_node(null_node(), 0).unwrap();
        assert_eq!(arena.remaining(), 0);
    }

    #[rstest::rstest]
    fn test_failed_alloc_has_no_side_effects() {
        let mut arena = Arena::new(NODE_COST + 1);
        arena.alloc_node(null_node(), 0).unwrap();
        let err = arena.alloc_node(null_node(), 7).unwrap_err();
        assert_eq!(err.kind, crate::ErrorKind::OutOfMemory);
        assert_eq!(err.offset, 7);
        assert_eq!(arena.used(), NODE_COST);
        assert_eq!(arena.len(), 1);
    }

    #[rstest::rstest]
    fn test_rollback_restores_mark() {
        let mut arena = Arena::unbounded();
        let first = arena.alloc_node(null_node(), 0).unwrap();
        let mark = arena.checkpoint();
        let second = arena.alloc_node(null_node(), 0).unwrap();
        arena.alloc_children(&[first, second], 0).unwrap();
        assert!(arena.used() > mark.used);

        arena.rollback(mark);
        assert_eq!(arena.checkpoint(), mark);
        assert!(arena.get(first).is_some());
        assert!(arena.get(second).is_none());
    }

    #[rstest::rstest]
    fn test_rollback_ignores_newer_mark() {
        let mut arena = Arena::unbounded();
        let empty = arena.checkpoint();
        arena.alloc_node(null_node(), 0).unwrap();
        let newer = arena.checkpoint();
        arena.rollback(empty);
        arena.rollback(newer);
        assert_eq!(arena.checkpoint(), empty);
    }

    #[rstest::rstest]
    fn test_children_span() {
        let mut arena = Arena::unbounded();
        let a = arena.alloc_node(null_node(), 0).unwrap();
        let b = arena.alloc_node(null_node(), 0).unwrap();
        let span = arena.alloc_children(&[a, b], 0).unwrap();
        let parent = arena
            .alloc_node(Node::composite(NodeKind::Array, span), 0)
            .unwrap();
        assert_eq!(arena.child_ids(arena.node(parent)), &[a, b]);
        assert_eq!(arena.used(), NODE_COST * 3 + CHILD_SLOT_COST * 2);
    }

    #[rstest::rstest]
    #[case(b'a', Some(NodeKind::Array))]
    #[case(b'o', Some(NodeKind::Object))]
    #[case(b's', Some(NodeKind::String))]
    #[case(b'n', Some(NodeKind::Number))]
    #[case(b'b', Some(NodeKind::Boolean))]
    #[case(b'z', None)]
    #[case(b'N', None)]
    fn test_type_letters(#[case] letter: u8, #[case] expected: Option<NodeKind>) {
        assert_eq!(NodeKind::from_type_letter(letter), expected);
    }
}
