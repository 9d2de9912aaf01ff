// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node storage for a parsed signature
//!
//! Nodes live in a flat arena and link to each other by index. Every node
//! is reachable from exactly one slot (the root slot, a parent's child slot,
//! or a sibling's next slot), so the arena is always a forest without cycles.

use std::ops::Range;

use crate::grammar::DataType;

/// Index of a node inside its [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One complete type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
	pub(crate) data_type: DataType,
	/// Next complete type at the same depth
	pub(crate) next: Option<NodeId>,
	/// First contained type, containers only
	pub(crate) child: Option<NodeId>,
	/// Byte range of this complete type in the source text
	pub(crate) span: Range<usize>,
}

/// Where the next node gets linked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
	Root,
	Child(NodeId),
	Next(NodeId),
}

/// A parsed signature, as a chain of top-level complete types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
	nodes: Vec<Node>,
	root: Option<NodeId>,
}

impl Tree {
	/// A tree with no types at all
	pub fn new() -> Self { Self::default() }
	/// First top-level type
	pub fn root(&self) -> Option<NodeId> { self.root }
	/// Total number of nodes at every depth
	pub fn len(&self) -> usize { self.nodes.len() }
	/// No types at all
	pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
	/// Look up a node
	///
	/// Ids are only handed out by this tree, so lookup can't miss
	pub fn node(&self, id: NodeId) -> &Node { &self.nodes[id.0] }
	pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node { &mut self.nodes[id.0] }
	/// Allocate a node starting at `start` and link it into `slot`
	pub(crate) fn insert(&mut self, slot: Slot, data_type: DataType, start: usize) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node {
			data_type,
			next: None,
			child: None,
			span: start..start,
		});
		match slot {
			Slot::Root => self.root = Some(id),
			Slot::Child(parent) => self.node_mut(parent).child = Some(id),
			Slot::Next(prev) => self.node_mut(prev).next = Some(id),
		}
		id
	}
}

impl Node {
	/// The node's type tag
	pub fn data_type(&self) -> DataType { self.data_type }
	/// Sibling link
	pub fn next(&self) -> Option<NodeId> { self.next }
	/// First-child link, always `None` for basic types and variants
	pub fn child(&self) -> Option<NodeId> { self.child }
	/// Source byte range
	pub fn span(&self) -> Range<usize> { self.span.clone() }
}
