// SPDX-License-Identifier: MIT OR Apache-2.0
//! Walking a parsed signature, start at [`Signature::iter`]
//!
//! [`Signature::iter`]: crate::Signature::iter

use std::fmt;
use std::iter::FusedIterator;

use crate::grammar::DataType;
use crate::tree::{Node, NodeId, Tree};

/// Forward cursor over a chain of complete types at one depth
///
/// Never descends on its own, use [`Type::children`] for that.
#[derive(Clone)]
pub struct Iter<'sig> {
	text: &'sig str,
	tree: &'sig Tree,
	cursor: Option<NodeId>,
}

impl<'sig> Iter<'sig> {
	pub(crate) fn new(text: &'sig str, tree: &'sig Tree, cursor: Option<NodeId>) -> Self { Self { text, tree, cursor } }
	/// Look at the current type without advancing
	pub fn peek(&self) -> Option<Type<'sig>> { self.cursor.map(|id| self.at(id)) }
	/// Reached the end of the chain
	pub fn is_end(&self) -> bool { self.cursor.is_none() }
	fn at(&self, id: NodeId) -> Type<'sig> {
		Type {
			text: self.text,
			tree: self.tree,
			id,
		}
	}
}

impl<'sig> Iterator for Iter<'sig> {
	type Item = Type<'sig>;
	fn next(&mut self) -> Option<Self::Item> {
		let current = self.peek()?;
		self.cursor = current.node().next();
		Some(current)
	}
}
impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_list().entries(self.clone()).finish() }
}

/// One complete type inside a parsed signature
#[derive(Clone, Copy)]
pub struct Type<'sig> {
	text: &'sig str,
	tree: &'sig Tree,
	id: NodeId,
}

impl<'sig> Type<'sig> {
	fn node(&self) -> &'sig Node { self.tree.node(self.id) }
	fn child(&self) -> Option<Type<'sig>> { self.children().next() }
	/// This type's tag
	pub fn data_type(&self) -> DataType { self.node().data_type() }
	/// See [`DataType::is_basic`]
	pub fn is_basic(&self) -> bool { self.data_type().is_basic() }
	/// See [`DataType::is_fixed`]
	pub fn is_fixed(&self) -> bool { self.data_type().is_fixed() }
	/// See [`DataType::is_container`]
	pub fn is_container(&self) -> bool { self.data_type().is_container() }
	/// An `a…`
	pub fn is_array(&self) -> bool { self.data_type() == DataType::Array }
	/// An array of dict-entries, `a{…}`
	pub fn is_dict(&self) -> bool {
		self.is_array()
			&& self
				.child()
				.is_some_and(|element| element.data_type() == DataType::DictEntry)
	}
	/// The exact text of this complete type, including everything inside it
	pub fn signature(&self) -> &'sig str { &self.text[self.node().span()] }
	/// The contained types, in order
	///
	/// Empty for basic types and variants. One item for arrays, one or more
	/// for structs, and key then value for dict-entries.
	pub fn children(&self) -> Iter<'sig> { Iter::new(self.text, self.tree, self.node().child()) }
	/// Element type of an array
	pub fn element_type(&self) -> Option<Type<'sig>> { self.is_array().then(|| self.child()).flatten() }
	/// Key type of a dict-entry
	pub fn key(&self) -> Option<Type<'sig>> {
		(self.data_type() == DataType::DictEntry).then(|| self.child()).flatten()
	}
	/// Value type of a dict-entry
	pub fn value(&self) -> Option<Type<'sig>> {
		(self.data_type() == DataType::DictEntry)
			.then(|| self.children().nth(1))
			.flatten()
	}
}

impl fmt::Debug for Type<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}({:?})", self.data_type(), self.signature())
	}
}
impl fmt::Display for Type<'_> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.signature()) }
}
impl PartialEq for Type<'_> {
	/// Same type structure, wherever it came from
	fn eq(&self, other: &Self) -> bool { self.signature() == other.signature() }
}
impl Eq for Type<'_> {}
