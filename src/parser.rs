// SPDX-License-Identifier: MIT OR Apache-2.0
//! The actual parser
//!
//! Single left-to-right pass over the text with an explicit stack of open
//! containers, so nesting depth is only limited by memory and never by the
//! call stack.

use thiserror::Error;

use crate::grammar::{DataType, Token, classify};
use crate::tree::{NodeId, Slot, Tree};

/// Why a signature was rejected
/// `usize` arguments are byte positions in the source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
	/// A character that isn't a type code
	#[error("unknown type code {0:?} at {1}")]
	UnknownCode(char, usize),
	/// A `)` or `}` that doesn't close the innermost open container
	#[error("unexpected {0:?} at {1}")]
	UnexpectedClose(char, usize),
	/// The text ended inside a container, or right after an `a`
	#[error("signature ended inside a container")]
	UnexpectedEof,
	/// `()`
	#[error("empty struct at {0}")]
	EmptyStruct(usize),
	/// A dict-entry without exactly a key and a value
	#[error("dict entry with {members} members at {at}")]
	DictEntryArity {
		/// members seen so far
		members: usize,
		/// where the offending member or `}` is
		at: usize,
	},
	/// A `{` that isn't the element type of an array
	#[error("dict entry outside of an array at {0}")]
	MisplacedDictEntry(usize),
	/// A dict-entry key that is a container or variant
	#[error("dict entry key at {0} is not a basic type")]
	NonBasicKey(usize),
}

type PResult<T> = Result<T, Error>;

/// An open container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
	/// `a` read, waiting on its single element type
	Array(NodeId),
	/// collecting one or more members
	Struct { node: NodeId, members: usize },
	/// key first, then value
	DictEntry { node: NodeId, members: usize },
}

struct Builder {
	tree: Tree,
	stack: Vec<Frame>,
	// where the next node attaches
	slot: Slot,
}

impl Builder {
	fn new() -> Self {
		Self {
			tree: Tree::new(),
			stack: Vec::new(),
			slot: Slot::Root,
		}
	}
	fn open(&mut self, data_type: DataType, at: usize) -> NodeId {
		let node = self.tree.insert(self.slot, data_type, at);
		self.slot = Slot::Child(node);
		node
	}
	fn step(&mut self, at: usize, ch: char) -> PResult<()> {
		match classify(ch).ok_or(Error::UnknownCode(ch, at))? {
			Token::Leaf(data_type) => {
				let node = self.tree.insert(self.slot, data_type, at);
				self.complete(node, at + 1)
			}
			Token::Array => {
				let node = self.open(DataType::Array, at);
				self.stack.push(Frame::Array(node));
				Ok(())
			}
			Token::StructOpen => {
				let node = self.open(DataType::Struct, at);
				self.stack.push(Frame::Struct { node, members: 0 });
				Ok(())
			}
			Token::StructClose => match self.stack.last() {
				Some(&Frame::Struct { members: 0, .. }) => Err(Error::EmptyStruct(at)),
				Some(&Frame::Struct { node, .. }) => {
					self.stack.pop();
					self.complete(node, at + 1)
				}
				_ => Err(Error::UnexpectedClose(ch, at)),
			},
			Token::DictEntryOpen => match self.stack.last() {
				Some(Frame::Array(_)) => {
					let node = self.open(DataType::DictEntry, at);
					self.stack.push(Frame::DictEntry { node, members: 0 });
					Ok(())
				}
				_ => Err(Error::MisplacedDictEntry(at)),
			},
			Token::DictEntryClose => match self.stack.last() {
				Some(&Frame::DictEntry { node, members: 2 }) => {
					self.stack.pop();
					// this also closes the array the entry belongs to
					self.complete(node, at + 1)
				}
				Some(&Frame::DictEntry { members, .. }) => Err(Error::DictEntryArity { members, at }),
				_ => Err(Error::UnexpectedClose(ch, at)),
			},
		}
	}
	/// A complete type just ended at `end`, let the enclosing containers know
	fn complete(&mut self, mut node: NodeId, end: usize) -> PResult<()> {
		loop {
			self.tree.node_mut(node).span.end = end;
			self.slot = Slot::Next(node);
			let Some(frame) = self.stack.last_mut() else {
				return Ok(());
			};
			match frame {
				// arrays take exactly one element, so they finish with it
				Frame::Array(array) => {
					node = *array;
					self.stack.pop();
				}
				Frame::Struct { members, .. } => {
					*members += 1;
					return Ok(());
				}
				Frame::DictEntry { members, .. } => {
					*members += 1;
					let start = self.tree.node(node).span.start;
					return match *members {
						1 if !self.tree.node(node).data_type.is_basic() => Err(Error::NonBasicKey(start)),
						1 | 2 => Ok(()),
						members => Err(Error::DictEntryArity { members, at: start }),
					};
				}
			}
		}
	}
	fn finish(self) -> PResult<Tree> {
		if self.stack.is_empty() {
			Ok(self.tree)
		} else {
			Err(Error::UnexpectedEof)
		}
	}
}

/// Parse a signature into its type tree
///
/// The empty string is a valid signature with no types in it.
pub fn parse(text: &str) -> Result<Tree, Error> {
	let mut builder = Builder::new();
	for (at, ch) in text.char_indices() {
		builder.step(at, ch)?;
	}
	builder.finish()
}
