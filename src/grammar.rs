// SPDX-License-Identifier: MIT OR Apache-2.0
//! Type codes and character classification
//!
//! Stateless: every function here looks at a single character and nothing
//! else. Deciding whether a sequence of codes makes sense is the job of the
//! [parser](crate::parser).

use std::fmt;

/// The type denoted by a single grammar unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
	/// `y`, unsigned 8-bit integer
	Byte,
	/// `b`
	Boolean,
	/// `n`
	Int16,
	/// `q`
	Uint16,
	/// `i`
	Int32,
	/// `u`
	Uint32,
	/// `x`
	Int64,
	/// `t`
	Uint64,
	/// `d`, IEEE 754 double
	Double,
	/// `s`
	String,
	/// `o`
	ObjectPath,
	/// `g`
	Signature,
	/// `h`, index into the out-of-band file descriptor array
	UnixFd,
	/// `v`, a value carrying its own signature at runtime
	Variant,
	/// `a` followed by one complete type
	Array,
	/// `(` one or more complete types `)`
	Struct,
	/// `{` basic key, complete value `}`
	DictEntry,
}

impl DataType {
	/// Look up a leaf type (basic or variant) by its code
	pub fn from_code(ch: char) -> Option<Self> {
		Some(match ch {
			'y' => Self::Byte,
			'b' => Self::Boolean,
			'n' => Self::Int16,
			'q' => Self::Uint16,
			'i' => Self::Int32,
			'u' => Self::Uint32,
			'x' => Self::Int64,
			't' => Self::Uint64,
			'd' => Self::Double,
			's' => Self::String,
			'o' => Self::ObjectPath,
			'g' => Self::Signature,
			'h' => Self::UnixFd,
			'v' => Self::Variant,
			_ => return None,
		})
	}
	/// The character that starts this type in a signature
	pub fn code(self) -> char {
		match self {
			Self::Byte => 'y',
			Self::Boolean => 'b',
			Self::Int16 => 'n',
			Self::Uint16 => 'q',
			Self::Int32 => 'i',
			Self::Uint32 => 'u',
			Self::Int64 => 'x',
			Self::Uint64 => 't',
			Self::Double => 'd',
			Self::String => 's',
			Self::ObjectPath => 'o',
			Self::Signature => 'g',
			Self::UnixFd => 'h',
			Self::Variant => 'v',
			Self::Array => 'a',
			Self::Struct => '(',
			Self::DictEntry => '{',
		}
	}
	/// Lowercase name, as used by the tree printer
	pub fn name(self) -> &'static str {
		match self {
			Self::Byte => "byte",
			Self::Boolean => "boolean",
			Self::Int16 => "int16",
			Self::Uint16 => "uint16",
			Self::Int32 => "int32",
			Self::Uint32 => "uint32",
			Self::Int64 => "int64",
			Self::Uint64 => "uint64",
			Self::Double => "double",
			Self::String => "string",
			Self::ObjectPath => "object_path",
			Self::Signature => "signature",
			Self::UnixFd => "unix_fd",
			Self::Variant => "variant",
			Self::Array => "array",
			Self::Struct => "struct",
			Self::DictEntry => "dict_entry",
		}
	}
	/// Neither a container nor a variant, so usable as a dict-entry key
	pub fn is_basic(self) -> bool { !self.is_container() && self != Self::Variant }
	/// Basic type with a fixed wire size
	pub fn is_fixed(self) -> bool {
		matches!(
			self,
			Self::Byte
				| Self::Boolean
				| Self::Int16
				| Self::Uint16
				| Self::Int32
				| Self::Uint32
				| Self::Int64
				| Self::Uint64
				| Self::Double
				| Self::UnixFd
		)
	}
	/// Array, struct or dict-entry
	pub fn is_container(self) -> bool { matches!(self, Self::Array | Self::Struct | Self::DictEntry) }
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

/// What a single signature character means to the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
	/// A basic type or `v`, complete on its own
	Leaf(DataType),
	/// `a`, the array prefix marker
	Array,
	/// `(`
	StructOpen,
	/// `)`
	StructClose,
	/// `{`
	DictEntryOpen,
	/// `}`
	DictEntryClose,
}

/// Classify one character, `None` if it is not part of the grammar
pub fn classify(ch: char) -> Option<Token> {
	match ch {
		'a' => Some(Token::Array),
		'(' => Some(Token::StructOpen),
		')' => Some(Token::StructClose),
		'{' => Some(Token::DictEntryOpen),
		'}' => Some(Token::DictEntryClose),
		_ => DataType::from_code(ch).map(Token::Leaf),
	}
}
