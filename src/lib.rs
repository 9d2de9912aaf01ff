// SPDX-License-Identifier: MIT OR Apache-2.0
//! Small parser and validator for [D-Bus] type signatures
//!
//! A signature like `a{sv}` describes the shape of a message body: here an
//! array of dict-entries with string keys and variant values. This crate
//! checks signatures against the grammar and exposes them as a tree of
//! complete types, which is what a marshaller needs to walk a payload.
//!
//! ```
//! use dbus_sig::{DataType, Signature};
//!
//! let sig = Signature::new("a{sv}i");
//! assert!(sig.is_valid());
//! assert!(!sig.is_singleton());
//! let types: Vec<_> = sig.iter().map(|ty| ty.data_type()).collect();
//! assert_eq!(types, [DataType::Array, DataType::Int32]);
//! assert!(sig.iter().next().unwrap().is_dict());
//!
//! assert!(!Signature::new("{sv}").is_valid());
//! ```
//!
//! Parsing is a single iterative pass, so arbitrarily deep nesting is only
//! limited by memory. [`parser::parse`] is available for callers that want
//! to know *why* a signature was rejected; [`Signature`] only reports
//! whether it was.
//!
//! ## Grammar
//! - basic types: `y b n q i u x t d s o g h`
//! - `v`: a variant, complete on its own
//! - `a` followed by exactly one complete type
//! - `(` one or more complete types `)`
//! - `{` basic key type, complete value type `}`, only directly after `a`
//!
//! [D-Bus]: https://dbus.freedesktop.org/doc/dbus-specification.html#type-system

pub mod grammar;
pub mod iter;
pub mod parser;
mod signature;
pub mod tree;

pub use grammar::DataType;
pub use iter::{Iter, Type};
pub use signature::Signature;
