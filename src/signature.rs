// SPDX-License-Identifier: MIT OR Apache-2.0
//! The owning signature value, start at [`Signature`]

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::iter::{Iter, Type};
use crate::parser::parse;
use crate::tree::Tree;

/// A type signature, parsed once on construction
///
/// Invalid text is accepted and remembered; check [`Signature::is_valid`]
/// before looking at the types. An invalid signature iterates as empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
  text: String,
  valid: bool,
  tree: Tree,
}

impl Signature {
  /// Parse a signature
  pub fn new(text: impl Into<String>) -> Self {
    let mut sig = Self {
      text: String::new(),
      valid: true,
      tree: Tree::new(),
    };
    sig.set(text);
    sig
  }
  /// Parse at most `len` bytes of `text` starting at byte `pos`
  ///
  /// Out of range bounds are clamped to the end of `text`, and a range that
  /// splits a character produces an invalid signature.
  pub fn from_range(text: &str, pos: usize, len: usize) -> Self {
    let start = pos.min(text.len());
    let end = start.saturating_add(len).min(text.len());
    match text.get(start..end) {
      Some(text) => Self::new(text),
      None => Self {
        text: String::from_utf8_lossy(&text.as_bytes()[start..end]).into_owned(),
        valid: false,
        tree: Tree::new(),
      },
    }
  }
  /// Parse `ch` repeated `n` times
  pub fn repeat(n: usize, ch: char) -> Self {
    Self::new(std::iter::repeat_n(ch, n).collect::<String>())
  }
  /// Replace the text and reparse, the old tree is dropped
  pub fn set(&mut self, text: impl Into<String>) {
    let text = text.into();
    match parse(&text) {
      Ok(tree) => {
        log::trace!("signature {text:?} has {} top-level types", Iter::new(&text, &tree, tree.root()).count());
        self.valid = true;
        self.tree = tree;
      }
      Err(error) => {
        log::debug!("invalid signature {text:?}: {error}");
        self.valid = false;
        self.tree = Tree::new();
      }
    }
    self.text = text;
  }
  /// The signature text as given
  pub fn as_str(&self) -> &str {
    &self.text
  }
  /// Whether the text follows the signature grammar
  pub fn is_valid(&self) -> bool {
    self.valid
  }
  /// Valid and exactly one complete type
  pub fn is_singleton(&self) -> bool {
    let mut iter = self.iter();
    self.valid && iter.next().is_some() && iter.is_end()
  }
  /// Iterator over the top-level complete types
  ///
  /// Only meaningful for a valid signature.
  pub fn iter(&self) -> Iter<'_> {
    Iter::new(&self.text, &self.tree, self.tree.root())
  }
  /// Write the type tree out as indented text, for debugging
  pub fn print_tree(&self, f: &mut impl fmt::Write) -> fmt::Result {
    if !self.valid {
      return writeln!(f, "invalid");
    }
    if self.tree.is_empty() {
      return writeln!(f, "empty");
    }
    // one cursor per open level
    let mut stack = vec![self.iter()];
    while let Some(types) = stack.last_mut() {
      let Some(ty) = types.next() else {
        stack.pop();
        continue;
      };
      for _ in 1..stack.len() {
        f.write_str("  ")?;
      }
      writeln!(f, "{}", ty.data_type())?;
      stack.push(ty.children());
    }
    Ok(())
  }
  /// [`print_tree`](Self::print_tree) into a new string
  pub fn tree_string(&self) -> String {
    let mut out = String::new();
    // writing to a string can't fail
    let _ = self.print_tree(&mut out);
    out
  }
}

impl Default for Signature {
  /// The empty signature, valid with no types
  fn default() -> Self {
    Self::new("")
  }
}
impl fmt::Debug for Signature {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Signature[{}]", self.text)
  }
}
impl fmt::Display for Signature {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.text)
  }
}
impl AsRef<str> for Signature {
  fn as_ref(&self) -> &str {
    &self.text
  }
}
impl PartialEq<str> for Signature {
  fn eq(&self, other: &str) -> bool {
    self.text == other
  }
}
impl PartialEq<&str> for Signature {
  fn eq(&self, other: &&str) -> bool {
    self.text == *other
  }
}
impl PartialEq<String> for Signature {
  fn eq(&self, other: &String) -> bool {
    &self.text == other
  }
}
impl From<&str> for Signature {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}
impl From<String> for Signature {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}
/// Never fails, invalid text gives an invalid signature
impl FromStr for Signature {
  type Err = Infallible;
  fn from_str(text: &str) -> Result<Self, Self::Err> {
    Ok(Self::new(text))
  }
}
impl<'sig> IntoIterator for &'sig Signature {
  type Item = Type<'sig>;
  type IntoIter = Iter<'sig>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
