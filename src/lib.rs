//! A handful of small, self-contained exercises. The centerpiece is a
//! persistent Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. A `Node` holds one value
//! and two child trees, either of which may be empty. The invariants are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The [`functional`] tree is persistent: `insert` leaves the original tree
//! alone and returns a new one that shares every subtree it didn't touch.
//! It doesn't rebalance, so searching takes `O(height)` which can be as bad
//! as `O(N)` when values arrive in sorted order.
//!
//! ## Everything else
//!
//! - [`sequence`]: pick the first matching item of a sequence, and a powers iterator.
//! - [`phrase`]: build a space separated phrase one word at a time.
//! - [`lines`]: count the non-blank, non-comment lines of a file.
//! - [`quaternion`]: an immutable quaternion number type.
//! - [`shape`]: volume and surface area of spheres and boxes.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod functional;
pub mod lines;
pub mod phrase;
pub mod quaternion;
pub mod sequence;
pub mod shape;

pub use error::{Error, Result};
pub use functional::Tree;
pub use lines::{count_meaningful_lines, meaningful_line_count};
pub use phrase::{say, say_word, PhraseBuilder};
pub use quaternion::Quaternion;
pub use sequence::{first_then_apply, first_then_lowercase, powers};
pub use shape::Shape;
