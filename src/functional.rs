//! A Functional BST. This is modeled after a BST one would see in
//! a functional language like Haskell. `insert` never modifies the tree
//! it's called on and instead returns a new tree that references
//! every node of the original tree it didn't have to rebuild.
//!
//! The tree is an ordered set: inserting a value that is already present
//! gives back the same tree. There is no rebalancing, so the shape of the
//! tree depends on insertion order.
//!
//! # Examples
//!
//! ```
//! use exercises::functional::Tree;
//!
//! let tree: Tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("b"));
//! assert_eq!(tree.to_string(), "()");
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert("b".to_string());
//! let newer_tree = new_tree.insert("a".to_string()).insert("c".to_string());
//!
//! // All history is preserved.
//! assert_eq!(tree.size(), 0);
//! assert_eq!(new_tree.to_string(), "(b)");
//! assert_eq!(newer_tree.to_string(), "((a)b(c))");
//! assert_eq!(newer_tree.size(), 3);
//! ```

use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::rc::Rc;

/// A persistent Binary Search Tree holding distinct values. Operations
/// that would modify the tree instead return a new tree.
///
/// The element type defaults to `String`.
pub enum Tree<T = String> {
    /// A marker for the empty tree at the bottom of a subtree.
    Empty,
    /// A `Node` that has a value and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a tree only bumps reference counts, so `T` doesn't need to be `Clone`.
impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Counts the values stored in this tree. The count isn't cached so
    /// this visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree: Tree<&str> = vec!["b", "a", "b"].into_iter().collect();
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.size() + n.right.size(),
        }
    }

    /// Returns whether `value` is stored in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree: Tree = Tree::new().insert("m".to_string());
    ///
    /// assert!(tree.contains("m"));
    /// assert!(!tree.contains("n"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        let mut tree = self;
        while let Self::Node(n) = tree {
            let stored: &Q = (*n.value).borrow();
            match value.cmp(stored) {
                cmp::Ordering::Less => tree = &*n.left.0,
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => tree = &*n.right.0,
            }
        }

        false
    }

    /// Returns a new tree that includes `value`. If `value` is already
    /// present the returned tree is the same tree as this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree: Tree = Tree::new();
    /// let new_tree = tree.insert("x".to_string());
    /// let same_tree = new_tree.insert("x".to_string());
    ///
    /// // All history is preserved.
    /// assert_eq!(tree.size(), 0);
    /// assert_eq!(new_tree.size(), 1);
    /// assert_eq!(same_tree.to_string(), new_tree.to_string());
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Empty => Self::Node(Node::new(value)),
            Self::Node(n) => Self::Node(n.insert(value)),
        }
    }

    /// Iterates over the values of this tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::functional::Tree;
    ///
    /// let tree: Tree<&str> = vec!["pear", "apple", "fig"].into_iter().collect();
    /// let values: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, vec!["apple", "fig", "pear"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the tree with every non-empty subtree wrapped in its own
/// parentheses, left subtree before the value and right subtree after it.
/// Empty subtrees render as nothing, except that an entirely empty tree is `()`.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("()"),
            Self::Node(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An in-order iterator over the values of a [`Tree`].
///
/// Keeps the chain of ancestors still to be visited, so memory use is
/// proportional to the height of the tree.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &*n.left.0;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&*node.right.0);
        Some(&*node.value)
    }
}

struct Child<T>(Rc<Tree<T>>);
impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<T> Child<T> {
    fn new() -> Self {
        Self(Rc::new(Tree::new()))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn size(&self) -> usize {
        self.0.size()
    }

    fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        Self(Rc::new(self.0.insert(value)))
    }
}

/// A `Node` holds one value of the tree. It always has two children
/// although those children may be [`Empty`][Tree::Empty].
pub struct Node<T> {
    value: Rc<T>,
    left: Child<T>,
    right: Child<T>,
}

/// Manual implementation of `Clone` so we don't clone references when the generic parameter
/// isn't `Clone` itself.
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    fn new(value: T) -> Self {
        Self {
            value: Rc::new(value),
            left: Child::new(),
            right: Child::new(),
        }
    }

    /// Create a new Node with the same value as this node
    /// but with the given children.
    fn with_children(&self, left: Child<T>, right: Child<T>) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left,
            right,
        }
    }

    /// Moves every child this node is the only owner of onto `pending`,
    /// leaving an empty tree in its place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        for child in &mut [&mut self.left, &mut self.right] {
            if let Some(tree) = Rc::get_mut(&mut child.0) {
                if let Tree::Node(n) = mem::take(tree) {
                    pending.push(n);
                }
            }
        }
    }

    fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match value.cmp(&*self.value) {
            cmp::Ordering::Less => {
                let new_left = self.left.insert(value);
                self.with_children(new_left, self.right.clone())
            }
            cmp::Ordering::Equal => self.clone(),
            cmp::Ordering::Greater => {
                let new_right = self.right.insert(value);
                self.with_children(self.left.clone(), new_right)
            }
        }
    }
}

/// Unwinds uniquely owned descendants with an explicit stack so that dropping
/// a tall tree doesn't recurse once per level. Shared subtrees are left to
/// the other versions still holding them.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if !self.left.is_empty() {
            write!(f, "{}", self.left.0)?;
        }
        write!(f, "{}", self.value)?;
        if !self.right.is_empty() {
            write!(f, "{}", self.right.0)?;
        }
        f.write_str(")")
    }
}
