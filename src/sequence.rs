//! Small helpers over sequences.

use std::fmt;
use std::iter::FusedIterator;

/// Returns the lowercased text of the first item satisfying `predicate`,
/// or `None` if nothing matches. Items after the first match are never
/// looked at.
///
/// # Examples
///
/// ```
/// use exercises::sequence::first_then_lowercase;
///
/// let words = ["SHY", "Hello", "WORLD"];
///
/// assert_eq!(first_then_lowercase(words, |w| w.len() > 4), Some("hello".to_string()));
/// assert_eq!(first_then_lowercase(words, |w| w.len() > 10), None);
/// ```
pub fn first_then_lowercase<I, P>(items: I, predicate: P) -> Option<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
    P: FnMut(&I::Item) -> bool,
{
    first_then_apply(items, predicate, |item| item.to_string().to_lowercase())
}

/// Applies `f` to the first item satisfying `predicate`.
///
/// # Examples
///
/// ```
/// use exercises::sequence::first_then_apply;
///
/// let lengths = first_then_apply(vec!["a", "bcd", "ef"], |s| s.len() > 1, str::len);
/// assert_eq!(lengths, Some(3));
/// ```
pub fn first_then_apply<I, P, F, R>(items: I, mut predicate: P, f: F) -> Option<R>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnOnce(I::Item) -> R,
{
    items.into_iter().find(|item| predicate(item)).map(f)
}

/// Successive powers of `base`, starting at 1, that don't exceed `limit`.
///
/// The sequence ends early if the next power would overflow or if it stops
/// growing (a base of 0 or 1), so it is always finite.
///
/// # Examples
///
/// ```
/// use exercises::sequence::powers;
///
/// let twos: Vec<u64> = powers(2, 70).collect();
/// assert_eq!(twos, vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
pub fn powers(base: u64, limit: u64) -> Powers {
    Powers {
        base,
        limit,
        next: Some(1),
    }
}

/// Iterator returned by [`powers`].
#[derive(Clone, Debug)]
pub struct Powers {
    base: u64,
    limit: u64,
    next: Option<u64>,
}

impl Iterator for Powers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let power = self.next.filter(|&p| p <= self.limit)?;
        self.next = power
            .checked_mul(self.base)
            .filter(|&following| following > power);
        Some(power)
    }
}

impl FusedIterator for Powers {}
