//! Fixed-bucket hash map keyed by strings, with chained collisions.
//!
//! # Implementation details
//! - **Buckets**: exactly [`BUCKET_COUNT`] slots. A slot stays `None` until a key
//!   hashes to it, then holds a [`DoublyLinkedList`] of entries.
//! - **Hashing**: the sum of the key's Unicode code points, modulo the bucket
//!   count. Anagrams like `"foo"` and `"oof"` always share a bucket.
//! - **Ordering**: iteration walks buckets in index order and each chain in
//!   insertion order; there is no global insertion order.

use core::fmt;

use crate::error::{CollectionError, Result};
use crate::lists::DoublyLinkedList;
use crate::lists::doubly;

/// Number of buckets in every [`HashMap`].
pub const BUCKET_COUNT: usize = 16;

/// Sum of the code points of `key`.
///
/// The sum wraps on overflow; the bucket count divides `2^usize::BITS`, so
/// wrapping never changes the bucket a key lands in.
pub fn hash_code_points(key: &str) -> usize {
    key.chars().fold(0, |sum, c| sum.wrapping_add(c as usize))
}

#[inline]
fn bucket_index(key: &str) -> usize {
    hash_code_points(key) % BUCKET_COUNT
}

fn validate(key: &str) -> Result<&str> {
    if key.is_empty() {
        return Err(CollectionError::InvalidKey);
    }
    Ok(key)
}

#[derive(Clone, Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

type Chain<V> = DoublyLinkedList<Entry<V>>;

/// A string-keyed map with a fixed number of chained buckets.
///
/// Every operation rejects the empty key with [`CollectionError::InvalidKey`].
#[derive(Clone)]
pub struct HashMap<V> {
    buckets: [Option<Chain<V>>; BUCKET_COUNT],
    len: usize,
}

impl<V> HashMap<V> {
    pub const fn new() -> Self {
        Self {
            buckets: [const { None }; BUCKET_COUNT],
            len: 0,
        }
    }

    /// Builds a map from pairs, failing on the first invalid key.
    /// Later pairs overwrite earlier ones with the same key.
    pub fn try_from_iter<K, I>(iter: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key.as_ref(), value)?;
        }
        Ok(map)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associates `value` with `key`, returning the value it replaced.
    pub fn set(&mut self, key: &str, value: V) -> Result<Option<V>> {
        let key = validate(key)?;
        let chain = self.buckets[bucket_index(key)].get_or_insert_with(DoublyLinkedList::new);
        if let Some(entry) = chain.find_mut(|entry| entry.key == key) {
            return Ok(Some(core::mem::replace(&mut entry.value, value)));
        }
        chain.add(Entry {
            key: key.to_owned(),
            value,
        });
        self.len += 1;
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>> {
        let key = validate(key)?;
        Ok(self
            .chain(key)
            .and_then(|chain| chain.find(|entry| entry.key == key))
            .map(|entry| &entry.value))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>> {
        let key = validate(key)?;
        Ok(self.buckets[bucket_index(key)]
            .as_mut()
            .and_then(|chain| chain.find_mut(|entry| entry.key == key))
            .map(|entry| &mut entry.value))
    }

    pub fn has(&self, key: &str) -> Result<bool> {
        let key = validate(key)?;
        Ok(self
            .chain(key)
            .is_some_and(|chain| chain.find_index(|entry| entry.key == key).is_some()))
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let key = validate(key)?;
        let slot = &mut self.buckets[bucket_index(key)];
        let Some(chain) = slot.as_mut() else {
            return Ok(false);
        };
        let Some(position) = chain.find_index(|entry| entry.key == key) else {
            return Ok(false);
        };
        chain.remove(position)?;
        if chain.is_empty() {
            *slot = None;
        }
        self.len -= 1;
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.buckets = [const { None }; BUCKET_COUNT];
        self.len = 0;
    }

    /// `(key, value)` pairs in bucket order, then chain order.
    pub fn iter(&self) -> Entries<'_, V> {
        Entries {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Alias of [`iter`](Self::iter).
    pub fn entries(&self) -> Entries<'_, V> {
        self.iter()
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    fn chain(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets[bucket_index(key)].as_ref()
    }
}

// --- Iterators ---

pub struct Entries<'a, V> {
    buckets: core::slice::Iter<'a, Option<Chain<V>>>,
    chain: Option<doubly::Iter<'a, Entry<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }
            let chain = self.buckets.next()?;
            self.chain = chain.as_ref().map(DoublyLinkedList::iter);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}

pub struct Keys<'a, V> {
    inner: Entries<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(|(key, _)| key)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct Values<'a, V> {
    inner: Entries<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> IntoIterator for &'a HashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Entries<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<V> Default for HashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// --- Tests ---
