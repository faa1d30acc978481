use std::hash::Hash;
use std::ops::Index;

use hashbrown::HashMap;

pub trait KeyIndexKey<K> {
    fn key(&self) -> &K;
}

/// Insertion-ordered storage with O(1) lookup by key.
#[derive(Debug, Clone)]
pub struct KeyIndexVec<K: Copy + Eq + Hash, V: KeyIndexKey<K>> {
    items: Vec<V>,
    idx_by_key: HashMap<K, usize>,
}

impl<K, V> Default for KeyIndexVec<K, V>
where
    K: Copy + Eq + Hash,
    V: KeyIndexKey<K>,
{
    fn default() -> Self {
        Self {
            items: Vec::new(),
            idx_by_key: HashMap::new(),
        }
    }
}

impl<K, V> KeyIndexVec<K, V>
where
    K: Copy + Eq + Hash,
    V: KeyIndexKey<K>,
{
    /// Appends `v`, replacing any existing item with the same key in place.
    pub fn push(&mut self, v: V) {
        let key = *v.key();
        match self.idx_by_key.get(&key).copied() {
            Some(idx) => self.items[idx] = v,
            None => {
                self.idx_by_key.insert(key, self.items.len());
                self.items.push(v);
            }
        }
    }

    pub fn remove_by_key(&mut self, key: &K) -> Option<V> {
        let idx = self.idx_by_key.remove(key)?;
        let removed = self.items.remove(idx);
        assert!(*removed.key() == *key);

        for (pos, item) in self.items.iter().enumerate().skip(idx) {
            self.idx_by_key.insert(*item.key(), pos);
        }

        Some(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = K> + '_ {
        self.items.iter().map(|item| *item.key())
    }

    pub fn len(&self) -> usize {
        assert_eq!(self.items.len(), self.idx_by_key.len());
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        assert_eq!(self.items.len(), self.idx_by_key.len());
        self.items.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.idx_by_key.contains_key(key)
    }

    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.idx_by_key.get(key).copied()
    }

    pub fn by_key(&self, key: &K) -> Option<&V> {
        self.index_of_key(key).map(|idx| &self.items[idx])
    }

    pub fn by_key_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.index_of_key(key)?;
        Some(&mut self.items[idx])
    }

    pub fn as_slice(&self) -> &[V] {
        self.items.as_slice()
    }
}

impl<K, V> Index<usize> for KeyIndexVec<K, V>
where
    K: Copy + Eq + Hash,
    V: KeyIndexKey<K>,
{
    type Output = V;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(idx < self.items.len());
        &self.items[idx]
    }
}
