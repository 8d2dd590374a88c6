//! Separate-chaining hash table model
//!
//! A fixed table of [`TABLE_SIZE`](crate::constants::TABLE_SIZE) buckets,
//! each an ordered chain of entries. A key appears at most once in the whole
//! table, and always in the bucket its hash selects.

use crate::constants::TABLE_SIZE;
use crate::structures::{IdGen, NodeId, OpError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: i32,
    pub id: NodeId,
}

#[derive(Debug, Clone)]
pub struct HashTable {
    buckets: Vec<Vec<Entry>>,
    ids: IdGen,
}

/// Bucket index for `key`.
///
/// `rem_euclid` keeps negative keys in range; plain `%` would hand the
/// renderer a negative index.
pub fn bucket_of(key: i32) -> usize {
    key.rem_euclid(TABLE_SIZE as i32) as usize
}

impl HashTable {
    pub fn new() -> Self {
        HashTable {
            buckets: vec![Vec::new(); TABLE_SIZE],
            ids: IdGen::new(),
        }
    }

    pub fn buckets(&self) -> &[Vec<Entry>] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.is_empty())
    }

    /// Append `key` to its bucket's chain.
    ///
    /// Returns the new state, the bucket index, and the new entry's id.
    /// Fails with `Duplicate` if the key is already chained there.
    pub fn insert(&self, key: i32) -> Result<(HashTable, usize, NodeId), OpError> {
        let bucket = bucket_of(key);
        if self.buckets[bucket].iter().any(|e| e.key == key) {
            return Err(OpError::Duplicate {
                what: format!("Key {}", key),
            });
        }
        let mut ids = self.ids.clone();
        let id = ids.alloc();
        let mut buckets = self.buckets.clone();
        buckets[bucket].push(Entry { key, id });
        Ok((HashTable { buckets, ids }, bucket, id))
    }

    /// Scan the key's bucket chain. Returns `(bucket, position, id)`.
    pub fn search(&self, key: i32) -> Option<(usize, usize, NodeId)> {
        let bucket = bucket_of(key);
        self.buckets[bucket]
            .iter()
            .position(|e| e.key == key)
            .map(|pos| (bucket, pos, self.buckets[bucket][pos].id))
    }

    /// Remove `key` from its chain.
    ///
    /// Returns the new state, the bucket index, and the removed entry's id.
    pub fn delete(&self, key: i32) -> Result<(HashTable, usize, NodeId), OpError> {
        let (bucket, pos, id) = self.search(key).ok_or_else(|| OpError::NotFound {
            what: format!("Key {}", key),
        })?;
        let mut buckets = self.buckets.clone();
        buckets[bucket].remove(pos);
        Ok((
            HashTable {
                buckets,
                ids: self.ids.clone(),
            },
            bucket,
            id,
        ))
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_land_in_their_bucket() {
        let mut table = HashTable::new();
        for key in [3, 10, 17] {
            let (next, bucket, _) = table.insert(key).unwrap();
            assert_eq!(bucket, 3);
            table = next;
        }
        let keys: Vec<i32> = table.buckets()[3].iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![3, 10, 17]);
    }

    #[test]
    fn search_finds_chain_position() {
        let (table, _, _) = HashTable::new().insert(3).unwrap();
        let (table, _, _) = table.insert(10).unwrap();
        let (bucket, pos, _) = table.search(10).unwrap();
        assert_eq!((bucket, pos), (3, 1));
        assert!(table.search(24).is_none());
    }

    #[test]
    fn duplicate_key_rejected() {
        let (table, _, _) = HashTable::new().insert(5).unwrap();
        assert!(matches!(table.insert(5), Err(OpError::Duplicate { .. })));
    }

    #[test]
    fn delete_preserves_chain_order() {
        let (table, _, _) = HashTable::new().insert(3).unwrap();
        let (table, _, _) = table.insert(10).unwrap();
        let (table, _, _) = table.insert(17).unwrap();
        let (table, bucket, _) = table.delete(10).unwrap();
        assert_eq!(bucket, 3);
        let keys: Vec<i32> = table.buckets()[3].iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![3, 17]);
    }

    #[test]
    fn negative_keys_stay_in_range() {
        assert_eq!(bucket_of(-3), 4);
        assert_eq!(bucket_of(-7), 0);
        let (table, bucket, _) = HashTable::new().insert(-3).unwrap();
        assert_eq!(bucket, 4);
        assert!(table.search(-3).is_some());
    }
}
