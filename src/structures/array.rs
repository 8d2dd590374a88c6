//! Bounded array model
//!
//! A contiguous sequence of small integers capped at
//! [`MAX_ARRAY_SIZE`](crate::constants::MAX_ARRAY_SIZE) elements. Insert and
//! delete shift the tail, matching the textbook cost model the panel
//! teaches.

use crate::constants::MAX_ARRAY_SIZE;
use crate::structures::OpError;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySeq {
    items: Vec<i32>,
}

impl ArraySeq {
    pub fn new() -> Self {
        ArraySeq { items: Vec::new() }
    }

    /// The seeded example shown when the panel first mounts
    pub fn seeded() -> Self {
        ArraySeq {
            items: vec![10, 25, 5, 42, 18],
        }
    }

    /// A fresh random array of 5..=12 values in 0..100
    pub fn randomized() -> Self {
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(5..=MAX_ARRAY_SIZE);
        ArraySeq {
            items: (0..len).map(|_| rng.gen_range(0..100)).collect(),
        }
    }

    pub fn from_items(items: Vec<i32>) -> Self {
        ArraySeq { items }
    }

    pub fn items(&self) -> &[i32] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `value` at `index`, shifting everything at `>= index` right.
    ///
    /// `index == len` appends. Fails with `OutOfRange` past the end and
    /// `Full` at capacity; the receiver is untouched on failure.
    pub fn insert(&self, index: usize, value: i32) -> Result<ArraySeq, OpError> {
        if index > self.items.len() {
            return Err(OpError::OutOfRange {
                index,
                len: self.items.len() + 1,
            });
        }
        if self.items.len() >= MAX_ARRAY_SIZE {
            return Err(OpError::Full {
                max: MAX_ARRAY_SIZE,
            });
        }
        let mut items = self.items.clone();
        items.insert(index, value);
        Ok(ArraySeq { items })
    }

    /// Remove the element at `index`, shifting the tail left
    pub fn delete(&self, index: usize) -> Result<ArraySeq, OpError> {
        if index >= self.items.len() {
            return Err(OpError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let mut items = self.items.clone();
        items.remove(index);
        Ok(ArraySeq { items })
    }

    /// Linear scan for the first occurrence of `value`
    pub fn search(&self, value: i32) -> Option<usize> {
        self.items.iter().position(|&v| v == value)
    }
}

impl Default for ArraySeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_shifts_right() {
        let arr = ArraySeq::seeded();
        let next = arr.insert(2, 99).unwrap();
        assert_eq!(next.items(), &[10, 25, 99, 5, 42, 18]);
        // original untouched
        assert_eq!(arr.items(), &[10, 25, 5, 42, 18]);
    }

    #[test]
    fn insert_at_len_appends() {
        let arr = ArraySeq::from_items(vec![1, 2]);
        let next = arr.insert(2, 3).unwrap();
        assert_eq!(next.items(), &[1, 2, 3]);
    }

    #[test]
    fn insert_past_end_is_out_of_range() {
        let arr = ArraySeq::from_items(vec![1, 2]);
        assert!(matches!(
            arr.insert(3, 9),
            Err(OpError::OutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn insert_full_only_at_capacity() {
        let arr = ArraySeq::from_items((0..11).collect());
        assert!(arr.insert(0, 99).is_ok());

        let full = ArraySeq::from_items((0..12).collect());
        assert!(matches!(full.insert(0, 99), Err(OpError::Full { max: 12 })));
    }

    #[test]
    fn delete_shifts_left() {
        let arr = ArraySeq::from_items(vec![10, 25, 99, 5, 42, 18]);
        let next = arr.delete(0).unwrap();
        assert_eq!(next.items(), &[25, 99, 5, 42, 18]);
    }

    #[test]
    fn search_returns_first_match() {
        let arr = ArraySeq::from_items(vec![7, 3, 7]);
        assert_eq!(arr.search(7), Some(0));
        assert_eq!(arr.search(4), None);
    }
}
