//! Binary search tree model
//!
//! Nodes are reference-counted so an insert copies only the descent path
//! and shares every untouched subtree with the previous state. The previous
//! snapshot therefore stays valid for as long as a playback still renders
//! it.
//!
//! Duplicates are rejected, and there is no per-node delete — the panel
//! offers a full clear instead.

use crate::structures::OpError;
use std::rc::Rc;

type Link = Option<Rc<BstNode>>;

#[derive(Debug)]
pub struct BstNode {
    pub value: i32,
    pub left: Link,
    pub right: Link,
}

#[derive(Debug, Clone, Default)]
pub struct Bst {
    root: Link,
}

impl Bst {
    pub fn new() -> Self {
        Bst { root: None }
    }

    /// The seeded example tree shown when the panel first mounts
    pub fn seeded() -> Self {
        let mut tree = Bst::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            tree = tree.insert(v).expect("seed values are distinct");
        }
        tree
    }

    pub fn root(&self) -> Option<&Rc<BstNode>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `value`, descending left on `<` and right otherwise.
    ///
    /// Fails with `Duplicate` if the value is already present; the tree is
    /// unchanged in that case.
    pub fn insert(&self, value: i32) -> Result<Bst, OpError> {
        fn insert_at(link: &Link, value: i32) -> Result<Link, OpError> {
            match link {
                None => Ok(Some(Rc::new(BstNode {
                    value,
                    left: None,
                    right: None,
                }))),
                Some(node) => {
                    if value == node.value {
                        return Err(OpError::Duplicate {
                            what: format!("Value {}", value),
                        });
                    }
                    let (left, right) = if value < node.value {
                        (insert_at(&node.left, value)?, node.right.clone())
                    } else {
                        (node.left.clone(), insert_at(&node.right, value)?)
                    };
                    Ok(Some(Rc::new(BstNode {
                        value: node.value,
                        left,
                        right,
                    })))
                }
            }
        }

        Ok(Bst {
            root: insert_at(&self.root, value)?,
        })
    }

    /// Standard comparison descent
    pub fn find(&self, value: i32) -> bool {
        let mut current = self.root.as_ref();
        while let Some(node) = current {
            if value < node.value {
                current = node.left.as_ref();
            } else if value > node.value {
                current = node.right.as_ref();
            } else {
                return true;
            }
        }
        false
    }

    pub fn node_count(&self) -> usize {
        fn count(link: &Link) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + count(&node.left) + count(&node.right),
            }
        }
        count(&self.root)
    }

    /// In-order value sequence; sorted by the BST invariant
    pub fn in_order(&self) -> Vec<i32> {
        fn walk(link: &Link, out: &mut Vec<i32>) {
            if let Some(node) = link {
                walk(&node.left, out);
                out.push(node.value);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }
}
