// Integration tests for the structure models

use structty::structures::array::ArraySeq;
use structty::structures::bst::Bst;
use structty::structures::graph::Graph;
use structty::structures::hash::HashTable;
use structty::structures::list::{End, LinkedList};
use structty::structures::queue::Queue;
use structty::structures::stack::Stack;
use structty::structures::OpError;

#[test]
fn array_insert_then_delete_is_identity() {
    let arr = ArraySeq::from_items(vec![10, 25, 5, 42, 18]);
    for index in 0..=arr.len() {
        let inserted = arr.insert(index, 99).unwrap();
        let restored = inserted.delete(index).unwrap();
        assert_eq!(restored.items(), arr.items(), "at index {}", index);
    }
}

#[test]
fn array_full_exactly_at_max_size() {
    let mut arr = ArraySeq::new();
    for v in 0..12 {
        arr = arr.insert(arr.len(), v).unwrap();
    }
    let err = arr.insert(0, 99).unwrap_err();
    assert_eq!(err, OpError::Full { max: 12 });
    // state untouched by the failed call
    assert_eq!(arr.len(), 12);
    assert_eq!(arr.items()[0], 0);
}

#[test]
fn array_end_to_end_example() {
    let arr = ArraySeq::from_items(vec![10, 25, 5, 42, 18]);
    let arr = arr.insert(2, 99).unwrap();
    assert_eq!(arr.items(), &[10, 25, 99, 5, 42, 18]);
    let arr = arr.delete(0).unwrap();
    assert_eq!(arr.items(), &[25, 99, 5, 42, 18]);
}

#[test]
fn stack_is_lifo() {
    let stack = Stack::new().push(1).push(2).push(3);
    let (stack, first) = stack.pop().unwrap();
    let (stack, second) = stack.pop().unwrap();
    let (stack, third) = stack.pop().unwrap();
    assert_eq!(vec![first, second, third], vec![3, 2, 1]);
    assert!(matches!(stack.pop(), Err(OpError::Underflow { .. })));
}

#[test]
fn queue_is_fifo() {
    let queue = Queue::new().enqueue(1).enqueue(2).enqueue(3);
    let (queue, first) = queue.dequeue().unwrap();
    let (queue, second) = queue.dequeue().unwrap();
    let (queue, third) = queue.dequeue().unwrap();
    assert_eq!(vec![first, second, third], vec![1, 2, 3]);
    assert!(matches!(queue.dequeue(), Err(OpError::Underflow { .. })));
}

#[test]
fn bst_insert_then_find_always_succeeds() {
    let mut tree = Bst::new();
    for v in [17, 3, 25, -4, 9, 100, 0] {
        tree = tree.insert(v).unwrap();
        assert!(tree.find(v), "freshly inserted {} must be found", v);
    }
}

#[test]
fn bst_duplicate_insert_changes_nothing() {
    let tree = Bst::seeded();
    let count = tree.node_count();
    let shape = tree.in_order();
    for v in [50, 30, 70, 20, 40, 60, 80] {
        assert!(tree.insert(v).is_err());
    }
    assert_eq!(tree.node_count(), count);
    assert_eq!(tree.in_order(), shape);
}

#[test]
fn linked_list_preserves_value_uniqueness() {
    let (list, _) = LinkedList::new().insert(End::Tail, 7).unwrap();
    assert!(matches!(
        list.insert(End::Head, 7),
        Err(OpError::Duplicate { .. })
    ));
    // ...even across a delete and re-insert
    let (list, _) = list.delete(7).unwrap();
    assert!(list.insert(End::Head, 7).is_ok());
}

#[test]
fn hash_table_end_to_end_example() {
    // Keys 3, 10, 17 all map to bucket 3 and chain in insertion order
    let mut table = HashTable::new();
    for key in [3, 10, 17] {
        let (next, bucket, _) = table.insert(key).unwrap();
        assert_eq!(bucket, 3);
        table = next;
    }
    let keys: Vec<i32> = table.buckets()[3].iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![3, 10, 17]);

    let (bucket, position, _) = table.search(10).unwrap();
    assert_eq!(bucket, 3);
    assert_eq!(position, 1);
}

#[test]
fn hash_table_bucket_placement_law() {
    for key in [0, 1, 6, 7, 13, 14, 700, -1] {
        let (table, bucket, _) = HashTable::new().insert(key).unwrap();
        assert_eq!(bucket, key.rem_euclid(7) as usize);
        let (found_bucket, _, _) = table.search(key).unwrap();
        assert_eq!(found_bucket, bucket);
    }
}

#[test]
fn graph_rejects_duplicates_and_unknown_endpoints() {
    let graph = Graph::seeded();
    assert!(matches!(
        graph.add_node("B"),
        Err(OpError::Duplicate { .. })
    ));
    assert!(matches!(
        graph.add_edge("A", "B"),
        Err(OpError::Duplicate { .. })
    ));
    assert!(matches!(
        graph.add_edge("A", "Q"),
        Err(OpError::UnknownNode { .. })
    ));
    // failures leave the graph as it was
    assert_eq!(graph.nodes().len(), 4);
    assert_eq!(graph.edges().len(), 3);
}
