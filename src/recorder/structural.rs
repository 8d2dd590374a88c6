//! Recorders for the single-mutation structure panels
//!
//! Each function validates, runs the operation on a working copy, and
//! returns the outcome the replay scheduler will play at the structural
//! cadence: highlight events first, net effect when the run finishes.
//! Errors mean nothing changed and nothing animates — the panel just
//! flashes the message.

use crate::insight;
use crate::recorder::{Outcome, StepEvent, Target};
use crate::recorder::traversal::Algo;
use crate::structures::array::ArraySeq;
use crate::structures::bst::Bst;
use crate::structures::graph::Graph;
use crate::structures::hash::HashTable;
use crate::structures::list::{End, LinkedList};
use crate::structures::queue::Queue;
use crate::structures::stack::Stack;
use crate::structures::OpError;

// ---- Array ----

pub fn array_insert(array: &ArraySeq, index: usize, value: i32) -> Result<Outcome<ArraySeq>, OpError> {
    let state = array.insert(index, value)?;
    Ok(Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Index(index))],
        insight::array::insert(index, value),
    ))
}

pub fn array_delete(array: &ArraySeq, index: usize) -> Result<Outcome<ArraySeq>, OpError> {
    let state = array.delete(index)?;
    Ok(Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Index(index))],
        insight::array::delete(index),
    ))
}

pub fn array_search(array: &ArraySeq, value: i32) -> Outcome<ArraySeq> {
    match array.search(value) {
        Some(index) => Outcome::new(
            array.clone(),
            vec![StepEvent::Highlight(Target::Index(index))],
            insight::array::search_found(value, index),
        ),
        None => Outcome::new(array.clone(), Vec::new(), insight::array::search_missed(value))
            .warn(format!("Value {} not found in the array.", value)),
    }
}

// ---- Stack ----

pub fn stack_push(stack: &Stack, value: i32) -> Outcome<Stack> {
    let state = stack.push(value);
    let top = state.len() - 1;
    Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Index(top))],
        insight::stack::push(value),
    )
}

pub fn stack_pop(stack: &Stack) -> Result<Outcome<Stack>, OpError> {
    let (state, value) = stack.pop()?;
    Ok(Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Index(stack.len() - 1))],
        insight::stack::pop(value),
    ))
}

pub fn stack_peek(stack: &Stack) -> Result<Outcome<Stack>, OpError> {
    let value = stack.peek()?;
    Ok(Outcome::new(
        stack.clone(),
        vec![StepEvent::Highlight(Target::Index(stack.len() - 1))],
        insight::stack::peek(value),
    ))
}

// ---- Queue ----

pub fn queue_enqueue(queue: &Queue, value: i32) -> Outcome<Queue> {
    let state = queue.enqueue(value);
    let rear = state.len() - 1;
    Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Index(rear))],
        insight::queue::enqueue(value),
    )
}

pub fn queue_dequeue(queue: &Queue) -> Result<Outcome<Queue>, OpError> {
    let (state, value) = queue.dequeue()?;
    Ok(Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Index(0))],
        insight::queue::dequeue(value),
    ))
}

pub fn queue_peek(queue: &Queue) -> Result<Outcome<Queue>, OpError> {
    let value = queue.peek()?;
    Ok(Outcome::new(
        queue.clone(),
        vec![StepEvent::Highlight(Target::Index(0))],
        insight::queue::peek(value),
    ))
}

// ---- Linked list ----

pub fn list_insert(list: &LinkedList, end: End, value: i32) -> Result<Outcome<LinkedList>, OpError> {
    let (state, id) = list.insert(end, value)?;
    Ok(Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Node(id))],
        insight::list::insert(end, value),
    ))
}

pub fn list_delete(list: &LinkedList, value: i32) -> Result<Outcome<LinkedList>, OpError> {
    let (state, id) = list.delete(value)?;
    Ok(Outcome::new(
        state,
        vec![StepEvent::Highlight(Target::Node(id))],
        insight::list::delete(value),
    ))
}

pub fn list_search(list: &LinkedList, value: i32) -> Outcome<LinkedList> {
    match list.search(value) {
        Some(node) => Outcome::new(
            list.clone(),
            vec![StepEvent::Highlight(Target::Node(node.id))],
            insight::list::search_found(value),
        ),
        None => Outcome::new(list.clone(), Vec::new(), insight::list::search_missed(value))
            .warn(format!("Value {} not found in the list.", value)),
    }
}

// ---- Binary search tree ----

pub fn bst_insert(tree: &Bst, value: i32) -> Outcome<Bst> {
    match tree.insert(value) {
        Ok(state) => Outcome::new(
            state,
            vec![StepEvent::Highlight(Target::TreeValue(value))],
            insight::bst::insert(value),
        ),
        // Duplicate: animate the existing node, keep the lesson on screen
        Err(_) => Outcome::keep_insight(
            tree.clone(),
            vec![StepEvent::Highlight(Target::TreeValue(value))],
        )
        .warn(format!("Value {} already exists in the BST.", value)),
    }
}

pub fn bst_search(tree: &Bst, value: i32) -> Outcome<Bst> {
    let found = tree.find(value);
    let events = vec![StepEvent::Highlight(Target::TreeValue(value))];
    if found {
        Outcome::new(tree.clone(), events, insight::bst::search_found(value))
    } else {
        Outcome::new(tree.clone(), events, insight::bst::search_missed(value))
            .warn(format!("Value {} not found.", value))
    }
}

// ---- Graph edits ----

pub fn graph_add_node(graph: &Graph, id: &str) -> Result<Outcome<Graph>, OpError> {
    let state = graph.add_node(id)?;
    Ok(Outcome::keep_insight(
        state,
        vec![StepEvent::Highlight(Target::Vertex(id.to_string()))],
    ))
}

pub fn graph_add_edge(graph: &Graph, source: &str, target: &str) -> Result<Outcome<Graph>, OpError> {
    let state = graph.add_edge(source, target)?;
    Ok(Outcome::keep_insight(
        state,
        vec![StepEvent::Highlight(Target::EdgeBetween(
            source.to_string(),
            target.to_string(),
        ))],
    ))
}

pub fn graph_traverse(graph: &Graph, algo: Algo, start: &str) -> Result<Outcome<Vec<String>>, OpError> {
    crate::recorder::traversal::traverse(graph, algo, start)
}

// ---- Hash table ----

pub fn hash_insert(table: &HashTable, key: i32) -> Outcome<HashTable> {
    match table.insert(key) {
        Ok((state, bucket, id)) => Outcome::new(
            state,
            vec![
                StepEvent::Highlight(Target::Bucket(bucket)),
                StepEvent::Highlight(Target::Node(id)),
            ],
            insight::hash::insert(key, bucket),
        ),
        Err(_) => {
            // Duplicate: light up the bucket and the entry that is in the way
            let (bucket, _, id) = table.search(key).expect("duplicate key is present");
            Outcome::keep_insight(
                table.clone(),
                vec![
                    StepEvent::Highlight(Target::Bucket(bucket)),
                    StepEvent::Highlight(Target::Node(id)),
                ],
            )
            .warn(format!("Key {} already exists in the table.", key))
        }
    }
}

pub fn hash_search(table: &HashTable, key: i32) -> Outcome<HashTable> {
    match table.search(key) {
        Some((bucket, _, id)) => Outcome::new(
            table.clone(),
            vec![
                StepEvent::Highlight(Target::Bucket(bucket)),
                StepEvent::Highlight(Target::Node(id)),
            ],
            insight::hash::search_found(key, bucket),
        ),
        None => {
            let bucket = crate::structures::hash::bucket_of(key);
            Outcome::new(
                table.clone(),
                vec![StepEvent::Highlight(Target::Bucket(bucket))],
                insight::hash::search_missed(key, bucket),
            )
            .warn(format!("Key {} not found.", key))
        }
    }
}

pub fn hash_delete(table: &HashTable, key: i32) -> Outcome<HashTable> {
    match table.delete(key) {
        Ok((state, bucket, id)) => Outcome::new(
            state,
            vec![
                StepEvent::Highlight(Target::Bucket(bucket)),
                StepEvent::Highlight(Target::Node(id)),
            ],
            insight::hash::delete(key, bucket),
        ),
        Err(_) => {
            let bucket = crate::structures::hash::bucket_of(key);
            Outcome::keep_insight(
                table.clone(),
                vec![StepEvent::Highlight(Target::Bucket(bucket))],
            )
            .warn(format!("Key {} not found for deletion.", key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_insert_reports_error_without_outcome() {
        let arr = ArraySeq::from_items((0..12).collect());
        assert!(matches!(
            array_insert(&arr, 0, 1),
            Err(OpError::Full { .. })
        ));
    }

    #[test]
    fn search_miss_warns_but_keeps_state() {
        let arr = ArraySeq::seeded();
        let outcome = array_search(&arr, 1234);
        assert!(outcome.warning.is_some());
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.state.items(), arr.items());
    }

    #[test]
    fn duplicate_bst_insert_keeps_insight_and_warns() {
        let tree = Bst::seeded();
        let outcome = bst_insert(&tree, 40);
        assert!(outcome.insight.is_none());
        assert!(outcome.warning.is_some());
        assert_eq!(outcome.state.node_count(), 7);
    }

    #[test]
    fn hash_insert_highlights_bucket_then_entry() {
        let outcome = hash_insert(&HashTable::new(), 10);
        assert!(outcome.warning.is_none());
        assert_eq!(outcome.events.len(), 2);
        assert_eq!(
            outcome.events[0],
            StepEvent::Highlight(Target::Bucket(3))
        );
        assert!(matches!(
            outcome.events[1],
            StepEvent::Highlight(Target::Node(_))
        ));
    }
}
