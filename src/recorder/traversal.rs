//! Graph traversal engine
//!
//! BFS and DFS share all node/edge bookkeeping and differ only in frontier
//! discipline. The frontier may briefly hold duplicate entries: a neighbor
//! is filtered against `visited` at discovery time, but a node can still be
//! discovered twice before its first visit. Such duplicates resolve as a
//! silent skip at pop time, with no extra highlight emitted.

use crate::insight;
use crate::recorder::{Outcome, StepEvent, Target};
use crate::structures::graph::Graph;
use crate::structures::OpError;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algo {
    Bfs,
    Dfs,
}

impl Algo {
    pub fn label(&self) -> &'static str {
        match self {
            Algo::Bfs => "BFS",
            Algo::Dfs => "DFS",
        }
    }
}

/// Walk the graph from `start`, producing the visit order and one highlight
/// event per visited node.
///
/// DFS pushes neighbors in reverse insertion order so the first-inserted
/// edge is explored first, matching the recursive formulation.
pub fn traverse(graph: &Graph, algo: Algo, start: &str) -> Result<Outcome<Vec<String>>, OpError> {
    if !graph.has_node(start) {
        return Err(OpError::UnknownNode {
            id: start.to_string(),
        });
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut order: Vec<String> = Vec::new();
    let mut events: Vec<StepEvent> = Vec::new();

    let mut queue: VecDeque<String> = VecDeque::new();
    let mut stack: Vec<String> = Vec::new();
    match algo {
        Algo::Bfs => queue.push_back(start.to_string()),
        Algo::Dfs => stack.push(start.to_string()),
    }

    loop {
        let current = match algo {
            Algo::Bfs => queue.pop_front(),
            Algo::Dfs => stack.pop(),
        };
        let Some(current) = current else { break };

        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());
        order.push(current.clone());
        events.push(StepEvent::Highlight(Target::Vertex(current.clone())));

        let neighbors = graph.neighbors(&current);
        match algo {
            Algo::Bfs => {
                for neighbor in neighbors {
                    if !visited.contains(neighbor) {
                        queue.push_back(neighbor.to_string());
                    }
                }
            }
            Algo::Dfs => {
                for neighbor in neighbors.into_iter().rev() {
                    if !visited.contains(neighbor) {
                        stack.push(neighbor.to_string());
                    }
                }
            }
        }
    }

    let insight = insight::graph::traversal(algo, start);
    Ok(Outcome::new(order, events, insight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(graph: &Graph, algo: Algo, start: &str) -> Vec<String> {
        traverse(graph, algo, start).unwrap().state
    }

    #[test]
    fn bfs_visits_in_frontier_order() {
        let graph = Graph::seeded();
        assert_eq!(order(&graph, Algo::Bfs, "A"), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn dfs_follows_first_edge_first() {
        let graph = Graph::seeded();
        assert_eq!(order(&graph, Algo::Dfs, "A"), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn unknown_start_is_rejected() {
        let graph = Graph::seeded();
        assert!(matches!(
            traverse(&graph, Algo::Bfs, "Z"),
            Err(OpError::UnknownNode { .. })
        ));
    }

    #[test]
    fn unreachable_nodes_are_never_visited() {
        let graph = Graph::seeded().add_node("X").unwrap();
        let bfs = order(&graph, Algo::Bfs, "A");
        assert!(!bfs.contains(&"X".to_string()));
        let dfs = order(&graph, Algo::Dfs, "A");
        assert!(!dfs.contains(&"X".to_string()));
    }

    #[test]
    fn diamond_visits_each_node_once() {
        // A→B, A→C, B→D, C→D: D is discovered twice but visited once
        let mut graph = Graph::seeded();
        graph = graph.add_edge("C", "D").unwrap();
        let visits = order(&graph, Algo::Bfs, "A");
        assert_eq!(visits, vec!["A", "B", "C", "D"]);
        let events = traverse(&graph, Algo::Bfs, "A").unwrap().events;
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn cycle_terminates() {
        let mut graph = Graph::new();
        for id in ["A", "B", "C"] {
            graph = graph.add_node(id).unwrap();
        }
        for (s, t) in [("A", "B"), ("B", "C"), ("C", "A")] {
            graph = graph.add_edge(s, t).unwrap();
        }
        assert_eq!(order(&graph, Algo::Dfs, "A"), vec!["A", "B", "C"]);
    }
}
