//! Directed graph model (adjacency list)
//!
//! Nodes carry user-chosen string labels; edges are ordered pairs of
//! labels. Insertion order is preserved for both, which fixes the neighbor
//! discovery order the traversal engine depends on.

use crate::structures::OpError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// The seeded example graph: A→B, A→C, B→D
    pub fn seeded() -> Self {
        let mut graph = Graph::new();
        for id in ["A", "B", "C", "D"] {
            graph = graph.add_node(id).expect("seed ids are distinct");
        }
        for (s, t) in [("A", "B"), ("A", "C"), ("B", "D")] {
            graph = graph.add_edge(s, t).expect("seed endpoints exist");
        }
        graph
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn add_node(&self, id: &str) -> Result<Graph, OpError> {
        if id.is_empty() {
            return Err(OpError::Validation {
                message: "Node ID cannot be empty".to_string(),
            });
        }
        if self.has_node(id) {
            return Err(OpError::Duplicate {
                what: format!("Node \"{}\"", id),
            });
        }
        let mut next = self.clone();
        next.nodes.push(GraphNode { id: id.to_string() });
        Ok(next)
    }

    pub fn add_edge(&self, source: &str, target: &str) -> Result<Graph, OpError> {
        if source.is_empty() || target.is_empty() {
            return Err(OpError::Validation {
                message: "Source and Target IDs are required".to_string(),
            });
        }
        if !self.has_node(source) {
            return Err(OpError::UnknownNode {
                id: source.to_string(),
            });
        }
        if !self.has_node(target) {
            return Err(OpError::UnknownNode {
                id: target.to_string(),
            });
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return Err(OpError::Duplicate {
                what: format!("Edge {}→{}", source, target),
            });
        }
        let mut next = self.clone();
        next.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
        });
        Ok(next)
    }

    /// Outgoing neighbors of `id` in edge-insertion order
    pub fn neighbors<'a>(&'a self, id: &str) -> Vec<&'a str> {
        self.edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.target.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_node_rejected() {
        let graph = Graph::seeded();
        assert!(matches!(
            graph.add_node("A"),
            Err(OpError::Duplicate { .. })
        ));
    }

    #[test]
    fn edge_endpoints_must_exist() {
        let graph = Graph::seeded();
        assert!(matches!(
            graph.add_edge("A", "Z"),
            Err(OpError::UnknownNode { .. })
        ));
        assert!(matches!(
            graph.add_edge("Z", "A"),
            Err(OpError::UnknownNode { .. })
        ));
    }

    #[test]
    fn duplicate_edge_rejected_but_reverse_allowed() {
        let graph = Graph::seeded();
        assert!(matches!(
            graph.add_edge("A", "B"),
            Err(OpError::Duplicate { .. })
        ));
        assert!(graph.add_edge("B", "A").is_ok());
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let graph = Graph::seeded();
        assert_eq!(graph.neighbors("A"), vec!["B", "C"]);
        assert_eq!(graph.neighbors("D"), Vec::<&str>::new());
    }
}
